//! 元数据定义
//!
//! 提供 bean 类型和类型标记的元数据信息

use crate::conventions::NamingConventions;
use std::any::TypeId;
use std::fmt;

/// 类型信息
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// 类型名称（不包含模块路径）
    pub name: String,
    /// 类型ID
    pub id: TypeId,
    /// 完整类型路径
    pub module_path: String,
}

impl TypeInfo {
    /// 从类型获取类型信息
    ///
    /// 支持 `dyn Trait` 这类非 `Sized` 类型
    pub fn of<T: ?Sized + 'static>() -> Self {
        let full_name = std::any::type_name::<T>();
        Self {
            name: NamingConventions::simple_type_name(full_name).to_string(),
            id: TypeId::of::<T>(),
            module_path: full_name.to_string(),
        }
    }

    /// 获取完整的类型名称
    pub fn full_name(&self) -> &str {
        &self.module_path
    }

    /// 检查是否描述同一个类型
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.module_path)
    }
}

/// bean 标记元数据
///
/// 对应类型上的 bean 标记：可选的显式名称，以及声明所在的命名空间
#[derive(Debug, Clone)]
pub struct BeanMetadata {
    /// 类型信息
    pub type_info: TypeInfo,
    /// 类型的简单标识符
    pub simple_name: String,
    /// 显式指定的 bean 名称
    pub explicit_name: Option<String>,
    /// 声明所在的命名空间（模块路径）
    pub namespace: String,
}

impl BeanMetadata {
    /// 创建新的 bean 元数据
    pub fn new<T: 'static>(namespace: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            type_info: TypeInfo::of::<T>(),
            simple_name: simple_name.into(),
            explicit_name: None,
            namespace: namespace.into(),
        }
    }

    /// 设置显式名称
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.explicit_name = Some(name.into());
        self
    }

    /// 解析 bean 名称
    ///
    /// 显式名称为空或空白时回退到类型简单名称的首字母小写形式
    pub fn resolved_name(&self) -> String {
        match self.explicit_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => NamingConventions::default_bean_name(&self.simple_name),
        }
    }

    /// 检查是否声明在指定命名空间或其子命名空间中
    pub fn is_in_namespace(&self, namespace: &str) -> bool {
        NamingConventions::namespace_contains(namespace, &self.namespace)
    }
}
