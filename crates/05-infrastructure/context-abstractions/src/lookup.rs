//! bean 查询抽象接口
//!
//! 提供按类型、按名称加类型以及按类型批量查询 bean 的能力

use bean_common::{BeanError, BeanResult, TypeInfo};
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// 查询命中的 bean
#[derive(Clone, Copy)]
pub struct ResolvedBean<'a> {
    /// bean 名称
    pub name: &'a str,
    /// bean 的实际类型
    pub bean_type: &'a TypeInfo,
    /// 与查询类型对应的视图，实际类型为 `Arc<T>`
    pub view: &'a (dyn Any + Send + Sync),
}

impl ResolvedBean<'_> {
    /// 把视图还原为查询类型
    pub fn downcast<T: ?Sized + 'static>(&self) -> Option<Arc<T>> {
        self.view.downcast_ref::<Arc<T>>().cloned()
    }
}

impl std::fmt::Debug for ResolvedBean<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedBean")
            .field("name", &self.name)
            .field("bean_type", &self.bean_type)
            .finish()
    }
}

/// bean 查询 trait
///
/// 类型擦除的查询接口，可以作为 trait object 使用；类型化的查询由 [`BeanLookupExt`] 提供
pub trait BeanLookup: Send + Sync {
    /// 查找唯一与类型兼容的 bean
    ///
    /// 没有匹配返回 `NoSuchBean`，多于一个匹配返回 `NoUniqueBean`
    fn find_bean(&self, type_info: &TypeInfo) -> BeanResult<ResolvedBean<'_>>;

    /// 在与类型兼容的 bean 中按名称查找
    fn find_named_bean(&self, name: &str, type_info: &TypeInfo) -> BeanResult<ResolvedBean<'_>>;

    /// 查找所有与类型兼容的 bean
    fn find_all_beans(&self, type_info: &TypeInfo) -> Vec<ResolvedBean<'_>>;

    /// 检查是否存在指定名称的 bean
    fn contains_bean(&self, name: &str) -> bool;

    /// 获取所有 bean 名称（按字典序）
    fn bean_names(&self) -> Vec<String>;

    /// 获取指定名称 bean 的实际类型
    fn bean_type(&self, name: &str) -> Option<&TypeInfo>;

    /// 获取 bean 数量
    fn bean_count(&self) -> usize {
        self.bean_names().len()
    }
}

/// 类型化查询扩展
pub trait BeanLookupExt: BeanLookup {
    /// 按类型获取唯一的 bean
    fn get_bean<T: ?Sized + 'static>(&self) -> BeanResult<Arc<T>> {
        let type_info = TypeInfo::of::<T>();
        let resolved = self.find_bean(&type_info)?;
        resolved
            .downcast::<T>()
            .ok_or_else(|| BeanError::no_such_bean(type_info.full_name()))
    }

    /// 按名称和类型获取 bean
    fn get_bean_by_name<T: ?Sized + 'static>(&self, name: &str) -> BeanResult<Arc<T>> {
        let type_info = TypeInfo::of::<T>();
        let resolved = self.find_named_bean(name, &type_info)?;
        resolved
            .downcast::<T>()
            .ok_or_else(|| BeanError::no_such_named_bean(type_info.full_name(), name))
    }

    /// 获取所有与类型兼容的 bean
    fn get_all_beans<T: ?Sized + 'static>(&self) -> HashMap<String, Arc<T>> {
        let type_info = TypeInfo::of::<T>();
        self.find_all_beans(&type_info)
            .into_iter()
            .filter_map(|resolved| {
                resolved
                    .downcast::<T>()
                    .map(|bean| (resolved.name.to_string(), bean))
            })
            .collect()
    }
}

impl<L: BeanLookup + ?Sized> BeanLookupExt for L {}
