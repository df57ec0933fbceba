//! bean 实例工厂抽象接口
//!
//! 提供 bean 实例创建的工厂模式支持

use crate::definition::{BeanDefinition, BeanObject, BeanView};
use bean_common::{ContextResult, TypeInfo};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// bean 实例工厂 trait
///
/// 用于根据 bean 定义创建实例
pub trait InstanceFactory: Send + Sync {
    /// 创建 bean 实例
    fn create(&self, definition: &Arc<BeanDefinition>) -> ContextResult<BeanInstance>;

    /// 获取工厂名称
    fn name(&self) -> &str;
}

/// 已创建的 bean 实例
///
/// 持有类型擦除的实例以及按 `TypeId` 索引的类型视图
pub struct BeanInstance {
    definition: Arc<BeanDefinition>,
    object: BeanObject,
    views: HashMap<TypeId, BeanView>,
}

impl BeanInstance {
    /// 根据定义提供的类型为实例生成视图
    pub fn new(definition: Arc<BeanDefinition>, object: BeanObject) -> Self {
        let mut views = HashMap::new();
        for provided in definition.provided_types() {
            match provided.cast(&object) {
                Some(view) => {
                    views.insert(provided.type_info.id, view);
                }
                None => warn!(
                    "bean {} 无法转换为声明提供的类型 {}",
                    definition.type_info(),
                    provided.type_info
                ),
            }
        }

        Self {
            definition,
            object,
            views,
        }
    }

    /// 获取 bean 定义
    pub fn definition(&self) -> &Arc<BeanDefinition> {
        &self.definition
    }

    /// 获取 bean 的实际类型
    pub fn type_info(&self) -> &TypeInfo {
        self.definition.type_info()
    }

    /// 获取类型擦除的实例
    pub fn object(&self) -> &(dyn Any + Send + Sync) {
        &*self.object
    }

    /// 检查实例是否与类型兼容
    pub fn is_compatible(&self, type_id: TypeId) -> bool {
        self.views.contains_key(&type_id)
    }

    /// 获取指定类型的视图
    pub fn view(&self, type_id: TypeId) -> Option<&(dyn Any + Send + Sync)> {
        self.views.get(&type_id).map(|view| &**view)
    }
}

impl std::fmt::Debug for BeanInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeanInstance")
            .field("type_info", self.type_info())
            .field("views", &self.views.len())
            .finish()
    }
}
