//! bean 注册表实现
//!
//! 名称到实例的映射，是所有查询的唯一数据来源。构建阶段写入，之后只读。

use bean_common::{ContextError, ContextResult};
use context_abstractions::{BeanInstance, BeanStored, ContextObserver};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// bean 注册表
pub struct BeanRegistry {
    /// 名称到实例的映射，按名称有序
    entries: BTreeMap<String, BeanInstance>,
    /// 是否允许同名 bean 覆盖
    allow_overriding: bool,
    /// 事件观察者
    observer: Arc<dyn ContextObserver>,
}

impl BeanRegistry {
    /// 创建新的注册表
    pub fn new(observer: Arc<dyn ContextObserver>) -> Self {
        Self {
            entries: BTreeMap::new(),
            allow_overriding: false,
            observer,
        }
    }

    /// 设置是否允许同名 bean 覆盖
    pub fn with_overriding(mut self, allow_overriding: bool) -> Self {
        self.allow_overriding = allow_overriding;
        self
    }

    /// 存储 bean
    ///
    /// 名称不能为空白；同名 bean 在不允许覆盖时返回 `DuplicateBeanName`
    pub fn store(&mut self, name: impl Into<String>, instance: BeanInstance) -> ContextResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ContextError::precondition(format!(
                "bean 名称不能为空: {}",
                instance.type_info()
            )));
        }

        let replaced = match self.entries.get(&name) {
            Some(existing) if !self.allow_overriding => {
                return Err(ContextError::DuplicateBeanName {
                    name,
                    existing_type: existing.type_info().to_string(),
                    new_type: instance.type_info().to_string(),
                });
            }
            Some(existing) => {
                warn!(
                    "覆盖同名 bean: {} ({} -> {})",
                    name,
                    existing.type_info(),
                    instance.type_info()
                );
                true
            }
            None => false,
        };

        debug!("存储 bean: {} ({})", name, instance.type_info());
        self.observer.on_bean_stored(&BeanStored {
            name: &name,
            bean_type: instance.type_info(),
            instance: instance.object(),
            replaced,
        });
        self.entries.insert(name, instance);

        Ok(())
    }

    /// 获取指定名称的实例
    pub fn get(&self, name: &str) -> Option<&BeanInstance> {
        self.entries.get(name)
    }

    /// 获取指定名称的条目，名称借用自注册表
    pub fn entry(&self, name: &str) -> Option<(&str, &BeanInstance)> {
        self.entries
            .get_key_value(name)
            .map(|(name, instance)| (name.as_str(), instance))
    }

    /// 遍历所有条目（按名称排序）
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BeanInstance)> {
        self.entries
            .iter()
            .map(|(name, instance)| (name.as_str(), instance))
    }

    /// 获取所有名称（按字典序）
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// 获取 bean 数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 注册表是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for BeanRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeanRegistry")
            .field("names", &self.names())
            .field("allow_overriding", &self.allow_overriding)
            .finish()
    }
}
