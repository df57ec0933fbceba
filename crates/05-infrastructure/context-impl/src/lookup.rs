//! 基于注册表的 bean 查询实现
//!
//! 兼容性判断以实例提供的类型视图为准：bean 自身类型，以及定义中声明提供的抽象类型。

use crate::registry::BeanRegistry;
use bean_common::{BeanError, BeanResult, TypeInfo};
use context_abstractions::{BeanInstance, BeanLookup, ResolvedBean};
use std::any::TypeId;
use tracing::debug;

fn resolve<'a>(
    name: &'a str,
    instance: &'a BeanInstance,
    type_id: TypeId,
) -> Option<ResolvedBean<'a>> {
    instance.view(type_id).map(|view| ResolvedBean {
        name,
        bean_type: instance.type_info(),
        view,
    })
}

impl BeanLookup for BeanRegistry {
    fn find_bean(&self, type_info: &TypeInfo) -> BeanResult<ResolvedBean<'_>> {
        let mut candidates = self.find_all_beans(type_info);
        match candidates.len() {
            0 => {
                debug!("没有与 {} 兼容的 bean", type_info);
                Err(BeanError::no_such_bean(type_info.full_name()))
            }
            1 => Ok(candidates.remove(0)),
            _ => {
                let names = candidates
                    .iter()
                    .map(|candidate| candidate.name.to_string())
                    .collect();
                Err(BeanError::no_unique_bean(type_info.full_name(), names))
            }
        }
    }

    fn find_named_bean(&self, name: &str, type_info: &TypeInfo) -> BeanResult<ResolvedBean<'_>> {
        self.entry(name)
            .and_then(|(candidate, instance)| resolve(candidate, instance, type_info.id))
            .ok_or_else(|| BeanError::no_such_named_bean(type_info.full_name(), name))
    }

    fn find_all_beans(&self, type_info: &TypeInfo) -> Vec<ResolvedBean<'_>> {
        self.iter()
            .filter_map(|(name, instance)| resolve(name, instance, type_info.id))
            .collect()
    }

    fn contains_bean(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    fn bean_names(&self) -> Vec<String> {
        self.names()
    }

    fn bean_type(&self, name: &str) -> Option<&TypeInfo> {
        self.get(name).map(BeanInstance::type_info)
    }

    fn bean_count(&self) -> usize {
        self.len()
    }
}
