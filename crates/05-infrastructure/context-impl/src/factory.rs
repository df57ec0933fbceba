//! bean 实例工厂实现

use bean_common::{ContextError, ContextResult};
use context_abstractions::{BeanDefinition, BeanInstance, InstanceFactory};
use std::sync::Arc;
use tracing::{debug, error};

/// 默认实例工厂
///
/// 调用 bean 定义中的零参数工厂，失败时包装为 `ConstructionFailure`
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultInstanceFactory;

impl InstanceFactory for DefaultInstanceFactory {
    fn create(&self, definition: &Arc<BeanDefinition>) -> ContextResult<BeanInstance> {
        let bean_name = definition.bean_name();
        debug!("创建 bean 实例: {} ({})", bean_name, definition.type_info());

        let object = definition.instantiate().map_err(|source| {
            error!(
                "bean {} ({}) 创建失败: {}",
                bean_name,
                definition.type_info(),
                source
            );
            ContextError::ConstructionFailure {
                bean_name: bean_name.clone(),
                type_name: definition.type_info().to_string(),
                source,
            }
        })?;

        Ok(BeanInstance::new(Arc::clone(definition), object))
    }

    fn name(&self) -> &str {
        "default"
    }
}
