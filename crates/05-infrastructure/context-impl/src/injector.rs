//! 依赖注入器
//!
//! 在所有 bean 存储完成后，为每个注入点按依赖类型查询唯一的 bean 并写入字段。

use bean_common::{ContextError, ContextResult};
use context_abstractions::{BeanInstance, BeanLookup, ContextObserver, FieldInjected};
use tracing::{debug, error};

/// 依赖注入器
pub struct Injector<'a> {
    lookup: &'a dyn BeanLookup,
    observer: &'a dyn ContextObserver,
}

impl<'a> Injector<'a> {
    /// 创建新的注入器
    pub fn new(lookup: &'a dyn BeanLookup, observer: &'a dyn ContextObserver) -> Self {
        Self { lookup, observer }
    }

    /// 为单个 bean 注入所有字段，返回注入的字段数
    pub fn inject(&self, bean_name: &str, instance: &BeanInstance) -> ContextResult<usize> {
        let mut injected = 0;

        for point in instance.definition().injection_points() {
            let dependency = self.lookup.find_bean(&point.dependency).map_err(|err| {
                error!(
                    "无法为 bean {} 的字段 {} 解析依赖 {}: {}",
                    bean_name, point.field, point.dependency, err
                );
                ContextError::from(err)
            })?;

            point
                .assign(instance.object(), dependency.view)
                .map_err(|source| ContextError::Injection {
                    bean_name: bean_name.to_string(),
                    field: point.field.to_string(),
                    source,
                })?;

            debug!("注入字段: {}.{} <- {}", bean_name, point.field, dependency.name);
            self.observer.on_field_injected(&FieldInjected {
                bean_name,
                bean_type: instance.type_info(),
                field: point.field,
                dependency_name: dependency.name,
                dependency_type: dependency.bean_type,
                value: dependency.view,
            });
            injected += 1;
        }

        Ok(injected)
    }

    /// 为所有 bean 注入字段，遇到第一个错误即停止
    pub fn inject_all<'b>(
        &self,
        beans: impl IntoIterator<Item = (&'b str, &'b BeanInstance)>,
    ) -> ContextResult<usize> {
        let mut total = 0;
        for (name, instance) in beans {
            total += self.inject(name, instance)?;
        }
        Ok(total)
    }
}

impl std::fmt::Debug for Injector<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Injector")
            .field("bean_count", &self.lookup.bean_count())
            .finish()
    }
}
