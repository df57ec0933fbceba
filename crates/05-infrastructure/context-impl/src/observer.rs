//! 基于 tracing 的容器事件观察者

use context_abstractions::{BeanStored, ContextObserver, ContextReady, FieldInjected};
use tracing::info;

/// 把容器事件输出为 info 级别日志的观察者
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ContextObserver for TracingObserver {
    fn on_bean_stored(&self, event: &BeanStored<'_>) {
        if event.replaced {
            info!("替换 bean >>> {}: {}", event.name, event.bean_type);
        } else {
            info!("创建 bean >>> {}: {}", event.name, event.bean_type);
        }
    }

    fn on_field_injected(&self, event: &FieldInjected<'_>) {
        info!(
            "注入字段 >>> {}.{} ({}) <- {}: {}",
            event.bean_name,
            event.field,
            event.bean_type,
            event.dependency_name,
            event.dependency_type
        );
    }

    fn on_context_ready(&self, event: &ContextReady<'_>) {
        info!(
            "应用上下文就绪 >>> 命名空间: {}, bean 数量: {}, 注入字段: {}",
            event.namespace, event.bean_count, event.injected_fields
        );
    }
}
