//! 容器事件观察者
//!
//! 注册表和注入器在存储、注入时通知观察者，诊断输出不再是核心操作的硬编码副作用

use bean_common::TypeInfo;
use std::any::Any;

/// bean 存储事件
#[derive(Debug, Clone, Copy)]
pub struct BeanStored<'a> {
    /// bean 名称
    pub name: &'a str,
    /// bean 的实际类型
    pub bean_type: &'a TypeInfo,
    /// bean 实例，可向下转型为 bean 的实际类型
    pub instance: &'a (dyn Any + Send + Sync),
    /// 是否覆盖了同名的已有 bean
    pub replaced: bool,
}

/// 字段注入事件
#[derive(Debug, Clone, Copy)]
pub struct FieldInjected<'a> {
    /// 被注入的 bean 名称
    pub bean_name: &'a str,
    /// 被注入的 bean 类型
    pub bean_type: &'a TypeInfo,
    /// 字段名称
    pub field: &'a str,
    /// 注入值对应的 bean 名称
    pub dependency_name: &'a str,
    /// 注入值对应的 bean 类型
    pub dependency_type: &'a TypeInfo,
    /// 注入的值，实际类型为字段声明的 `Arc<T>`
    pub value: &'a (dyn Any + Send + Sync),
}

/// 容器就绪事件
#[derive(Debug, Clone, Copy)]
pub struct ContextReady<'a> {
    /// 扫描的命名空间
    pub namespace: &'a str,
    /// bean 数量
    pub bean_count: usize,
    /// 注入的字段数量
    pub injected_fields: usize,
}

/// 容器事件观察者 trait
pub trait ContextObserver: Send + Sync {
    /// bean 已存储
    fn on_bean_stored(&self, _event: &BeanStored<'_>) {}

    /// 字段已注入
    fn on_field_injected(&self, _event: &FieldInjected<'_>) {}

    /// 容器构建完成
    fn on_context_ready(&self, _event: &ContextReady<'_>) {}
}

/// 忽略所有事件的观察者
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ContextObserver for NoopObserver {}
