//! 应用上下文
//!
//! 构建流程：扫描命名空间 → 创建并存储全部 bean → 为全部 bean 注入字段。
//! 任何一步失败都会中止构建，不会返回部分初始化的上下文。构建完成后上下文只读，
//! 可以在多个线程间共享查询。

use crate::settings::ContextConfig;
use crate::factory::DefaultInstanceFactory;
use crate::injector::Injector;
use crate::observer::TracingObserver;
use crate::registry::BeanRegistry;
use crate::scanner::NamespaceScanner;
use bean_common::{BeanResult, ContextError, ContextResult, TypeInfo};
use chrono::{DateTime, Utc};
use context_abstractions::{
    BeanLookup, BeanScanner, ContextObserver, ContextReady, InstanceFactory, NoopObserver,
    ResolvedBean,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// 应用上下文
pub struct ApplicationContext {
    id: Uuid,
    namespace: String,
    started_at: DateTime<Utc>,
    registry: BeanRegistry,
}

impl ApplicationContext {
    /// 扫描命名空间并构建上下文
    ///
    /// 使用全局 bean 定义注册表和从默认来源加载的配置
    pub fn new(namespace: &str) -> ContextResult<Self> {
        Self::builder()
            .namespace(namespace)
            .config(ContextConfig::load()?)
            .build()
    }

    /// 创建上下文构建器
    pub fn builder() -> ApplicationContextBuilder {
        ApplicationContextBuilder::new()
    }

    /// 上下文唯一标识
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// 扫描的命名空间
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// 启动时间
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

impl BeanLookup for ApplicationContext {
    fn find_bean(&self, type_info: &TypeInfo) -> BeanResult<ResolvedBean<'_>> {
        self.registry.find_bean(type_info)
    }

    fn find_named_bean(&self, name: &str, type_info: &TypeInfo) -> BeanResult<ResolvedBean<'_>> {
        self.registry.find_named_bean(name, type_info)
    }

    fn find_all_beans(&self, type_info: &TypeInfo) -> Vec<ResolvedBean<'_>> {
        self.registry.find_all_beans(type_info)
    }

    fn contains_bean(&self, name: &str) -> bool {
        self.registry.contains_bean(name)
    }

    fn bean_names(&self) -> Vec<String> {
        self.registry.bean_names()
    }

    fn bean_type(&self, name: &str) -> Option<&TypeInfo> {
        self.registry.bean_type(name)
    }

    fn bean_count(&self) -> usize {
        self.registry.bean_count()
    }
}

impl std::fmt::Debug for ApplicationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApplicationContext")
            .field("id", &self.id)
            .field("namespace", &self.namespace)
            .field("started_at", &self.started_at)
            .field("registry", &self.registry)
            .finish()
    }
}

/// 应用上下文构建器
pub struct ApplicationContextBuilder {
    namespace: Option<String>,
    config: ContextConfig,
    scanner: Box<dyn BeanScanner>,
    factory: Box<dyn InstanceFactory>,
    observer: Option<Arc<dyn ContextObserver>>,
}

impl ApplicationContextBuilder {
    /// 创建使用默认组件的构建器
    pub fn new() -> Self {
        Self {
            namespace: None,
            config: ContextConfig::default(),
            scanner: Box::new(NamespaceScanner),
            factory: Box::new(DefaultInstanceFactory),
            observer: None,
        }
    }

    /// 设置扫描的命名空间
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// 设置上下文配置
    pub fn config(mut self, config: ContextConfig) -> Self {
        self.config = config;
        self
    }

    /// 设置 bean 扫描器
    pub fn scanner(mut self, scanner: impl BeanScanner + 'static) -> Self {
        self.scanner = Box::new(scanner);
        self
    }

    /// 设置实例工厂
    pub fn factory(mut self, factory: impl InstanceFactory + 'static) -> Self {
        self.factory = Box::new(factory);
        self
    }

    /// 设置事件观察者
    ///
    /// 未设置时根据 `log_diagnostics` 选择 [`TracingObserver`] 或 [`NoopObserver`]
    pub fn observer(mut self, observer: Arc<dyn ContextObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// 构建应用上下文
    pub fn build(self) -> ContextResult<ApplicationContext> {
        let namespace = self
            .namespace
            .filter(|namespace| !namespace.trim().is_empty())
            .ok_or_else(|| ContextError::precondition("扫描的命名空间不能为空"))?;
        let started_at = Utc::now();

        info!(
            "开始构建应用上下文: 命名空间 {}, 扫描器 {}, 工厂 {}",
            namespace,
            self.scanner.name(),
            self.factory.name()
        );

        let observer: Arc<dyn ContextObserver> = match self.observer {
            Some(observer) => observer,
            None if self.config.log_diagnostics => Arc::new(TracingObserver),
            None => Arc::new(NoopObserver),
        };

        let definitions = self.scanner.scan(&namespace);
        let mut registry = BeanRegistry::new(Arc::clone(&observer))
            .with_overriding(self.config.allow_bean_name_overriding);

        for definition in &definitions {
            let instance = self.factory.create(definition)?;
            registry.store(definition.bean_name(), instance)?;
        }

        let injected_fields =
            Injector::new(&registry, &*observer).inject_all(registry.iter())?;

        observer.on_context_ready(&ContextReady {
            namespace: &namespace,
            bean_count: registry.len(),
            injected_fields,
        });

        let context = ApplicationContext {
            id: Uuid::new_v4(),
            namespace,
            started_at,
            registry,
        };
        info!(
            "应用上下文 {} 构建完成, 耗时 {} ms",
            context.id,
            (Utc::now() - started_at).num_milliseconds()
        );

        Ok(context)
    }
}

impl Default for ApplicationContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ApplicationContextBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApplicationContextBuilder")
            .field("namespace", &self.namespace)
            .field("config", &self.config)
            .field("scanner", &self.scanner.name())
            .field("factory", &self.factory.name())
            .finish()
    }
}
