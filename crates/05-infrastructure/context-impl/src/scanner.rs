//! bean 扫描器实现

use context_abstractions::{registered_bean_definitions, Bean, BeanDefinition, BeanScanner};
use std::sync::Arc;
use tracing::{debug, warn};

/// 按命名空间过滤 bean 定义
fn filter_namespace<'a>(
    definitions: impl IntoIterator<Item = &'a Arc<BeanDefinition>>,
    namespace: &str,
) -> Vec<Arc<BeanDefinition>> {
    let found: Vec<_> = definitions
        .into_iter()
        .filter(|definition| definition.metadata().is_in_namespace(namespace))
        .cloned()
        .collect();

    if found.is_empty() {
        warn!("命名空间 {} 中没有发现任何 bean", namespace);
    } else {
        debug!("命名空间 {} 中发现 {} 个 bean", namespace, found.len());
    }
    found
}

/// 命名空间扫描器
///
/// 从 `#[derive(Bean)]` 填充的全局注册表中按模块路径前缀筛选 bean 定义
#[derive(Debug, Default, Clone, Copy)]
pub struct NamespaceScanner;

impl BeanScanner for NamespaceScanner {
    fn scan(&self, namespace: &str) -> Vec<Arc<BeanDefinition>> {
        let definitions = registered_bean_definitions();
        filter_namespace(&definitions, namespace)
    }

    fn name(&self) -> &str {
        "namespace"
    }
}

/// 静态扫描器
///
/// 只扫描显式登记的 bean 定义，不依赖全局注册表
#[derive(Debug, Default, Clone)]
pub struct StaticScanner {
    definitions: Vec<Arc<BeanDefinition>>,
}

impl StaticScanner {
    /// 创建空的静态扫描器
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记 bean 类型
    pub fn register<B: Bean>(self) -> Self {
        self.register_definition(B::bean_definition())
    }

    /// 登记 bean 定义
    pub fn register_definition(mut self, definition: BeanDefinition) -> Self {
        self.definitions.push(Arc::new(definition));
        self
    }

    /// 已登记的定义数量
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// 是否没有登记任何定义
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl BeanScanner for StaticScanner {
    fn scan(&self, namespace: &str) -> Vec<Arc<BeanDefinition>> {
        filter_namespace(&self.definitions, namespace)
    }

    fn name(&self) -> &str {
        "static"
    }
}
