//! bean 扫描器抽象接口
//!
//! 提供按命名空间发现 bean 定义的能力，以及进程级的 bean 定义注册表

use crate::definition::{Bean, BeanDefinition};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;

/// bean 扫描器 trait
pub trait BeanScanner: Send + Sync {
    /// 扫描命名空间及其子命名空间中的 bean 定义
    ///
    /// 无法识别的命名空间返回空集合
    fn scan(&self, namespace: &str) -> Vec<Arc<BeanDefinition>>;

    /// 获取扫描器名称
    fn name(&self) -> &str;
}

/// 全局 bean 定义注册表
///
/// 由 `#[derive(Bean)]` 生成的 ctor 函数在程序启动时填充
static BEAN_DEFINITION_TABLE: Lazy<RwLock<Vec<Arc<BeanDefinition>>>> =
    Lazy::new(|| RwLock::new(Vec::new()));

/// 注册 bean 定义到全局注册表
pub fn register_bean_definition(definition: BeanDefinition) {
    BEAN_DEFINITION_TABLE.write().push(Arc::new(definition));
}

/// 注册 bean 类型到全局注册表
pub fn register_bean<B: Bean>() {
    register_bean_definition(B::bean_definition());
}

/// 获取全局注册表中的所有 bean 定义
pub fn registered_bean_definitions() -> Vec<Arc<BeanDefinition>> {
    BEAN_DEFINITION_TABLE.read().clone()
}
