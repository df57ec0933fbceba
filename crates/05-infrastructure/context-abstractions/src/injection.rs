//! 可注入字段
//!
//! 容器在所有 bean 存储完成后通过内部可变性写入依赖，字段只能被写入一次

use bean_common::InjectError;
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;

/// 可注入字段
///
/// 标记 `#[inject]` 的字段必须使用这个类型，`T` 为依赖类型，可以是具体 bean 类型，
/// 也可以是 bean 声明提供的 `dyn Trait`
pub struct Inject<T: ?Sized> {
    cell: OnceCell<Arc<T>>,
}

impl<T: ?Sized> Inject<T> {
    /// 创建尚未注入的字段
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// 创建已经持有依赖的字段
    pub fn with_value(value: Arc<T>) -> Self {
        Self {
            cell: OnceCell::with_value(value),
        }
    }

    /// 获取注入的依赖
    pub fn get(&self) -> Option<&Arc<T>> {
        self.cell.get()
    }

    /// 获取注入依赖的克隆
    pub fn cloned(&self) -> Option<Arc<T>> {
        self.cell.get().cloned()
    }

    /// 是否已经注入
    pub fn is_injected(&self) -> bool {
        self.cell.get().is_some()
    }

    /// 写入依赖
    pub fn set(&self, value: Arc<T>) -> Result<(), InjectError> {
        self.cell
            .set(value)
            .map_err(|_| InjectError::AlreadyInjected {
                type_name: std::any::type_name::<T>(),
            })
    }
}

impl<T: ?Sized> Default for Inject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Inject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inject")
            .field("type", &std::any::type_name::<T>())
            .field("injected", &self.is_injected())
            .finish()
    }
}
