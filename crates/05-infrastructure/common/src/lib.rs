//! # Bean Common
//!
//! 这个 crate 提供了 bean 容器各层共享的元数据、命名约定和错误类型。
//!
//! ## 核心类型
//!
//! - [`TypeInfo`] - 运行时类型信息
//! - [`BeanMetadata`] - 类型级别的 bean 标记元数据
//! - [`NamingConventions`] - bean 名称推导规则
//! - [`BeanError`] / [`ContextError`] - 查询期和构建期错误
//!
//! ## 设计原则
//!
//! - 编译时注册表代替运行时反射
//! - 查询错误可恢复，构建错误致命

pub mod conventions;
pub mod errors;
pub mod metadata;

pub use conventions::*;
pub use errors::*;
pub use metadata::*;
