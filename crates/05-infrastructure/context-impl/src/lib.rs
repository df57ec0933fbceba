//! # bean 容器具体实现
//!
//! 提供基于命名空间扫描的应用上下文：扫描 bean 定义、创建实例、存储到注册表、
//! 注入依赖字段，并通过类型化查询接口对外提供 bean。
//!
//! ```ignore
//! use context_abstractions::BeanLookupExt;
//! use context_impl::ApplicationContext;
//!
//! let context = ApplicationContext::new("my_app::beans")?;
//! let first = context.get_bean::<FirstBean>()?;
//! ```

pub mod context;
pub mod factory;
pub mod injector;
pub mod lookup;
pub mod observer;
pub mod registry;
pub mod scanner;
pub mod settings;

#[cfg(test)]
mod tests;

pub use context::*;
pub use factory::*;
pub use injector::*;
pub use observer::*;
pub use registry::*;
pub use scanner::*;
pub use settings::*;
