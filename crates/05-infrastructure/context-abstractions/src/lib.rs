//! # Bean Context Abstractions
//!
//! bean 容器抽象层，定义 bean 注册、实例创建、依赖注入和查询的核心接口。
//!
//! ## 核心接口
//!
//! - [`BeanDefinition`] - 编译时注册表中的 bean 定义
//! - [`BeanScanner`] - 按命名空间发现 bean 定义
//! - [`InstanceFactory`] - bean 实例工厂接口
//! - [`BeanLookup`] / [`BeanLookupExt`] - 类型化查询接口
//! - [`Inject`] - 可注入字段
//! - [`ContextObserver`] - 存储和注入事件的观察者

pub mod definition;
pub mod factory;
pub mod injection;
pub mod lookup;
pub mod observer;
pub mod scanner;

pub use definition::*;
pub use factory::*;
pub use injection::*;
pub use lookup::*;
pub use observer::*;
pub use scanner::*;

#[doc(hidden)]
pub use bean_common;
