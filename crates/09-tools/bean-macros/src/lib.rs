//! # Bean Macros
//!
//! 这个 crate 提供把类型声明为 bean 并在编译时登记到 bean 定义注册表的派生宏。
//!
//! ## 使用示例
//!
//! ```ignore
//! use context_abstractions::Inject;
//! use bean_macros::Bean;
//!
//! #[derive(Default, Bean)]
//! pub struct SecondBean;
//!
//! #[derive(Default, Bean)]
//! pub struct FirstBean {
//!     #[inject]
//!     pub bean: Inject<SecondBean>,
//! }
//! ```
//!
//! 使用方需要直接依赖 `context-abstractions` 和 `ctor`。

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod bean;
mod utils;

/// bean 派生宏
///
/// 为类型实现 `context_abstractions::Bean`，并生成一个 `ctor` 函数在程序启动时
/// 把 bean 定义登记到全局注册表。
///
/// # 类型属性
///
/// - `#[bean(name = "custom")]` - 显式 bean 名称，默认为类型名首字母小写
/// - `#[bean(factory = "path::to::fn")]` - 零参数工厂 `fn() -> Self`，默认使用 `Default`
/// - `#[bean(try_factory = "path::to::fn")]` - 可失败的零参数工厂 `fn() -> Result<Self, E>`
/// - `#[bean(provides(dyn Trait, ...))]` - bean 还能以这些抽象类型被查询
///
/// # 字段属性
///
/// - `#[inject]` - 标记 `Inject<T>` 字段，容器按类型 `T` 查询唯一的 bean 并注入
///
/// # 示例
///
/// ```ignore
/// #[derive(Default, Bean)]
/// #[bean(name = "greeter", provides(dyn Greeter))]
/// pub struct EnglishGreeter;
/// ```
#[proc_macro_derive(Bean, attributes(bean, inject))]
pub fn derive_bean(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    bean::derive_bean_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
