//! 宏工具函数

use proc_macro2::Span;
use syn::{Field, Ident, Type};

/// 从类型中提取第一个泛型参数
pub fn extract_generic_type(ty: &Type) -> Option<&Type> {
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                if let Some(syn::GenericArgument::Type(inner_type)) = args.args.first() {
                    return Some(inner_type);
                }
            }
        }
    }
    None
}

/// 检查类型是否为 `Inject<T>`
pub fn is_inject_type(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident == "Inject")
            .unwrap_or(false),
        _ => false,
    }
}

/// 检查字段是否有特定属性
pub fn field_has_attribute(field: &Field, attr_name: &str) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident(attr_name))
}

/// 生成 bean 注册函数名
///
/// 直接使用类型名，同一模块内的不同类型名不会冲突
pub fn registration_fn_ident(struct_name: &Ident) -> Ident {
    Ident::new(&format!("__register_bean_{struct_name}"), Span::call_site())
}
