//! bean 派生宏实现

use crate::utils::{
    extract_generic_type, field_has_attribute, is_inject_type, registration_fn_ident,
};
use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{
    punctuated::Punctuated, spanned::Spanned, Data, DeriveInput, Error, Fields, Index, LitStr,
    Member, Path, Result, Token, Type,
};

/// bean 工厂来源
#[derive(Clone, Default)]
pub enum FactoryKind {
    /// 使用 `Default::default`
    #[default]
    Default,
    /// `fn() -> Self`
    Infallible(Path),
    /// `fn() -> Result<Self, E>`
    Fallible(Path),
}

/// `#[bean(...)]` 参数
#[derive(Clone, Default)]
pub struct BeanArgs {
    /// 显式 bean 名称
    pub name: Option<String>,
    /// 工厂来源
    pub factory: FactoryKind,
    /// 额外提供的抽象类型
    pub provides: Vec<Type>,
}

impl BeanArgs {
    fn from_attrs(attrs: &[syn::Attribute]) -> Result<Self> {
        let mut args = BeanArgs::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("bean")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let lit: LitStr = meta.value()?.parse()?;
                    args.name = Some(lit.value());
                } else if meta.path.is_ident("factory") || meta.path.is_ident("try_factory") {
                    if !matches!(args.factory, FactoryKind::Default) {
                        return Err(meta.error("factory 和 try_factory 只能指定一个"));
                    }
                    let lit: LitStr = meta.value()?.parse()?;
                    let path: Path = lit.parse()?;
                    args.factory = if meta.path.is_ident("factory") {
                        FactoryKind::Infallible(path)
                    } else {
                        FactoryKind::Fallible(path)
                    };
                } else if meta.path.is_ident("provides") {
                    let content;
                    syn::parenthesized!(content in meta.input);
                    let types = Punctuated::<Type, Token![,]>::parse_terminated(&content)?;
                    args.provides.extend(types);
                } else {
                    return Err(meta.error(
                        "不支持的 bean 属性，可用: name, factory, try_factory, provides",
                    ));
                }
                Ok(())
            })?;
        }

        Ok(args)
    }
}

/// 注入点描述
struct InjectField {
    member: Member,
    name: String,
    dependency: Type,
}

fn collect_inject_fields(fields: &Fields) -> Result<Vec<InjectField>> {
    let mut points = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        if !field_has_attribute(field, "inject") {
            continue;
        }

        let dependency = match extract_generic_type(&field.ty) {
            Some(inner) if is_inject_type(&field.ty) => inner.clone(),
            _ => {
                return Err(Error::new(
                    field.ty.span(),
                    "#[inject] 字段必须是 Inject<T> 类型",
                ))
            }
        };

        let (member, name) = match &field.ident {
            Some(ident) => (Member::Named(ident.clone()), ident.to_string()),
            None => (Member::Unnamed(Index::from(index)), index.to_string()),
        };

        points.push(InjectField {
            member,
            name,
            dependency,
        });
    }

    Ok(points)
}

/// 实现 #[derive(Bean)] 宏
pub fn derive_bean_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new(
            input.generics.span(),
            "bean 类型不能带泛型参数或生命周期参数",
        ));
    }

    let inject_fields = match &input.data {
        Data::Struct(data) => collect_inject_fields(&data.fields)?,
        Data::Enum(data) => {
            let injects_variant_field = data
                .variants
                .iter()
                .flat_map(|variant| variant.fields.iter())
                .any(|field| field_has_attribute(field, "inject"));
            if injects_variant_field {
                return Err(Error::new(
                    struct_name.span(),
                    "只有结构体 bean 支持 #[inject] 字段",
                ));
            }
            Vec::new()
        }
        Data::Union(_) => {
            return Err(Error::new(struct_name.span(), "union 不能声明为 bean"));
        }
    };

    let args = BeanArgs::from_attrs(&input.attrs)?;

    let with_name = args.name.as_ref().map(|name| quote! { .with_name(#name) });

    let factory = match &args.factory {
        FactoryKind::Default => quote! {
            || ::std::result::Result::Ok(<Self as ::std::default::Default>::default())
        },
        FactoryKind::Infallible(path) => quote! {
            || ::std::result::Result::Ok(#path())
        },
        FactoryKind::Fallible(path) => quote! {
            || #path().map_err(::std::convert::Into::into)
        },
    };

    let provides = args.provides.iter().map(|ty| {
        quote! {
            .provides::<Self, #ty>(
                |bean: ::std::sync::Arc<Self>| -> ::std::sync::Arc<#ty> { bean }
            )
        }
    });

    let injection_points = inject_fields.iter().map(|field| {
        let member = &field.member;
        let name = &field.name;
        let dependency = field.dependency.to_token_stream();
        quote! {
            .with_injection_point(
                ::context_abstractions::InjectionPoint::new::<Self, #dependency>(
                    #name,
                    |bean| &bean.#member,
                )
            )
        }
    });

    let registration_fn = registration_fn_ident(struct_name);

    Ok(quote! {
        impl ::context_abstractions::Bean for #struct_name {
            fn bean_definition() -> ::context_abstractions::BeanDefinition {
                let metadata = ::context_abstractions::bean_common::BeanMetadata::new::<Self>(
                    ::std::module_path!(),
                    ::std::stringify!(#struct_name),
                )
                #with_name;

                ::context_abstractions::BeanDefinition::new::<Self, _>(metadata, #factory)
                    #(#provides)*
                    #(#injection_points)*
            }
        }

        // 使用 ctor 在程序启动时登记 bean 定义
        #[ctor::ctor]
        #[allow(non_snake_case)]
        fn #registration_fn() {
            ::context_abstractions::register_bean::<#struct_name>();
        }
    })
}
