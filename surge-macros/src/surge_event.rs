use crate::derive_utils::apply_derives;
use crate::field_utils::take_routing_field;
use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Item, parse_macro_input};

/// #[surge_event] 宏实现
/// - 结构体：唯一的 `#[routing_key]` 字段即路由键
/// - 枚举：每个变体各自标记一个 `#[routing_key]` 字段，单元变体不被支持
/// - 不接受任何参数
/// - 出错时仍输出原类型（已移除辅助属性），仅省略 `RoutingKey` 实现，
///   使错误集中在宏本身而不是后续对该类型的使用处
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = proc_macro2::TokenStream::from(attr);
    let mut input = parse_macro_input!(item as Item);
    let mut errors: Vec<syn::Error> = Vec::new();

    if let Some(first) = args.into_iter().next() {
        errors.push(syn::Error::new(
            first.span(),
            "#[surge_event] takes no arguments",
        ));
    }

    // 合并/追加默认派生：Debug, Clone, PartialEq, Serialize, Deserialize
    let required: Vec<syn::Path> = vec![
        syn::parse_quote!(Debug),
        syn::parse_quote!(Clone),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
    ];

    let routing_impl = match &mut input {
        Item::Struct(st) => {
            apply_derives(&mut st.attrs, required);
            match take_routing_field(&mut st.fields, st.ident.span()) {
                Ok(field) => {
                    let ident = &st.ident;
                    let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();
                    let access = field.self_access();

                    Some(quote! {
                        impl #impl_generics ::surge_format::RoutingKey for #ident #ty_generics #where_clause {
                            fn routing_key(&self) -> ::std::string::String {
                                ::std::string::ToString::to_string(&#access)
                            }
                        }
                    })
                }
                Err(err) => {
                    errors.push(err);
                    None
                }
            }
        }
        Item::Enum(en) => {
            apply_derives(&mut en.attrs, required);
            if en.variants.is_empty() {
                errors.push(syn::Error::new(
                    en.ident.span(),
                    "#[surge_event] enum has no variants",
                ));
            }

            // 逐个变体处理，收集全部错误，保证每个变体的辅助属性都被移除
            let mut arms = Vec::with_capacity(en.variants.len());
            for v in &mut en.variants {
                match take_routing_field(&mut v.fields, v.ident.span()) {
                    Ok(field) => {
                        let (pattern, binding) = field.variant_pattern(&v.ident);
                        arms.push(quote! {
                            #pattern => ::std::string::ToString::to_string(#binding)
                        });
                    }
                    Err(err) => errors.push(err),
                }
            }

            if !arms.is_empty() && arms.len() == en.variants.len() {
                let ident = &en.ident;
                let (impl_generics, ty_generics, where_clause) = en.generics.split_for_impl();

                Some(quote! {
                    impl #impl_generics ::surge_format::RoutingKey for #ident #ty_generics #where_clause {
                        fn routing_key(&self) -> ::std::string::String {
                            match self { #( #arms, )* }
                        }
                    }
                })
            } else {
                None
            }
        }
        Item::Union(un) => {
            errors.push(syn::Error::new(
                un.ident.span(),
                "#[surge_event] can only be used on struct or enum types",
            ));
            None
        }
        other => {
            errors.push(syn::Error::new(
                other.span(),
                "#[surge_event] can only be used on struct or enum types",
            ));
            None
        }
    };

    let errors = errors.iter().map(syn::Error::to_compile_error);

    TokenStream::from(quote! {
        #input
        #routing_impl
        #( #errors )*
    })
}
