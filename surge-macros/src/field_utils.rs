use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{Fields, Index, spanned::Spanned};

const ROUTING_KEY_ATTR: &str = "routing_key";

/// 路由字段在结构体/变体中的位置
pub(crate) enum RoutingField {
    Named(syn::Ident),
    Unnamed(usize),
}

impl RoutingField {
    /// 结构体访问表达式：`self.field` / `self.0`
    pub(crate) fn self_access(&self) -> TokenStream2 {
        match self {
            RoutingField::Named(ident) => quote! { self.#ident },
            RoutingField::Unnamed(index) => {
                let index = Index::from(*index);
                quote! { self.#index }
            }
        }
    }

    /// 变体匹配模式与绑定名：`Variant { field, .. }` / `Variant(_, key, ..)`
    pub(crate) fn variant_pattern(&self, variant: &syn::Ident) -> (TokenStream2, syn::Ident) {
        match self {
            RoutingField::Named(ident) => (quote! { Self::#variant { #ident, .. } }, ident.clone()),
            RoutingField::Unnamed(index) => {
                let binding = format_ident!("__routing_key");
                let skipped = (0..*index).map(|_| quote! { _ });
                (
                    quote! { Self::#variant( #( #skipped, )* #binding, .. ) },
                    binding,
                )
            }
        }
    }
}

/// 找出唯一带 `#[routing_key]` 的字段并移除所有该标记
/// - 先移除全部标记再报错，避免残留的辅助属性引发额外的编译错误
/// - 缺失时错误定位到 `owner_span`，重复时定位到多余的那个标记
pub(crate) fn take_routing_field(
    fields: &mut Fields,
    owner_span: Span,
) -> syn::Result<RoutingField> {
    let iter: Box<dyn Iterator<Item = &mut syn::Field> + '_> = match fields {
        Fields::Named(named) => Box::new(named.named.iter_mut()),
        Fields::Unnamed(unnamed) => Box::new(unnamed.unnamed.iter_mut()),
        Fields::Unit => {
            return Err(syn::Error::new(
                owner_span,
                "#[surge_event] requires at least one field marked #[routing_key]",
            ));
        }
    };

    let mut marked: Vec<(RoutingField, Span)> = Vec::new();
    for (index, field) in iter.enumerate() {
        let mut marker: Option<Span> = None;
        field.attrs.retain(|attr| {
            let is_marker = attr.path().is_ident(ROUTING_KEY_ATTR);
            if is_marker && marker.is_none() {
                marker = Some(attr.path().span());
            }
            !is_marker
        });
        if let Some(span) = marker {
            let routing = match &field.ident {
                Some(ident) => RoutingField::Named(ident.clone()),
                None => RoutingField::Unnamed(index),
            };
            marked.push((routing, span));
        }
    }

    let mut marked = marked.into_iter();
    let (routing, _) = marked
        .next()
        .ok_or_else(|| syn::Error::new(owner_span, "missing field marked #[routing_key]"))?;
    if let Some((_, span)) = marked.next() {
        return Err(syn::Error::new(
            span,
            "duplicate #[routing_key]; only one routing field is allowed",
        ));
    }

    Ok(routing)
}
