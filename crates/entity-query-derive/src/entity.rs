//! Entity derive macro implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, LitStr, Result};

use crate::ident::parse_ident_with_span;

/// Struct-level `#[entity(...)]` options.
#[derive(Default)]
struct EntityAttr {
    name: Option<String>,
    alias: Option<String>,
}

fn parse_entity_attr(input: &DeriveInput) -> Result<EntityAttr> {
    let mut out = EntityAttr::default();
    for attr in &input.attrs {
        if !attr.path().is_ident("entity") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                out.name = Some(parse_ident_with_span(&lit.value(), lit.span(), "entity name")?);
                Ok(())
            } else if meta.path.is_ident("alias") {
                let lit: LitStr = meta.value()?.parse()?;
                out.alias = Some(parse_ident_with_span(&lit.value(), lit.span(), "entity alias")?);
                Ok(())
            } else {
                Err(meta.error("unsupported entity attribute (expected `name` or `alias`)"))
            }
        })?;
    }
    Ok(out)
}

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let attr = parse_entity_attr(&input)?;
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let name_fn = attr.name.map(|name| {
        quote! {
            fn entity_name() -> &'static str {
                #name
            }
        }
    });
    let alias_fn = attr.alias.map(|alias| {
        quote! {
            fn default_alias() -> ::core::option::Option<&'static str> {
                ::core::option::Option::Some(#alias)
            }
        }
    });

    Ok(quote! {
        impl #impl_generics ::entity_query::Entity for #ident #ty_generics #where_clause {
            #name_fn
            #alias_fn
        }
    })
}
