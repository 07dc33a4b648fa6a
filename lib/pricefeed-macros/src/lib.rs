extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, DeriveInput, LitStr, Type};

fn parse_repository_attr(attr: &Attribute) -> syn::Result<(Type, Type)> {
    let mut key_type = None;
    let mut value_type = None;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("K") {
            let s: LitStr = meta.value()?.parse()?;
            key_type = Some(s.parse::<Type>()?);
        } else if meta.path.is_ident("V") {
            let s: LitStr = meta.value()?.parse()?;
            value_type = Some(s.parse::<Type>()?);
        } else {
            return Err(meta.error("expected `K` or `V`"));
        }
        Ok(())
    })?;

    match (key_type, value_type) {
        (Some(k), Some(v)) => Ok((k, v)),
        (None, _) => Err(syn::Error::new_spanned(attr, "Missing attribute 'K'")),
        (_, None) => Err(syn::Error::new_spanned(attr, "Missing attribute 'V'")),
    }
}

/// Implements `RepositoryOps<K, V>` for a struct holding a `col: LedgerColumn<_>`.
///
/// `RepositoryOps` and the crate `Result` alias must be in scope at the
/// derive site.
#[proc_macro_derive(Repository, attributes(repository))]
pub fn repository_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Some(attr) = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("repository"))
    else {
        return syn::Error::new_spanned(name, "Missing #[repository(K = \"..\", V = \"..\")]")
            .to_compile_error()
            .into();
    };

    let (key_type, value_type) = match parse_repository_attr(attr) {
        Ok(types) => types,
        Err(e) => return e.to_compile_error().into(),
    };

    let expanded = quote! {
        impl RepositoryOps<#key_type, #value_type> for #name {
            fn get(&self, id: &#key_type) -> Result<Option<#value_type>> {
                Ok(self.col.get(id)?)
            }

            fn put(&self, id: &#key_type, item: &#value_type) -> Result<()> {
                Ok(self.col.put(id, item)?)
            }
        }
    };

    TokenStream::from(expanded)
}
