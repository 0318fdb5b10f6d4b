mod attrs;
mod impls;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use syn::{DeriveInput, Result as SynResult};

/// Derives `taginject::inject::Injectable` for a struct with named fields.
///
/// Every field annotated with `#[inject("name")]` or
/// `#[inject("name,prototype")]` becomes an injection point, in declaration
/// order. Annotated fields must be `Option<T>` slots.
#[proc_macro_derive(Inject, attributes(inject))]
pub fn inject(item: TokenStream) -> TokenStream {
    match inject_impl(item) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

fn inject_impl(item: TokenStream) -> SynResult<TokenStream2> {
    let input = syn::parse::<DeriveInput>(item)?;
    let data = impls::parse_consumer(&input)?;
    Ok(impls::expand_implementation(&input, data))
}
