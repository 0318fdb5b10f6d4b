use syn::spanned::Spanned;
use syn::{Attribute, Error as SynError, LitStr, Meta, Result as SynResult};

const ATTRIBUTE: &str = "inject";

/// Extracts the annotation of `#[inject("...")]`, if the field has one.
pub fn parse_field_attributes(attrs: &[Attribute]) -> SynResult<Option<LitStr>> {
    let mut res = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTRIBUTE)) {
        let Meta::List(list) = &attr.meta else {
            return Err(SynError::new(
                attr.span(),
                "expects `#[inject(\"...\")]` to receive a string literal",
            ));
        };

        let annotation = syn::parse2::<LitStr>(list.tokens.clone()).map_err(|err| {
            SynError::new(
                err.span(),
                "expects `#[inject(\"...\")]` to receive a string literal",
            )
        })?;

        if res.is_some() {
            return Err(SynError::new(
                attr.span(),
                "only one `#[inject(...)]` attribute is allowed on a field",
            ));
        }
        res = Some(annotation);
    }

    Ok(res)
}
