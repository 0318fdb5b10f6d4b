use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{
    Data, DeriveInput, Error as SynError, Field, Fields, Ident, LitStr, Result as SynResult,
};

use crate::attrs;

#[derive(Debug)]
pub struct ConsumerData {
    points: Vec<PointData>,
}

#[derive(Debug)]
struct PointData {
    field: Ident,
    annotation: LitStr,
}

pub fn parse_consumer(input: &DeriveInput) -> SynResult<ConsumerData> {
    let Data::Struct(data) = &input.data else {
        return Err(SynError::new(
            input.ident.span(),
            "`#[derive(Inject)]` only supports structs with named fields",
        ));
    };

    let fields: Vec<&Field> = match &data.fields {
        Fields::Named(fields) => fields.named.iter().collect(),
        Fields::Unit => Vec::new(),
        Fields::Unnamed(_) => {
            return Err(SynError::new(
                input.ident.span(),
                "`#[derive(Inject)]` only supports structs with named fields",
            ))
        }
    };

    let mut points = Vec::new();
    for field in fields {
        let Some(annotation) = attrs::parse_field_attributes(&field.attrs)? else {
            continue;
        };
        let Some(ident) = field.ident.clone() else {
            unreachable!("a named field should have an identifier");
        };
        points.push(PointData {
            field: ident,
            annotation,
        });
    }

    Ok(ConsumerData { points })
}

pub fn expand_implementation(input: &DeriveInput, data: ConsumerData) -> TokenStream2 {
    let self_type = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    let points = data
        .points
        .iter()
        .map(|PointData { field, annotation }| {
            let name = field.unraw().to_string();
            quote! {
                taginject::inject::InjectionPoint::new(#name, #annotation, &mut self.#field),
            }
        })
        .collect::<TokenStream2>();

    quote! {
        impl #impl_generics taginject::inject::Injectable for #self_type #type_generics #where_clause {
            fn injection_points(
                &mut self,
            ) -> std::vec::Vec<taginject::inject::InjectionPoint<'_>> {
                std::vec![#points]
            }
        }
    }
}
