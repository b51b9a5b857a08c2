//! Code generation for the Reconstruct derive.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use crate::parse::{FieldsKind, ShapeDef};

/// Generate the `Reconstruct` impl for a parsed shape.
pub fn generate(shape: &ShapeDef) -> TokenStream {
    let ident = &shape.ident;
    let name = &shape.name;
    let krate = &shape.krate;
    let (impl_generics, ty_generics, where_clause) = shape.generics.split_for_impl();

    let param_names: Vec<&str> = shape.params().map(|p| p.name.as_str()).collect();

    // One binding per parameter, read off the cursor in positional order
    let bindings: Vec<Ident> = (0..param_names.len())
        .map(|i| format_ident!("__arg{}", i))
        .collect();
    let reads = param_names.iter().zip(&bindings).map(|(param_name, binding)| {
        quote! { let #binding = __args.next(#param_name)?; }
    });

    let build = generate_build(shape, &bindings);

    quote! {
        impl #impl_generics #krate::Reconstruct for #ident #ty_generics #where_clause {
            const NAME: &'static str = #name;
            const PARAMETERS: &'static [&'static str] = &[#(#param_names),*];

            fn construct(
                __args: &mut #krate::Arguments,
            ) -> ::core::result::Result<Self, #krate::ConstructionError> {
                #(#reads)*
                ::core::result::Result::Ok(#build)
            }
        }
    }
}

/// Generate the expression that assembles the record from the bindings.
///
/// With a custom constructor only the parameters are passed. Otherwise every
/// field is listed, skipped ones taking their type's default.
fn generate_build(shape: &ShapeDef, bindings: &[Ident]) -> TokenStream {
    if let Some(constructor) = &shape.constructor {
        return quote! { #constructor(#(#bindings),*) };
    }

    let mut next_binding = bindings.iter();
    let values: Vec<TokenStream> = shape
        .fields
        .iter()
        .map(|field| {
            let binding = if field.skip { None } else { next_binding.next() };
            match binding {
                Some(binding) => quote! { #binding },
                None => quote! { ::core::default::Default::default() },
            }
        })
        .collect();

    match shape.kind {
        FieldsKind::Named => {
            let idents = shape.fields.iter().filter_map(|f| f.ident.as_ref());
            quote! { Self { #(#idents: #values),* } }
        }
        FieldsKind::Unnamed => quote! { Self(#(#values),*) },
        FieldsKind::Unit => quote! { Self },
    }
}
