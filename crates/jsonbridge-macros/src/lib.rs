//! Procedural macros for jsonbridge.
//!
//! This crate provides the `Reconstruct` derive, which declares a struct's
//! positional constructor for JSON reconstruction.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod codegen;
mod parse;

/// Derive a `jsonbridge::Reconstruct` implementation.
///
/// # Syntax
///
/// ```ignore
/// // Parameters are the fields, in declaration order
/// #[derive(Reconstruct)]
/// struct Rectangle { width: f64, height: f64 }
///
/// // Tuple structs name their parameters "0", "1", ...
/// #[derive(Reconstruct)]
/// struct Pair(i32, i32);
///
/// // Route the values through a constructor with the same parameter order
/// #[derive(Reconstruct)]
/// #[reconstruct(name = "Disk", constructor = Self::new)]
/// struct Circle { radius: f64 }
///
/// // Name used when matching object keys by name
/// #[derive(Reconstruct)]
/// struct User { #[reconstruct(rename = "userName")] user_name: String }
///
/// // Not a parameter; the struct literal fills it with `Default::default()`
/// #[derive(Reconstruct)]
/// struct Counter { label: String, #[reconstruct(skip)] hits: u32 }
///
/// // Generated paths start at `::jsonbridge` unless told otherwise, for
/// // crates that only reach jsonbridge through a re-export
/// #[derive(Reconstruct)]
/// #[reconstruct(crate = objkit::jsonbridge)]
/// struct Size { w: u32, h: u32 }
/// ```
///
/// Enums and unions are rejected.
#[proc_macro_derive(Reconstruct, attributes(reconstruct))]
pub fn derive_reconstruct(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match parse::ShapeDef::from_derive(&input) {
        Ok(shape) => codegen::generate(&shape).into(),
        Err(err) => err.to_compile_error().into(),
    }
}
