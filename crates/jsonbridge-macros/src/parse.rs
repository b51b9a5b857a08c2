//! Attribute and field parsing for the Reconstruct derive.

use syn::{Data, DeriveInput, Fields, Generics, Ident, LitStr, Path, Result};

/// Everything codegen needs to know about a derived shape.
#[derive(Debug)]
pub struct ShapeDef {
    /// Struct identifier
    pub ident: Ident,
    pub generics: Generics,
    /// Shape name reported in errors (defaults to the identifier)
    pub name: String,
    /// Custom positional constructor, e.g. `Self::new`
    pub constructor: Option<Path>,
    /// Path to the jsonbridge crate as seen from the deriving crate
    pub krate: Path,
    pub kind: FieldsKind,
    /// Every field, in declaration order
    pub fields: Vec<FieldDef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldsKind {
    Named,
    Unnamed,
    Unit,
}

/// A struct field and the constructor parameter it maps to.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier; `None` for tuple struct fields
    pub ident: Option<Ident>,
    /// Name listed in `PARAMETERS` and matched by named lookup
    pub name: String,
    /// Not a parameter; filled with `Default::default()`
    pub skip: bool,
}

impl ShapeDef {
    pub fn from_derive(input: &DeriveInput) -> Result<Self> {
        let fields = match &input.data {
            Data::Struct(data) => &data.fields,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "Reconstruct derive only supports structs",
                ));
            }
        };

        let mut name = input.ident.to_string();
        let mut constructor = None;
        let mut krate: Path = syn::parse_quote!(::jsonbridge);

        for attr in &input.attrs {
            if !attr.path().is_ident("reconstruct") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let lit: LitStr = meta.value()?.parse()?;
                    name = lit.value();
                    Ok(())
                } else if meta.path.is_ident("constructor") {
                    constructor = Some(meta.value()?.parse::<Path>()?);
                    Ok(())
                } else if meta.path.is_ident("crate") {
                    // Accepts `crate = path` as well as serde's `crate = "path"`
                    let value = meta.value()?;
                    krate = if value.peek(LitStr) {
                        value.parse::<LitStr>()?.parse()?
                    } else {
                        value.parse()?
                    };
                    Ok(())
                } else {
                    Err(meta.error("expected `name`, `constructor` or `crate`"))
                }
            })?;
        }

        let kind = match fields {
            Fields::Named(_) => FieldsKind::Named,
            Fields::Unnamed(_) => FieldsKind::Unnamed,
            Fields::Unit => FieldsKind::Unit,
        };

        let mut defs = Vec::new();
        for (index, field) in fields.iter().enumerate() {
            let mut param_name = match &field.ident {
                Some(ident) => ident.to_string(),
                None => index.to_string(),
            };
            let mut skip = false;

            for attr in &field.attrs {
                if !attr.path().is_ident("reconstruct") {
                    continue;
                }
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("rename") {
                        let lit: LitStr = meta.value()?.parse()?;
                        param_name = lit.value();
                        Ok(())
                    } else if meta.path.is_ident("skip") {
                        skip = true;
                        Ok(())
                    } else {
                        Err(meta.error("expected `rename` or `skip`"))
                    }
                })?;
            }

            defs.push(FieldDef {
                ident: field.ident.clone(),
                name: param_name,
                skip,
            });
        }

        Ok(ShapeDef {
            ident: input.ident.clone(),
            generics: input.generics.clone(),
            name,
            constructor,
            krate,
            kind,
            fields: defs,
        })
    }

    /// Fields that are constructor parameters, in positional order.
    pub fn params(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| !f.skip)
    }
}
