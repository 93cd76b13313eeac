use proc_macro2::TokenStream;
use syn::{Expr, Field, LitStr, Path, Token, parenthesized, token};

/// Options gathered from the attributes of one record field.
///
/// The wire name is read from `#[serde(rename = "...")]` so that the serde
/// shape and the generated descriptor always agree. Enumeration-typed fields
/// are marked with `#[record(enumeration = SomeEnum)]`.
pub(crate) struct FieldAttributes {
  pub(crate) wire:        Option<String>,
  pub(crate) enumeration: Option<Path>,
}

impl FieldAttributes {
  pub(crate) fn from_field(field: &Field) -> syn::Result<Self> {
    let mut attrs = FieldAttributes {
      wire:        None,
      enumeration: None,
    };

    for attr in &field.attrs {
      if attr.path().is_ident("serde") {
        attr.parse_nested_meta(|meta| {
          if meta.path.is_ident("rename") && meta.input.peek(Token![=]) {
            let lit: LitStr = meta.value()?.parse()?;
            attrs.wire = Some(lit.value());
          } else if meta.input.peek(Token![=]) {
            let _: Expr = meta.value()?.parse()?;
          } else if meta.input.peek(token::Paren) {
            let content;
            parenthesized!(content in meta.input);
            let _: TokenStream = content.parse()?;
          }
          Ok(())
        })?;
      } else if attr.path().is_ident("record") {
        attr.parse_nested_meta(|meta| {
          if meta.path.is_ident("enumeration") {
            attrs.enumeration = Some(meta.value()?.parse()?);
            Ok(())
          } else {
            Err(meta.error("unsupported record attribute"))
          }
        })?;
      }
    }

    Ok(attrs)
  }
}
