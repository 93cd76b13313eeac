use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{GenericArgument, Ident, PathArguments, PathSegment, Type};

/// Path to `sagemodel-core` as seen from the crate being expanded.
pub(crate) fn core_crate() -> TokenStream {
  match crate_name("sagemodel-core") {
    Ok(FoundCrate::Itself) => quote!(crate),
    Ok(FoundCrate::Name(name)) => {
      let ident = Ident::new(&name, Span::call_site());
      quote!(::#ident)
    }
    Err(_) => quote!(::sagemodel_core),
  }
}

/// Last segment of a plain type path, e.g. `Vec<String>` for
/// `std::vec::Vec<String>`.
pub(crate) fn last_segment(ty: &Type) -> Option<&PathSegment> {
  match ty {
    Type::Path(type_path) if type_path.qself.is_none() => {
      type_path.path.segments.last()
    }
    _ => None,
  }
}

/// Generic type arguments of a path segment, in declaration order.
pub(crate) fn type_arguments(segment: &PathSegment) -> Vec<&Type> {
  match &segment.arguments {
    PathArguments::AngleBracketed(args) => args
      .args
      .iter()
      .filter_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
      })
      .collect(),
    _ => Vec::new(),
  }
}

/// `T` for `Option<T>`.
pub(crate) fn option_inner(ty: &Type) -> Option<&Type> {
  let segment = last_segment(ty)?;
  if segment.ident != "Option" {
    return None;
  }
  match type_arguments(segment).as_slice() {
    [inner] => Some(*inner),
    _ => None,
  }
}

/// Name of the outermost type, e.g. `"Vec"` or `"String"`.
pub(crate) fn type_name(ty: &Type) -> String {
  last_segment(ty)
    .map(|segment| segment.ident.to_string())
    .unwrap_or_default()
}

/// PascalCase form of a snake_case field name. Agrees with serde's
/// `rename_all = "PascalCase"`.
pub(crate) fn pascal_case(name: &str) -> String {
  name
    .trim_start_matches("r#")
    .split('_')
    .filter(|part| !part.is_empty())
    .map(|part| {
      let mut chars = part.chars();
      match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
      }
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn pascal_case_matches_serde() {
    assert_eq!(pascal_case("training_job_name"), "TrainingJobName");
    assert_eq!(pascal_case("role_arn"), "RoleArn");
    assert_eq!(pascal_case("value"), "Value");
  }

  #[test]
  fn option_inner_unwraps_one_layer() {
    let ty: Type = syn::parse_quote!(Option<Vec<String>>);
    let inner = option_inner(&ty).map(type_name);
    assert_eq!(inner.as_deref(), Some("Vec"));

    let plain: Type = syn::parse_quote!(String);
    assert!(option_inner(&plain).is_none());
  }
}
