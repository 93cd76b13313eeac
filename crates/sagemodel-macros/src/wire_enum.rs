use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
  Data, DeriveInput, Expr, ExprLit, Fields, Lit, LitStr, Meta, Variant,
};

use crate::utils::core_crate;

/// Wire-string for one variant: `#[wire = "..."]`, or the variant name.
fn wire_value(variant: &Variant) -> syn::Result<LitStr> {
  for attr in &variant.attrs {
    if !attr.path().is_ident("wire") {
      continue;
    }
    if let Meta::NameValue(named) = &attr.meta
      && let Expr::Lit(ExprLit {
        lit: Lit::Str(lit), ..
      }) = &named.value
    {
      return Ok(lit.clone());
    }
    return Err(syn::Error::new_spanned(attr, "expected #[wire = \"...\"]"));
  }
  Ok(LitStr::new(&variant.ident.to_string(), variant.ident.span()))
}

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
  let Data::Enum(data) = &input.data else {
    return Err(syn::Error::new_spanned(
      &input.ident,
      "WireEnum can only be derived for enums",
    ));
  };

  let mut variants = Vec::with_capacity(data.variants.len());
  let mut wires = Vec::with_capacity(data.variants.len());
  let mut seen = HashSet::new();
  for variant in &data.variants {
    if !matches!(variant.fields, Fields::Unit) {
      return Err(syn::Error::new_spanned(
        variant,
        "WireEnum variants cannot carry data",
      ));
    }
    let wire = wire_value(variant)?;
    if !seen.insert(wire.value()) {
      return Err(syn::Error::new_spanned(
        &wire,
        format!("wire value {:?} is used twice", wire.value()),
      ));
    }
    variants.push(&variant.ident);
    wires.push(wire);
  }
  if variants.is_empty() {
    return Err(syn::Error::new_spanned(
      &input.ident,
      "WireEnum needs at least one variant",
    ));
  }

  let krate = core_crate();
  let serde = quote!(#krate::__private::serde);
  let name = &input.ident;
  let type_name = name.to_string();

  Ok(quote! {
    impl #name {
      /// Every constant, in declaration order.
      pub const VALUES: &'static [Self] = &[#(Self::#variants),*];

      /// The canonical wire-string of this constant.
      pub const fn as_str(&self) -> &'static str {
        match self {
          #(Self::#variants => #wires,)*
        }
      }

      /// Resolves a wire-string. Matching is exact and case-sensitive.
      pub fn from_value(value: &str) -> #krate::Result<Self> {
        <Self as #krate::WireEnum>::from_value(value)
      }
    }

    impl #krate::WireEnum for #name {
      const DESCRIPTOR: #krate::wire_enum::EnumDescriptor =
        #krate::wire_enum::EnumDescriptor {
          name:        #type_name,
          wire_values: &[#(#wires),*],
        };

      const VALUES: &'static [Self] = #name::VALUES;

      fn as_str(&self) -> &'static str {
        #name::as_str(self)
      }

      fn lookup_table() -> &'static ::std::collections::HashMap<&'static str, Self> {
        static TABLE: ::std::sync::LazyLock<
          ::std::collections::HashMap<&'static str, #name>,
        > = ::std::sync::LazyLock::new(|| {
          #name::VALUES
            .iter()
            .map(|value| (value.as_str(), *value))
            .collect()
        });
        &TABLE
      }
    }

    impl ::std::fmt::Display for #name {
      fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
      }
    }

    impl ::std::str::FromStr for #name {
      type Err = #krate::Error;

      fn from_str(s: &str) -> ::std::result::Result<Self, #krate::Error> {
        <Self as #krate::WireEnum>::from_value(s)
      }
    }

    impl ::std::convert::TryFrom<&str> for #name {
      type Error = #krate::Error;

      fn try_from(value: &str) -> ::std::result::Result<Self, #krate::Error> {
        <Self as #krate::WireEnum>::from_value(value)
      }
    }

    impl ::std::convert::From<#name> for ::std::string::String {
      fn from(value: #name) -> Self {
        ::std::borrow::ToOwned::to_owned(value.as_str())
      }
    }

    impl ::std::convert::AsRef<str> for #name {
      fn as_ref(&self) -> &str {
        self.as_str()
      }
    }

    impl #serde::Serialize for #name {
      fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
      where
        S: #serde::Serializer,
      {
        serializer.serialize_str(self.as_str())
      }
    }

    impl<'de> #serde::Deserialize<'de> for #name {
      fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
      where
        D: #serde::Deserializer<'de>,
      {
        let value = <::std::string::String as #serde::Deserialize>::deserialize(deserializer)?;
        <Self as #krate::WireEnum>::from_value(&value)
          .map_err(<D::Error as #serde::de::Error>::custom)
      }
    }
  })
}
