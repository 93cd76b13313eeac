use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
  Data, DataStruct, DeriveInput, Field, Fields, Ident, Type, ext::IdentExt as _,
};

use crate::{
  attributes::FieldAttributes,
  utils::{
    core_crate, last_segment, option_inner, pascal_case, type_arguments,
    type_name,
  },
};

/// Storage class of a record field. Decides which accessors it gets.
enum FieldKind<'a> {
  Text,
  Scalar(&'a Type),
  Nested(&'a Type),
  List(&'a Type),
  Map(&'a Type, &'a Type),
}

fn classify(ty: &Type) -> syn::Result<FieldKind<'_>> {
  let inner = option_inner(ty).ok_or_else(|| {
    syn::Error::new_spanned(ty, "Record fields must be declared as Option<T>")
  })?;
  let segment = last_segment(inner)
    .ok_or_else(|| syn::Error::new_spanned(inner, "unsupported field type"))?;

  let kind = match segment.ident.to_string().as_str() {
    "String" => FieldKind::Text,
    "i32" | "i64" | "bool" | "Float" | "DateTime" => FieldKind::Scalar(inner),
    "Vec" => match type_arguments(segment).as_slice() {
      [element] => FieldKind::List(*element),
      _ => {
        return Err(syn::Error::new_spanned(
          inner,
          "list fields take exactly one type argument",
        ));
      }
    },
    "BTreeMap" => match type_arguments(segment).as_slice() {
      [key, value] => FieldKind::Map(*key, *value),
      _ => {
        return Err(syn::Error::new_spanned(
          inner,
          "map fields take a key and a value type",
        ));
      }
    },
    _ => FieldKind::Nested(inner),
  };
  Ok(kind)
}

/// `FieldShape` expression for a (non-list) value type.
fn shape_tokens(krate: &TokenStream, ty: &Type) -> TokenStream {
  let shape = quote!(#krate::record::FieldShape);
  match type_name(ty).as_str() {
    "String" => quote!(#shape::String),
    "i32" => quote!(#shape::Integer),
    "i64" => quote!(#shape::Long),
    "bool" => quote!(#shape::Boolean),
    "Float" => quote!(#shape::Float),
    "DateTime" => quote!(#shape::Timestamp),
    "BTreeMap" => quote!(#shape::Map),
    other => quote!(#shape::Record(#other)),
  }
}

/// Everything the `Record` derive emits, collected field by field.
pub(crate) struct RecordComposition {
  accessors:   Vec<TokenStream>,
  renderers:   Vec<TokenStream>,
  field_infos: Vec<TokenStream>,
  checks:      Vec<TokenStream>,
  idents:      Vec<Ident>,
}

impl RecordComposition {
  pub(crate) fn from_input(input: &DeriveInput) -> syn::Result<Self> {
    let fields: Vec<&Field> = match &input.data {
      Data::Struct(DataStruct {
        fields: Fields::Named(named),
        ..
      }) => named.named.iter().collect(),
      Data::Struct(DataStruct {
        fields: Fields::Unit,
        ..
      }) => Vec::new(),
      _ => {
        return Err(syn::Error::new_spanned(
          &input.ident,
          "Record can only be derived for structs with named fields",
        ));
      }
    };

    let krate = core_crate();
    let mut composition = Self {
      accessors:   Vec::with_capacity(fields.len()),
      renderers:   Vec::with_capacity(fields.len()),
      field_infos: Vec::with_capacity(fields.len()),
      checks:      Vec::with_capacity(fields.len()),
      idents:      Vec::with_capacity(fields.len()),
    };
    for field in fields {
      composition.push_field(&krate, field)?;
    }
    Ok(composition)
  }

  fn push_field(&mut self, krate: &TokenStream, field: &Field) -> syn::Result<()> {
    let ident = field.ident.clone().ok_or_else(|| {
      syn::Error::new_spanned(field, "Record fields must be named")
    })?;
    let attrs = FieldAttributes::from_field(field)?;
    let name = ident.unraw().to_string();
    let wire = attrs.wire.unwrap_or_else(|| pascal_case(&name));

    let setter = format_ident!("set_{}", ident);
    let with = format_ident!("with_{}", ident);
    let get_doc = format!("The `{wire}` field, or `None` when it was never set.");
    let set_doc = format!("Sets `{wire}`.");
    let with_doc = format!("Sets `{wire}` and returns the record for chaining.");

    let (accessors, shape, list) = match classify(&field.ty)? {
      FieldKind::Text => (
        quote! {
          #[doc = #get_doc]
          pub fn #ident(&self) -> ::std::option::Option<&str> {
            self.#ident.as_deref()
          }

          #[doc = #set_doc]
          pub fn #setter(&mut self, value: impl ::std::convert::Into<::std::string::String>) {
            self.#ident = ::std::option::Option::Some(value.into());
          }

          #[doc = #with_doc]
          pub fn #with(mut self, value: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.#setter(value);
            self
          }
        },
        quote!(#krate::record::FieldShape::String),
        false,
      ),

      FieldKind::Scalar(ty) => {
        // Timestamps keep millisecond precision, matching the wire.
        let stored = if type_name(ty) == "DateTime" {
          quote!(#krate::timestamp::truncate_to_millis(value.into()))
        } else {
          quote!(value.into())
        };
        (
          quote! {
            #[doc = #get_doc]
            pub fn #ident(&self) -> ::std::option::Option<#ty> {
              self.#ident
            }

            #[doc = #set_doc]
            pub fn #setter(&mut self, value: impl ::std::convert::Into<#ty>) {
              self.#ident = ::std::option::Option::Some(#stored);
            }

            #[doc = #with_doc]
            pub fn #with(mut self, value: impl ::std::convert::Into<#ty>) -> Self {
              self.#setter(value);
              self
            }
          },
          shape_tokens(krate, ty),
          false,
        )
      }

      FieldKind::Nested(ty) => (
        quote! {
          #[doc = #get_doc]
          pub fn #ident(&self) -> ::std::option::Option<&#ty> {
            self.#ident.as_ref()
          }

          #[doc = #set_doc]
          pub fn #setter(&mut self, value: #ty) {
            self.#ident = ::std::option::Option::Some(value);
          }

          #[doc = #with_doc]
          pub fn #with(mut self, value: #ty) -> Self {
            self.#setter(value);
            self
          }
        },
        shape_tokens(krate, ty),
        false,
      ),

      FieldKind::List(element) => {
        let set_doc =
          format!("Replaces `{wire}` with a fresh list built from `items`.");
        let with_doc = format!(
          "Appends `items` to `{wire}`, creating the list when it is unset."
        );
        (
          quote! {
            #[doc = #get_doc]
            pub fn #ident(&self) -> ::std::option::Option<&[#element]> {
              self.#ident.as_deref()
            }

            #[doc = #set_doc]
            pub fn #setter<I>(&mut self, items: I)
            where
              I: ::std::iter::IntoIterator,
              I::Item: ::std::convert::Into<#element>,
            {
              self.#ident = ::std::option::Option::Some(
                items.into_iter().map(<I::Item as ::std::convert::Into<#element>>::into).collect(),
              );
            }

            #[doc = #with_doc]
            pub fn #with<I>(mut self, items: I) -> Self
            where
              I: ::std::iter::IntoIterator,
              I::Item: ::std::convert::Into<#element>,
            {
              self
                .#ident
                .get_or_insert_with(::std::vec::Vec::new)
                .extend(items.into_iter().map(<I::Item as ::std::convert::Into<#element>>::into));
              self
            }
          },
          shape_tokens(krate, element),
          true,
        )
      }

      FieldKind::Map(key, value) => {
        let add = format_ident!("add_{}_entry", ident);
        let insert = format_ident!("insert_{}_entry", ident);
        let clear = format_ident!("clear_{}_entries", ident);
        let set_doc = format!("Replaces `{wire}` with the given entries.");
        let with_doc =
          format!("Replaces `{wire}` and returns the record for chaining.");
        let add_doc = format!(
          "Adds one entry to `{wire}`, failing with \
           `Error::DuplicateMapKey` when the key is already present. \
           The record is consumed either way; use `{insert}` to keep it."
        );
        let insert_doc = format!(
          "Adds one entry to `{wire}` in place. On a duplicate key the \
           record is left unchanged."
        );
        let clear_doc = format!("Removes `{wire}` entirely.");
        (
          quote! {
            #[doc = #get_doc]
            pub fn #ident(&self) -> ::std::option::Option<&::std::collections::BTreeMap<#key, #value>> {
              self.#ident.as_ref()
            }

            #[doc = #set_doc]
            pub fn #setter<I, K, V>(&mut self, entries: I)
            where
              I: ::std::iter::IntoIterator<Item = (K, V)>,
              K: ::std::convert::Into<#key>,
              V: ::std::convert::Into<#value>,
            {
              self.#ident = ::std::option::Option::Some(
                entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
              );
            }

            #[doc = #with_doc]
            pub fn #with<I, K, V>(mut self, entries: I) -> Self
            where
              I: ::std::iter::IntoIterator<Item = (K, V)>,
              K: ::std::convert::Into<#key>,
              V: ::std::convert::Into<#value>,
            {
              self.#setter(entries);
              self
            }

            #[doc = #insert_doc]
            pub fn #insert(
              &mut self,
              key: impl ::std::convert::Into<#key>,
              value: impl ::std::convert::Into<#value>,
            ) -> #krate::Result<()> {
              let key = key.into();
              let taken = self
                .#ident
                .as_ref()
                .is_some_and(|entries| entries.contains_key(&key));
              if taken {
                return ::std::result::Result::Err(#krate::Error::DuplicateMapKey {
                  field: #wire,
                  key:   ::std::string::ToString::to_string(&key),
                });
              }
              self
                .#ident
                .get_or_insert_with(::std::collections::BTreeMap::new)
                .insert(key, value.into());
              ::std::result::Result::Ok(())
            }

            #[doc = #add_doc]
            pub fn #add(
              mut self,
              key: impl ::std::convert::Into<#key>,
              value: impl ::std::convert::Into<#value>,
            ) -> #krate::Result<Self> {
              self.#insert(key, value)?;
              ::std::result::Result::Ok(self)
            }

            #[doc = #clear_doc]
            pub fn #clear(mut self) -> Self {
              self.#ident = ::std::option::Option::None;
              self
            }
          },
          quote!(#krate::record::FieldShape::Map),
          false,
        )
      }
    };

    let enumeration = match &attrs.enumeration {
      Some(path) => quote! {
        ::std::option::Option::Some(&<#path as #krate::WireEnum>::DESCRIPTOR)
      },
      None => quote!(::std::option::Option::None),
    };

    self.accessors.push(accessors);
    self.checks.push(quote! {
      if let ::std::option::Option::Some(rest) =
        #krate::FloatCheck::non_finite(&self.#ident)
      {
        return ::std::option::Option::Some(::std::format!(".{}{}", #wire, rest));
      }
    });
    self
      .renderers
      .push(quote!(out.field(#wire, self.#ident.as_ref());));
    self.field_infos.push(quote! {
      #krate::record::FieldInfo {
        name:        #name,
        wire_name:   #wire,
        shape:       #shape,
        list:        #list,
        enumeration: #enumeration,
      }
    });
    self.idents.push(ident);
    Ok(())
  }

  pub(crate) fn into_token_stream(self, input: &DeriveInput) -> TokenStream {
    let krate = core_crate();
    let name = &input.ident;
    let type_name = name.to_string();
    let (impl_generics, ty_generics, where_clause) =
      input.generics.split_for_impl();
    let Self {
      accessors,
      renderers,
      field_infos,
      checks,
      idents,
    } = self;

    quote! {
      impl #impl_generics #name #ty_generics #where_clause {
        #(#accessors)*
      }

      impl #impl_generics ::std::fmt::Display for #name #ty_generics #where_clause {
        fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
          let mut out = #krate::render::RecordFormatter::new(f);
          #(#renderers)*
          out.finish()
        }
      }

      impl #impl_generics #krate::render::WireDisplay for #name #ty_generics #where_clause {
        fn fmt_wire(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
          ::std::fmt::Display::fmt(self, f)
        }
      }

      impl #impl_generics #krate::FloatCheck for #name #ty_generics #where_clause {
        fn non_finite(&self) -> ::std::option::Option<::std::string::String> {
          #(#checks)*
          ::std::option::Option::None
        }
      }

      impl #impl_generics #krate::Record for #name #ty_generics #where_clause {
        const DESCRIPTOR: #krate::record::RecordDescriptor =
          #krate::record::RecordDescriptor {
            name:   #type_name,
            fields: &[#(#field_infos),*],
          };

        fn is_unset(&self) -> bool {
          true #(&& self.#idents.is_none())*
        }
      }
    }
  }
}
