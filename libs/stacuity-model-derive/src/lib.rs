use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, LitStr, parse_macro_input};

/// Derive macro for model records (wire or value side).
///
/// Generates `Reflect`, `RecordReflect` and `Shaped` impls for the annotated
/// struct: a static field table (match name, index, shape, direction) and
/// index-based field accessors used by the conversion engine.
///
/// The struct must implement `Default` (used when an optional destination or
/// a new sequence element has to be allocated), and every non-skipped field
/// type must implement `Shaped`.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Default, Record)]
/// pub struct VSliceResourceModel {
///     pub name: Value<String>,
///
///     #[record(only = "to_wire")]
///     pub event_map: Value<String>,
///
///     #[record(rename = "dns_servers")]
///     pub resolvers: Vec<Value<String>>,
///
///     #[record(skip)]
///     pub cached: SomethingElse,
/// }
/// ```
///
/// Field attributes:
/// - `rename = "..."`: match against the other side under this name.
/// - `skip`: leave the field out of every conversion.
/// - `only = "from_wire" | "to_wire"`: take part in one direction only.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn derive_impl(input: &DeriveInput) -> Result<TokenStream2, syn::Error> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Record does not support generic structs",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Record only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Record only supports structs",
            ));
        }
    };

    let mut schema_tokens: Vec<TokenStream2> = Vec::new();
    let mut field_arms: Vec<TokenStream2> = Vec::new();
    let mut field_mut_arms: Vec<TokenStream2> = Vec::new();
    let mut index = 0usize;

    for field in fields {
        let field_name = field.ident.as_ref().ok_or_else(|| {
            syn::Error::new_spanned(field, "expected named field")
        })?;
        let attrs = FieldAttrs::parse(field)?;
        if attrs.skip {
            continue;
        }

        let match_name = attrs.rename.unwrap_or_else(|| field_name.to_string());
        let field_ty = &field.ty;

        let only_expr = match attrs.only.as_ref().map(LitStr::value).as_deref() {
            None => quote! { None },
            Some("from_wire") => quote! { Some(stacuity_model::schema::Direction::FromWire) },
            Some("to_wire") => quote! { Some(stacuity_model::schema::Direction::ToWire) },
            Some(other) => {
                return Err(syn::Error::new_spanned(
                    attrs.only,
                    format!("unknown direction '{other}' (expected 'from_wire' or 'to_wire')"),
                ));
            }
        };

        schema_tokens.push(quote! {
            stacuity_model::schema::FieldSchema {
                name: #match_name,
                index: #index,
                shape: <#field_ty as stacuity_model::reflect::Shaped>::shape,
                only: #only_expr,
            }
        });
        field_arms.push(quote! {
            #index => Some(&self.#field_name as &dyn stacuity_model::reflect::Reflect),
        });
        field_mut_arms.push(quote! {
            #index => Some(&mut self.#field_name as &mut dyn stacuity_model::reflect::Reflect),
        });

        index += 1;
    }

    let name_str = name.to_string();

    let expanded = quote! {
        impl stacuity_model::reflect::Reflect for #name {
            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
                self
            }

            fn reflect_ref(&self) -> stacuity_model::reflect::ReflectRef<'_> {
                stacuity_model::reflect::ReflectRef::Record(self)
            }

            fn reflect_mut(&mut self) -> stacuity_model::reflect::ReflectMut<'_> {
                stacuity_model::reflect::ReflectMut::Record(self)
            }
        }

        impl stacuity_model::reflect::RecordReflect for #name {
            fn field(&self, index: usize) -> Option<&dyn stacuity_model::reflect::Reflect> {
                match index {
                    #(#field_arms)*
                    _ => None,
                }
            }

            fn field_mut(
                &mut self,
                index: usize,
            ) -> Option<&mut dyn stacuity_model::reflect::Reflect> {
                match index {
                    #(#field_mut_arms)*
                    _ => None,
                }
            }
        }

        impl stacuity_model::reflect::Shaped for #name {
            fn shape() -> stacuity_model::schema::Shape {
                const FIELDS: &[stacuity_model::schema::FieldSchema] = &[
                    #(#schema_tokens),*
                ];
                stacuity_model::schema::Shape::Record(stacuity_model::schema::RecordType {
                    name: #name_str,
                    id: ::core::any::TypeId::of::<#name>,
                    fields: FIELDS,
                })
            }
        }
    };

    Ok(expanded)
}

/// Parsed `#[record(...)]` attributes of one field.
#[derive(Default)]
struct FieldAttrs {
    rename: Option<String>,
    skip: bool,
    only: Option<LitStr>,
}

impl FieldAttrs {
    fn parse(field: &Field) -> Result<Self, syn::Error> {
        let mut attrs = FieldAttrs::default();
        for attr in &field.attrs {
            if !attr.path().is_ident("record") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let value: LitStr = meta.value()?.parse()?;
                    attrs.rename = Some(value.value());
                } else if meta.path.is_ident("skip") {
                    attrs.skip = true;
                } else if meta.path.is_ident("only") {
                    attrs.only = Some(meta.value()?.parse()?);
                } else {
                    return Err(meta.error("unknown record attribute (expected rename, skip or only)"));
                }
                Ok(())
            })?;
        }
        Ok(attrs)
    }
}
