#[cfg(test)]
mod tests;

use crate::util::{document_value_bounds, where_clause_with_bounds};
use darling::{
    Error as DarlingError, FromDeriveInput, FromField,
    ast::Data,
    util::Ignored,
};
use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use std::collections::HashSet;
use syn::{DeriveInput, Generics, Ident, Type, ext::IdentExt, spanned::Spanned};

// reserved for the identity field's value
const ID_KEY: &str = "_id";

///
/// EntityInput
///

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(entity), supports(struct_named))]
struct EntityInput {
    ident: Ident,
    generics: Generics,
    data: Data<Ignored, EntityField>,

    #[darling(default)]
    collection: Option<String>,

    #[darling(default)]
    name: Option<String>,
}

///
/// EntityField
///

#[derive(Debug, FromField)]
#[darling(attributes(entity))]
struct EntityField {
    ident: Option<Ident>,
    ty: Type,

    #[darling(default)]
    id: bool,

    #[darling(default)]
    rename: Option<String>,

    #[darling(default)]
    skip: bool,

    #[darling(default)]
    flatten: bool,

    #[darling(default)]
    timestamps: bool,
}

impl EntityField {
    const fn role(&self) -> Role {
        if self.id {
            Role::Identity
        } else if self.flatten || self.timestamps {
            Role::Flatten
        } else {
            Role::Plain
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Role {
    Plain,
    Identity,
    Flatten,
}

///
/// MappedField
/// A field that takes part in mapping, in model order.
///

struct MappedField<'a> {
    ident: &'a Ident,
    ty: &'a Type,
    name: String,
    role: Role,
    timestamps: bool,
}

// derive_entity
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let entity = match EntityInput::from_derive_input(&input) {
        Ok(entity) => entity,
        Err(err) => return err.write_errors(),
    };

    expand(&entity).unwrap_or_else(DarlingError::write_errors)
}

fn expand(entity: &EntityInput) -> Result<TokenStream, DarlingError> {
    let Data::Struct(fields) = &entity.data else {
        return Err(DarlingError::unsupported_shape("enum").with_span(&entity.ident));
    };
    let mapped = mapped_fields(&fields.fields)?;

    let ident = &entity.ident;
    let ident_str = ident.unraw().to_string();
    let name = entity.name.clone().unwrap_or_else(|| ident_str.clone());
    let collection = match &entity.collection {
        Some(collection) => quote!(::core::option::Option::Some(#collection)),
        None => quote!(::core::option::Option::None),
    };

    let (impl_generics, ty_generics, where_clause) = entity.generics.split_for_impl();
    let mut bounds = document_value_bounds(&entity.generics);
    if !entity.generics.params.is_empty() {
        bounds.push(quote!(#ident #ty_generics: ::core::default::Default));
    }
    // a flattened field must be a structure, or its value would have no keys to merge
    bounds.extend(
        mapped
            .iter()
            .filter(|field| field.role == Role::Flatten)
            .map(|field| {
                let ty = field.ty;
                quote_spanned!(ty.span()=> #ty: ::docmap::traits::Entity)
            }),
    );
    let where_clause = where_clause_with_bounds(where_clause, &bounds);

    let field_models = mapped.iter().map(field_model);

    let getters = mapped.iter().enumerate().map(|(index, field)| {
        let field_ident = field.ident;
        quote! {
            #index => ::core::option::Option::Some(
                ::docmap::traits::DocumentValue::to_value(&self.#field_ident)
            ),
        }
    });

    let setters = mapped.iter().enumerate().map(|(index, field)| {
        let field_ident = field.ident;
        quote! {
            #index => {
                self.#field_ident = ::docmap::traits::DocumentValue::from_value(value)?;
                ::core::result::Result::Ok(())
            }
        }
    });

    let timestamps_mut = mapped.iter().find(|field| field.timestamps).map(|field| {
        let field_ident = field.ident;
        quote! {
            fn timestamps_mut(&mut self) -> ::core::option::Option<&mut ::docmap::db::Timestamps> {
                ::core::option::Option::Some(&mut self.#field_ident)
            }
        }
    });

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::docmap::traits::DocumentValue for #ident #ty_generics #where_clause {
            const KIND: &'static ::docmap::model::FieldKind = &::docmap::model::FieldKind::Structure(
                <Self as ::docmap::traits::Entity>::model
            );

            fn to_value(&self) -> ::docmap::value::Value {
                ::docmap::value::Value::Document(::docmap::mapper::encode(self))
            }

            fn from_value(
                value: ::docmap::value::Value,
            ) -> ::core::result::Result<Self, ::docmap::error::MapError> {
                match value {
                    ::docmap::value::Value::Document(document) => ::docmap::mapper::decode(&document),
                    other => ::core::result::Result::Err(::docmap::error::MapError::type_mismatch(
                        <Self as ::docmap::traits::DocumentValue>::KIND,
                        &other,
                    )),
                }
            }
        }

        #[automatically_derived]
        impl #impl_generics ::docmap::traits::Entity for #ident #ty_generics #where_clause {
            const MODEL: &'static ::docmap::model::EntityModel = &::docmap::model::EntityModel {
                path: ::core::concat!(::core::module_path!(), "::", #ident_str),
                name: #name,
                collection: #collection,
                fields: &[#(#field_models),*],
            };

            fn construct() -> ::core::result::Result<Self, ::docmap::error::MapError> {
                ::core::result::Result::Ok(<Self as ::core::default::Default>::default())
            }

            fn field_value(&self, index: usize) -> ::core::option::Option<::docmap::value::Value> {
                match index {
                    #(#getters)*
                    _ => ::core::option::Option::None,
                }
            }

            fn set_field_value(
                &mut self,
                index: usize,
                value: ::docmap::value::Value,
            ) -> ::core::result::Result<(), ::docmap::error::MapError> {
                match index {
                    #(#setters)*
                    _ => {
                        let _ = value;
                        ::core::result::Result::Err(::docmap::error::MapError::unknown_field(
                            <Self as ::docmap::traits::Entity>::MODEL.path,
                            index,
                        ))
                    }
                }
            }

            #timestamps_mut
        }
    })
}

fn field_model(field: &MappedField<'_>) -> TokenStream {
    let name = &field.name;
    let ty = field.ty;
    let role = match field.role {
        Role::Plain => quote!(::docmap::model::FieldRole::Plain),
        Role::Identity => quote!(::docmap::model::FieldRole::Identity),
        Role::Flatten => quote!(::docmap::model::FieldRole::Flatten),
    };

    quote! {
        ::docmap::model::FieldModel {
            name: #name,
            kind: <#ty as ::docmap::traits::DocumentValue>::KIND,
            role: #role,
        }
    }
}

// Resolve attributes into mapped fields, reporting every misuse at once.
fn mapped_fields(fields: &[EntityField]) -> Result<Vec<MappedField<'_>>, DarlingError> {
    let mut errors = DarlingError::accumulator();
    let mut mapped = Vec::with_capacity(fields.len());
    let mut stored_names = HashSet::new();
    let mut has_id = false;
    let mut has_timestamps = false;

    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let fail = |msg: &str| DarlingError::custom(msg).with_span(ident);

        if field.skip {
            if field.id || field.flatten || field.timestamps || field.rename.is_some() {
                errors.push(fail("`skip` cannot be combined with other field attributes"));
            }
            continue;
        }
        if field.id && (field.flatten || field.timestamps) {
            errors.push(fail("`id` cannot be combined with `flatten` or `timestamps`"));
            continue;
        }
        if field.id && field.rename.is_some() {
            errors.push(fail("`id` is always stored under `_id` and cannot be renamed"));
            continue;
        }
        if field.rename.is_some() && (field.flatten || field.timestamps) {
            errors.push(fail("a flattened field has no key of its own to rename"));
            continue;
        }
        if field.id {
            if has_id {
                errors.push(fail("only one field can be marked `id`"));
                continue;
            }
            has_id = true;
        }
        if field.timestamps {
            if has_timestamps {
                errors.push(fail("only one field can be marked `timestamps`"));
                continue;
            }
            has_timestamps = true;
        }

        let name = field
            .rename
            .clone()
            .unwrap_or_else(|| ident.unraw().to_string());
        let role = field.role();

        if role == Role::Plain {
            if name == ID_KEY {
                errors.push(fail("`_id` is reserved for the field marked `id`"));
                continue;
            }
            if !stored_names.insert(name.clone()) {
                errors.push(fail(&format!("duplicate stored name `{name}`")));
                continue;
            }
        }

        mapped.push(MappedField {
            ident,
            ty: &field.ty,
            name,
            role,
            timestamps: field.timestamps,
        });
    }

    errors.finish_with(mapped)
}
