use proc_macro::TokenStream;

mod entity;
mod util;

/// Derive `DocumentValue` and `Entity` for a struct with named fields.
///
/// Container attributes: `#[entity(collection = "...", name = "...")]`.
/// Field attributes: `id`, `rename = "..."`, `skip`, `flatten`, `timestamps`.
#[proc_macro_derive(Entity, attributes(entity))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    entity::derive_entity(input.into()).into()
}
