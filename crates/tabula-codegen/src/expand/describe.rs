use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_describe_body(&self) -> TokenStream {
        let tabula = &self.tabula;

        let descriptors = self.model.fields.iter().map(|field| {
            let index = field.id;
            let ident = &field.ident;

            quote! {
                #tabula::describe_field(binding, #index, &self.#ident)
            }
        });

        quote! {
            let binding = <Self as #tabula::Model>::binding()?;

            Ok(vec![ #( #descriptors ),* ])
        }
    }
}
