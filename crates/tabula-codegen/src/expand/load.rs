use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_load_body(&self) -> TokenStream {
        let tabula = &self.tabula;

        let mapped = self.model.fields.iter().map(|field| {
            let index = field.id;
            let ident = &field.ident;

            quote! {
                #ident: #tabula::load_field(&mut row, binding, #index)?,
            }
        });

        let skipped = self.model.skipped.iter().map(|ident| {
            quote! {
                #ident: Default::default(),
            }
        });

        quote! {
            let binding = <Self as #tabula::Model>::binding()?;

            Ok(Self {
                #( #mapped )*
                #( #skipped )*
            })
        }
    }

    /// Decodes the whole row before assigning anything, so a failed decode
    /// leaves `self` untouched. Skipped fields keep their current value.
    pub(super) fn expand_reload_body(&self) -> TokenStream {
        let tabula = &self.tabula;

        let assignments = self.model.fields.iter().map(|field| {
            let ident = &field.ident;

            quote! {
                self.#ident = loaded.#ident;
            }
        });

        quote! {
            let loaded = <Self as #tabula::Model>::load(row)?;
            #( #assignments )*
            Ok(())
        }
    }
}
