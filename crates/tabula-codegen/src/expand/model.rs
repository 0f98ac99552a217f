use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_impl(&self) -> TokenStream {
        let tabula = &self.tabula;
        let model_ident = &self.model.ident;
        let binding_body = self.expand_binding_body();
        let describe_body = self.expand_describe_body();
        let load_body = self.expand_load_body();
        let reload_body = self.expand_reload_body();

        quote! {
            impl #tabula::Model for #model_ident {
                fn binding() -> #tabula::Result<&'static #tabula::TableBinding> {
                    static BINDING: std::sync::OnceLock<#tabula::Result<#tabula::TableBinding>> =
                        std::sync::OnceLock::new();

                    BINDING
                        .get_or_init(|| { #binding_body })
                        .as_ref()
                        .map_err(Clone::clone)
                }

                fn describe(&self) -> #tabula::Result<Vec<#tabula::FieldDescriptor>> {
                    #describe_body
                }

                fn load(mut row: #tabula::Row) -> #tabula::Result<Self> {
                    #load_body
                }

                fn reload(&mut self, row: #tabula::Row) -> #tabula::Result<()> {
                    #reload_body
                }
            }
        }
    }
}
