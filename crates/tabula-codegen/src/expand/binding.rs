use super::Expand;
use crate::schema::Lifecycle;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Builds the `TableBinding` for the model from its fields and
    /// attributes. Column names are derived at runtime unless overridden.
    pub(super) fn expand_binding_body(&self) -> TokenStream {
        let tabula = &self.tabula;
        let model_name = self.model.ident.to_string();

        let table = self.model.table.as_ref().map(|table| {
            quote!(builder.table(#table);)
        });

        let fields = self.model.fields.iter().map(|field| {
            let name = field.name();
            let ty = &field.ty;
            let column = match &field.attrs.column {
                Some(column) => {
                    let lit = &column.name;
                    quote!(Some(#lit))
                }
                None => quote!(None),
            };

            quote! {
                builder.field(
                    #name,
                    #column,
                    <#ty as #tabula::Primitive>::TYPE,
                );
            }
        });

        let identity = self.model.key_field().map(|field| {
            let name = field.name();
            quote!(builder.identity(#name);)
        });

        let created_at = self
            .model
            .lifecycle_field(Lifecycle::CreatedAt)
            .map(|field| {
                let name = field.name();
                quote!(builder.created_at(#name);)
            });

        let updated_at = self
            .model
            .lifecycle_field(Lifecycle::UpdatedAt)
            .map(|field| {
                let name = field.name();
                quote!(builder.updated_at(#name);)
            });

        quote! {
            let mut builder = #tabula::TableBinding::builder(#model_name);
            #table
            #( #fields )*
            #identity
            #created_at
            #updated_at
            builder.build()
        }
    }
}
