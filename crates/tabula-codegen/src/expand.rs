mod binding;
mod describe;
mod load;
mod model;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for tabula types
    tabula: TokenStream,
}

pub(super) fn model(model: &Model) -> TokenStream {
    let tabula = quote!(_tabula::codegen_support);

    wrap_in_const(Expand { model, tabula }.expand_model_impl())
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use tabula as _tabula;
            #code
        };
    }
}
