use super::{ErrorSet, Field, FieldAttr, Lifecycle, ModelAttr};

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Mapped fields, in declaration order
    pub(crate) fields: Vec<Field>,

    /// Fields excluded with `#[skip]`
    pub(crate) skipped: Vec<syn::Ident>,

    /// Optional table to map the model to
    pub(crate) table: Option<syn::LitStr>,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "model fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model types cannot be generic",
            ));
        }

        let mut model_attr = ModelAttr::default();
        model_attr.populate_from_ast(&ast.attrs)?;

        let mut errs = ErrorSet::new();
        let mut fields = vec![];
        let mut skipped = vec![];

        for node in &node.named {
            let attrs = match FieldAttr::from_ast(node) {
                Ok(attrs) => attrs,
                Err(err) => {
                    errs.push(err);
                    continue;
                }
            };

            if attrs.is_skipped() {
                if let Some(ident) = &node.ident {
                    skipped.push(ident.clone());
                }
                continue;
            }

            match Field::from_ast(node, fields.len(), attrs) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        let keys: Vec<_> = fields.iter().filter_map(|f| f.attrs.key.as_ref()).collect();
        if keys.len() > 1 {
            errs.push(syn::Error::new_spanned(
                keys[1],
                "more than one field is marked #[key]",
            ));
        }

        for lifecycle in [Lifecycle::CreatedAt, Lifecycle::UpdatedAt] {
            let marked: Vec<_> = fields
                .iter()
                .filter_map(|f| f.attrs.lifecycle.as_ref())
                .filter(|(l, _)| *l == lifecycle)
                .collect();

            if marked.len() > 1 {
                errs.push(syn::Error::new_spanned(
                    &marked[1].1,
                    "timestamp attribute used on more than one field",
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Model {
            ident: ast.ident.clone(),
            fields,
            skipped,
            table: model_attr.table,
        })
    }

    pub(crate) fn key_field(&self) -> Option<&Field> {
        self.fields.iter().find(|f| f.attrs.key.is_some())
    }

    pub(crate) fn lifecycle_field(&self, lifecycle: Lifecycle) -> Option<&Field> {
        self.fields.iter().find(|f| {
            f.attrs
                .lifecycle
                .as_ref()
                .is_some_and(|(l, _)| *l == lifecycle)
        })
    }
}
