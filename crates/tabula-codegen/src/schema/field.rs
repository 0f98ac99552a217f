use super::{Column, ErrorSet};

#[derive(Debug)]
pub(crate) struct Field {
    /// Index of the field among the model's mapped fields
    pub(crate) id: usize,

    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Set when the field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,

    /// `#[created_at]` or `#[updated_at]`
    pub(crate) lifecycle: Option<(Lifecycle, syn::Attribute)>,

    /// Optional database column name
    pub(crate) column: Option<Column>,

    /// Set when the field is annotated with `#[skip]`
    pub(crate) skip: Option<syn::Attribute>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lifecycle {
    CreatedAt,
    UpdatedAt,
}

impl FieldAttr {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<FieldAttr> {
        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if attrs.key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else {
                    attrs.key = Some(attr.clone());
                }
            } else if attr.path().is_ident("created_at") || attr.path().is_ident("updated_at") {
                let lifecycle = if attr.path().is_ident("created_at") {
                    Lifecycle::CreatedAt
                } else {
                    Lifecycle::UpdatedAt
                };

                if attrs.lifecycle.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "field has more than one timestamp attribute",
                    ));
                } else {
                    attrs.lifecycle = Some((lifecycle, attr.clone()));
                }
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    attrs.column = Some(Column::from_ast(attr)?);
                }
            } else if attr.path().is_ident("skip") {
                if attrs.skip.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[skip] attribute"));
                } else {
                    attrs.skip = Some(attr.clone());
                }
            }
        }

        if let Some(skip) = &attrs.skip {
            if attrs.key.is_some() || attrs.lifecycle.is_some() || attrs.column.is_some() {
                errs.push(syn::Error::new_spanned(
                    skip,
                    "#[skip] cannot be combined with other field attributes",
                ));
            }
        }

        if let Some((_, attr)) = &attrs.lifecycle {
            if attrs.key.is_some() {
                errs.push(syn::Error::new_spanned(
                    attr,
                    "the #[key] field cannot also be a timestamp",
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(attrs)
    }

    pub(crate) fn is_skipped(&self) -> bool {
        self.skip.is_some()
    }
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, id: usize, attrs: FieldAttr) -> syn::Result<Field> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        Ok(Field {
            id,
            attrs,
            ident: ident.clone(),
            ty: field.ty.clone(),
        })
    }

    /// Field name as written in Rust, without a raw identifier prefix
    pub(crate) fn name(&self) -> String {
        let name = self.ident.to_string();
        match name.strip_prefix("r#") {
            Some(stripped) => stripped.to_string(),
            None => name,
        }
    }
}
