use darling::ast::NestedMeta;
use darling::{FromField, FromMeta};
use syn::{DeriveInput, Type};

#[derive(Debug, Clone, Copy, Default, FromMeta)]
pub struct DeriveArgs {
    /// Bind fields without a `column` attribute to the column named after the field.
    #[darling(default)]
    pub(crate) bind_all: bool,
}

#[derive(FromField, Debug, Clone)]
#[darling(attributes(columnar))]
pub struct FieldArgs {
    /// the name of field
    pub ident: Option<syn::Ident>,
    /// the type of field
    pub ty: Type,
    // custom attributes
    /// The name of the source column.
    pub column: Option<String>,
    /// If skip, this field is never bound.
    #[darling(default)]
    pub skip: bool,
}

impl FieldArgs {
    /// The column this field is read from, if it is bound at all.
    pub fn bound_column(&self, derive_args: &DeriveArgs) -> Option<String> {
        if self.skip {
            return None;
        }
        match (&self.column, &self.ident) {
            (Some(column), _) => Some(column.clone()),
            (None, Some(ident)) if derive_args.bind_all => Some(unraw(ident)),
            _ => None,
        }
    }
}

pub fn unraw(ident: &syn::Ident) -> String {
    ident.to_string().trim_start_matches("r#").to_owned()
}

pub fn get_derive_args(args: &[NestedMeta]) -> syn::Result<DeriveArgs> {
    match DeriveArgs::from_list(args) {
        Ok(v) => Ok(v),
        Err(e) => Err(e.into()),
    }
}

pub fn get_field_args(st: &DeriveInput) -> syn::Result<Vec<FieldArgs>> {
    let fields = match &st.data {
        syn::Data::Struct(syn::DataStruct {
            fields: syn::Fields::Named(syn::FieldsNamed { named, .. }),
            ..
        }) => named,
        _ => {
            return Err(syn::Error::new_spanned(
                st,
                "columnar only support struct with named fields",
            ))
        }
    };
    let mut fields_args = Vec::with_capacity(fields.len());
    for field in fields.iter() {
        let field_args = FieldArgs::from_field(field)?;
        if field_args.skip && field_args.column.is_some() {
            return Err(syn::Error::new_spanned(
                field,
                "`skip` and `column` can not be used at the same time",
            ));
        }
        fields_args.push(field_args);
    }
    Ok(fields_args)
}
