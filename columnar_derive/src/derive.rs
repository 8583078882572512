use syn::DeriveInput;

use crate::args::{unraw, DeriveArgs, FieldArgs};

/// Generate `FromRecordBatch` for the struct, one `bind` per bound field in
/// declaration order.
pub fn generate_from_record_batch(
    input: &DeriveInput,
    derive_args: &DeriveArgs,
    field_args: &[FieldArgs],
) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name_ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut binds = Vec::with_capacity(field_args.len());
    for args in field_args {
        let Some(column) = args.bound_column(derive_args) else {
            continue;
        };
        let field_ident = args
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(&args.ty, "expected named field"))?;
        let field_name = unraw(field_ident);
        let field_type = &args.ty;
        binds.push(quote::quote!(
            .bind::<#field_type>(#field_name, #column, |row: &mut Self, value: #field_type| {
                row.#field_ident = value;
            })
        ));
    }

    let ret = quote::quote!(
        #[automatically_derived]
        impl #impl_generics ::columnar_record::FromRecordBatch for #struct_name_ident #ty_generics #where_clause {
            fn shape() -> ::columnar_record::Shape<Self> {
                ::columnar_record::Shape::builder()
                    #(#binds)*
                    .build()
            }
        }
    );
    Ok(ret)
}
