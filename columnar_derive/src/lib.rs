//! proc-macro extensions for [`columnar_record`].
//!
//! This crate should **NEVER** be used alone.
//! All macros **MUST** be used via the re-exports in the [`columnar_record`] crate.
//!
//! [`columnar_record`]: <https://github.com/loro-dev/columnar/>
extern crate darling;
extern crate quote;

extern crate syn;

extern crate proc_macro;
extern crate proc_macro2;

use darling::{export::NestedMeta, Error};
use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Item};

mod args;
use args::{get_derive_args, get_field_args};
mod derive;
use derive::generate_from_record_batch;

///
/// Bind the fields of a struct to the columns of an Arrow record batch.
///
/// Each field can be annotated with `#[columnar(...)]` to choose the column it is filled from.
/// `columnar` is *not* supported on enum and tuple struct.
///
/// # Example:
///
/// ```rust, ignore
/// use columnar_record::{columnar, from_record_batch};
///
/// #[columnar]
/// #[derive(Default)]
/// struct Data {
///     // filled from the column named "f1-i32"
///     #[columnar(column = "f1-i32")]
///     id: i32,
///     // never bound, always `Default::default()`
///     note: String,
/// }
///
/// // every field without an attribute is bound to the column of the same name
/// #[columnar(bind_all)]
/// #[derive(Default)]
/// struct Event {
///     name: String,
///     #[columnar(column = "ts")]
///     at: chrono::DateTime<chrono_tz::Tz>,
///     #[columnar(skip)]
///     cached: Option<String>,
/// }
///
/// let rows: Vec<Data> = from_record_batch(&batch);
/// ```
#[proc_macro_attribute]
pub fn columnar(attr: TokenStream, input: TokenStream) -> TokenStream {
    let attr_args = match NestedMeta::parse_meta_list(attr.into()) {
        Ok(v) => v,
        Err(e) => {
            return TokenStream::from(Error::from(e).write_errors());
        }
    };
    let input = match add_consume_columnar_attribute(&input) {
        Ok(v) => v,
        Err(e) => return TokenStream::from(e.to_compile_error()),
    };
    let st = parse_macro_input!(input as DeriveInput);
    match expand_columnar(attr_args, st) {
        Ok(v) => v,
        Err(e) => e.to_compile_error().into(),
    }
}

/// Parse the container and field arguments, then append a `FromRecordBatch`
/// implementation to the untouched struct.
fn expand_columnar(args: Vec<NestedMeta>, st: DeriveInput) -> syn::Result<TokenStream> {
    let derive_args = get_derive_args(&args)?;
    let field_args = get_field_args(&st)?;
    let impl_tokens = generate_from_record_batch(&st, &derive_args, &field_args)?;
    Ok(quote!(#st #impl_tokens).into())
}

/// Add [`__private_consume_columnar_attributes`] derive attribute to the input struct.
///
/// The field level `#[columnar(...)]` attributes are not consumed by the attribute macro itself,
/// so a private derive macro that declares `columnar` as a helper attribute is attached.
///
/// ```rust, ignore
/// #[columnar]
/// #[derive(__private_consume_columnar_attributes)]
/// struct Data{...}
/// ```
///
fn add_consume_columnar_attribute(input: &TokenStream) -> syn::Result<TokenStream> {
    let consume_columnar_attribute = syn::parse_quote!(
        #[derive(::columnar_record::__private_consume_columnar_attributes)]
    );
    let item: Item = syn::parse(input.clone())?;
    match item {
        Item::Struct(st) => {
            let mut st = st;
            st.attrs.push(consume_columnar_attribute);
            Ok(quote!(#st).into())
        }
        _ => Err(syn::Error::new(
            Span::call_site(),
            "columnar only support struct",
        )),
    }
}

#[doc(hidden)]
/// Private function. Not part of the public API
///
/// More details about the use-cases in the GitHub discussion: <https://github.com/jonasbb/serde_with/discussions/260>.
#[proc_macro_derive(__private_consume_columnar_attributes, attributes(columnar))]
pub fn __private_consume_columnar_attributes(_: TokenStream) -> TokenStream {
    TokenStream::new()
}
