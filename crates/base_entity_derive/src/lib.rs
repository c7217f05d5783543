use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Expr, ExprLit, Fields, ItemStruct, Lit, LitStr, Meta, Token, parse_macro_input,
    punctuated::Punctuated,
};

/// Prepends a generated integer `id` primary key to a sea-orm `Model` and
/// implements `HasIdColumn` and `EntityLabel` from `crate::db::dao::base_traits`.
///
/// ```ignore
/// #[base_entity(label = "Lesson")]
/// #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
/// #[sea_orm(table_name = "lessons")]
/// pub struct Model {
///     pub title: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn base_entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr with Punctuated<Meta, Token![,]>::parse_terminated);
    let label = match parse_label(args) {
        Ok(label) => label,
        Err(err) => return err.to_compile_error().into(),
    };

    let mut input = parse_macro_input!(item as ItemStruct);
    let fields = match &mut input.fields {
        Fields::Named(fields) => fields,
        _ => {
            return syn::Error::new_spanned(
                input,
                "base_entity requires a struct with named fields",
            )
            .to_compile_error()
            .into();
        }
    };

    let has_id = fields
        .named
        .iter()
        .any(|field| field.ident.as_ref().is_some_and(|ident| ident == "id"));

    if !has_id {
        let id_field: syn::Field = syn::parse_quote! {
            #[sea_orm(primary_key)]
            pub id: i32
        };
        fields.named.insert(0, id_field);
    }

    let expanded = quote! {
        #input

        impl crate::db::dao::base_traits::HasIdColumn for Entity {
            fn id_column() -> Column {
                Column::Id
            }
        }

        impl crate::db::dao::base_traits::EntityLabel for Entity {
            const LABEL: &'static str = #label;
        }
    };

    expanded.into()
}

fn parse_label(args: Punctuated<Meta, Token![,]>) -> Result<LitStr, syn::Error> {
    let mut label = None;

    for meta in args {
        let Meta::NameValue(name_value) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "expected name-value pair, e.g. label = \"Lesson\"",
            ));
        };

        if !name_value.path.is_ident("label") {
            return Err(syn::Error::new_spanned(
                name_value.path,
                "unknown base_entity attribute key, expected `label`",
            ));
        }

        let value = match name_value.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(lit_str),
                ..
            }) => lit_str,
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "expected string literal for attribute value",
                ));
            }
        };

        if value.value().trim().is_empty() {
            return Err(syn::Error::new(value.span(), "label must not be empty"));
        }
        label = Some(value);
    }

    label.ok_or_else(|| {
        syn::Error::new(
            proc_macro2::Span::call_site(),
            "base_entity requires a label, e.g. #[base_entity(label = \"Lesson\")]",
        )
    })
}
