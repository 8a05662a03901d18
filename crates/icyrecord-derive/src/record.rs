use darling::{FromDeriveInput, FromField, ast::Data, util::Ignored};
use proc_macro2::TokenStream;
use quote::quote;
use std::collections::HashSet;
use syn::{DeriveInput, Generics, Ident, Path, Type};

const RESERVED_PREFIX: &str = "__";

///
/// RecordInput
///

#[derive(FromDeriveInput)]
#[darling(attributes(record), supports(struct_named))]
struct RecordInput {
    ident: Ident,
    generics: Generics,
    data: Data<Ignored, RecordField>,

    #[darling(default)]
    name: Option<String>,
}

///
/// RecordField
///

#[derive(FromField)]
#[darling(attributes(record))]
struct RecordField {
    ident: Option<Ident>,
    ty: Type,

    #[darling(default)]
    label: Option<String>,

    #[darling(default)]
    precondition: Option<Path>,

    #[darling(default)]
    rename: Option<String>,
}

impl RecordField {
    fn field_name(&self, ident: &Ident) -> String {
        self.rename.clone().unwrap_or_else(|| ident.to_string())
    }

    // decl_expr
    // FieldDecl for the builder; the descriptor is only emitted when a
    // label or precondition was given
    fn decl_expr(&self, field_name: &str) -> TokenStream {
        let ty = &self.ty;
        let decl = quote! {
            ::icyrecord::model::FieldDecl::new(
                #field_name,
                <#ty as ::icyrecord::traits::FieldValue>::kind(),
            )
        };

        if self.label.is_none() && self.precondition.is_none() {
            return decl;
        }

        let label = self.label.clone().unwrap_or_else(|| field_name.to_string());
        let precondition = self.precondition.as_ref().map(|path| {
            quote!(.with_typed_precondition::<#ty, _>(#path))
        });

        quote! {
            #decl.with_descriptor(
                ::icyrecord::model::FieldDescriptor::new(#label) #precondition
            )
        }
    }
}

// derive_record
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };
    let input = match RecordInput::from_derive_input(&input) {
        Ok(input) => input,
        Err(err) => return err.write_errors(),
    };

    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.write_errors(),
    }
}

fn expand(input: &RecordInput) -> Result<TokenStream, darling::Error> {
    if !input.generics.params.is_empty() {
        return Err(
            darling::Error::custom("Record cannot be derived for generic structs")
                .with_span(&input.generics),
        );
    }

    let ident = &input.ident;
    let record_name = input.name.clone().unwrap_or_else(|| ident.to_string());
    if record_name.is_empty() {
        return Err(darling::Error::custom("record name must not be empty").with_span(ident));
    }
    let fields = input
        .data
        .as_ref()
        .take_struct()
        .ok_or_else(|| darling::Error::unsupported_shape("enum"))?
        .fields;

    let mut errors = darling::Error::accumulator();
    let mut decls = Vec::new();
    let mut into_args = Vec::new();
    let mut from_record = Vec::new();
    let mut seen = HashSet::new();

    for field in fields {
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let field_name = field.field_name(field_ident);
        let ty = &field.ty;

        if field_name.is_empty() {
            errors.push(
                darling::Error::custom("record field name must not be empty").with_span(field_ident),
            );
            continue;
        }
        if field_name.starts_with(RESERVED_PREFIX) {
            errors.push(
                darling::Error::custom(format!(
                    "field name '{field_name}' is reserved: names starting with '__' cannot be record fields"
                ))
                .with_span(field_ident),
            );
            continue;
        }
        if !seen.insert(field_name.clone()) {
            errors.push(
                darling::Error::custom(format!(
                    "record field '{field_name}' is declared more than once"
                ))
                .with_span(field_ident),
            );
            continue;
        }

        decls.push(field.decl_expr(&field_name));
        into_args.push(quote! {
            .with(#field_name, ::icyrecord::traits::FieldValue::into_value(self.#field_ident))
        });
        from_record.push(quote! {
            #field_ident: record.get_as::<#ty>(#field_name)?,
        });
    }
    errors.finish()?;

    Ok(quote! {
        impl ::icyrecord::traits::RecordKind for #ident {
            fn record_type() -> ::icyrecord::model::RecordType {
                static RECORD_TYPE: ::std::sync::OnceLock<::icyrecord::model::RecordType> =
                    ::std::sync::OnceLock::new();

                RECORD_TYPE
                    .get_or_init(|| {
                        ::icyrecord::model::RecordType::builder(#record_name)
                            #( .decl(#decls) )*
                            .build()
                            .unwrap_or_else(|err| {
                                panic!("derived record type '{}' is invalid: {err}", #record_name)
                            })
                    })
                    .clone()
            }

            fn into_args(self) -> ::icyrecord::record::Args {
                ::icyrecord::record::Args::new()
                    #( #into_args )*
            }

            fn from_record(
                record: &::icyrecord::record::Record,
            ) -> ::std::result::Result<Self, ::icyrecord::error::RecordError> {
                ::std::result::Result::Ok(Self {
                    #( #from_record )*
                })
            }
        }
    })
}

///
/// TESTS
///
