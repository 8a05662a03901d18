use proc_macro::TokenStream;

mod record;

/// Derive `RecordKind` for a struct with named fields.
///
/// ```ignore
/// #[derive(Record)]
/// #[record(name = "Person")]
/// struct Person {
///     #[record(label = "Full name")]
///     name: String,
///     #[record(label = "Age in years", precondition = "non_negative")]
///     age: i64,
/// }
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input.into()).into()
}
