mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the `ErrorKind` trait from `exparse-error` for the given struct.
///
/// This trait can be derived for unit structs and structs with named fields.
///
/// The information of the error is customized using the `error` attribute by adding the
/// corresponding tags to it:
///
/// ```ignore
/// use exparse_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     category = Parse,
///     message = "unexpected end of expression",
///     labels = ["add something here"],
/// )]
/// pub struct Foo;
/// ```
///
/// The following tags are available:
///
/// | Tag        | Description                                                                     |
/// | ---------- | ------------------------------------------------------------------------------- |
/// | `category` | The `ErrorCategory` variant this error belongs to (`Tokenize`, `Parse`, `Eval`). |
/// | `message`  | The message displayed at the top of the error when it is displayed.             |
/// | `labels`   | An iterable of label strings, one for each span attached to the error.          |
/// | `help`     | Optional help text for the error, describing what the user can do to fix it.    |
///
/// `message`, `labels` and `help` accept expressions. For structs with named fields, the
/// expressions are evaluated with the fields of the struct in scope, so they can be used in the
/// expression (tuple structs are not supported).
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ::exparse_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            #target
        }
    }.into()
}
