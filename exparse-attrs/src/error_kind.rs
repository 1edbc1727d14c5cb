use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute,
    Expr,
    Fields,
    Ident,
    ItemStruct,
    Result,
    Token,
};

/// A single `name = value` tag inside `#[error(...)]`.
enum Tag {
    Category(Ident),
    Message(Expr),
    Labels(Expr),
    Help(Expr),
}

impl Parse for Tag {
    fn parse(input: ParseStream) -> Result<Self> {
        let name: Ident = input.parse()?;
        input.parse::<Token![=]>()?;

        if name == "category" {
            Ok(Tag::Category(input.parse()?))
        } else if name == "message" {
            Ok(Tag::Message(input.parse()?))
        } else if name == "labels" {
            Ok(Tag::Labels(input.parse()?))
        } else if name == "help" {
            Ok(Tag::Help(input.parse()?))
        } else {
            Err(syn::Error::new(name.span(), format!("unknown tag `{}`", name)))
        }
    }
}

/// Sets `slot` to `value`, failing if the tag was already given.
fn set_once<T: Spanned>(slot: &mut Option<T>, value: T, tag: &str) -> Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(value.span(), format!("duplicate `{}` tag", tag)));
    }
    *slot = Some(value);
    Ok(())
}

/// The contents of the `error` attribute, with the required tags checked.
struct ErrorArgs {
    category: Ident,
    message: Expr,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl ErrorArgs {
    /// Reads the `error` attribute among `attrs`. `name` is the struct the attribute belongs to.
    fn from_attributes(name: &Ident, attrs: &[Attribute]) -> Result<Self> {
        let Some(attr) = attrs.iter().find(|attr| attr.path().is_ident("error")) else {
            return Err(syn::Error::new(name.span(), "missing `#[error(...)]` attribute"));
        };

        let (mut category, mut message, mut labels, mut help) = (None, None, None, None);
        let tags = attr.parse_args_with(Punctuated::<Tag, Token![,]>::parse_terminated)?;
        for tag in tags {
            match tag {
                Tag::Category(ident) => set_once(&mut category, ident, "category")?,
                Tag::Message(expr) => set_once(&mut message, expr, "message")?,
                Tag::Labels(expr) => set_once(&mut labels, expr, "labels")?,
                Tag::Help(expr) => set_once(&mut help, expr, "help")?,
            }
        }

        let missing = |tag: &str| syn::Error::new(
            attr.span(),
            format!("missing `{}` tag in `#[error(...)]`", tag),
        );
        Ok(Self {
            category: category.ok_or_else(|| missing("category"))?,
            message: message.ok_or_else(|| missing("message"))?,
            labels,
            help,
        })
    }
}

/// The struct to derive `ErrorKind` for.
pub struct ErrorKindTarget {
    pub name: Ident,

    /// Names of the struct's fields, brought into scope for the tag expressions.
    fields: Vec<Ident>,

    args: ErrorArgs,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let item: ItemStruct = input.parse()?;
        let fields = match &item.fields {
            Fields::Named(named) => named.named.iter().filter_map(|field| field.ident.clone()).collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(unnamed) => return Err(syn::Error::new(
                unnamed.span(),
                "`ErrorKind` cannot be derived for tuple structs",
            )),
        };
        let args = ErrorArgs::from_attributes(&item.ident, &item.attrs)?;

        Ok(Self { name: item.ident, fields, args })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let name = &self.name;
        let fields = &self.fields;
        let ErrorArgs { category, message, labels, help } = &self.args;

        let labels = match labels {
            Some(labels) => quote! { #labels },
            None => quote! { Vec::<String>::new() },
        };
        let help = help.as_ref().map(|help| quote! { builder.set_help(#help); });

        tokens.extend(quote! {
            fn category(&self) -> ::exparse_error::ErrorCategory {
                ::exparse_error::ErrorCategory::#category
            }

            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #[allow(unused_variables)]
                let #name { #(#fields),* } = self;

                // one label per span; extra labels or spans are dropped
                let labels = #labels
                    .into_iter()
                    .zip(spans)
                    .map(|(text, span)| {
                        let label = ariadne::Label::new((src_id, span.clone()))
                            .with_color(::exparse_error::EXPR);
                        let text = text.to_string();
                        if text.is_empty() { label } else { label.with_message(text) }
                    })
                    .collect::<Vec<_>>();

                let offset = spans.first().map_or(0, |span| span.start);
                let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                    .with_message(#message)
                    .with_labels(labels);

                #help
                builder.finish()
            }
        });
    }
}
