//! Procedural macro implementations for `mlib-macros`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, ItemFn, LitStr};

/// Level used when `test_traced` is given no argument.
const DEFAULT_LEVEL: &str = "DEBUG";

/// Resolve a level name to a `tracing::Level` path.
fn level(name: &LitStr) -> Result<TokenStream2, syn::Error> {
    let path = match name.value().to_ascii_uppercase().as_str() {
        "TRACE" => quote!(::mlib_macros::tracing::Level::TRACE),
        "DEBUG" => quote!(::mlib_macros::tracing::Level::DEBUG),
        "INFO" => quote!(::mlib_macros::tracing::Level::INFO),
        "WARN" => quote!(::mlib_macros::tracing::Level::WARN),
        "ERROR" => quote!(::mlib_macros::tracing::Level::ERROR),
        other => {
            return Err(syn::Error::new(
                name.span(),
                format!(
                    "invalid level `{other}`; expected one of TRACE, DEBUG, INFO, WARN, ERROR"
                ),
            ))
        }
    };
    Ok(path)
}

/// Run a test with a `tracing` subscriber that writes to the test output.
///
/// The optional argument is the maximum level to record (`"DEBUG"` when omitted).
///
/// ```ignore
/// use mlib_macros::test_traced;
/// use tracing::info;
///
/// #[test_traced("INFO")]
/// fn test_with_logs() {
///     info!("visible in the test output");
/// }
/// ```
#[proc_macro_attribute]
pub fn test_traced(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);

    // Parse the level
    let name = if attr.is_empty() {
        LitStr::new(DEFAULT_LEVEL, proc_macro2::Span::call_site())
    } else {
        parse_macro_input!(attr as LitStr)
    };
    let level = match level(&name) {
        Ok(level) => level,
        Err(err) => return err.to_compile_error().into(),
    };

    // Wrap the body so the subscriber is only active for this test
    let attrs = &input.attrs;
    let vis = &input.vis;
    let sig = &input.sig;
    let block = &input.block;
    let expanded = quote! {
        #[test]
        #(#attrs)*
        #vis #sig {
            let subscriber = ::mlib_macros::tracing_subscriber::fmt()
                .with_test_writer()
                .with_max_level(#level)
                .with_line_number(true)
                .with_span_events(::mlib_macros::tracing_subscriber::fmt::format::FmtSpan::CLOSE)
                .finish();
            let dispatcher = ::mlib_macros::tracing::Dispatch::new(subscriber);
            ::mlib_macros::tracing::dispatcher::with_default(&dispatcher, || #block)
        }
    };
    TokenStream::from(expanded)
}
