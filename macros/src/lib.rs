use proc_macro::TokenStream;

mod memo;

/// Memoizes a value with the call shape `memo!(m.site(value, [deps...]))`.
///
/// The method name becomes the call-site identifier and every dependency
/// expression is converted through `Dep::from`, so
/// `memo!(m.style(style, [color]))` expands to a
/// `m.memo("style", style, ...)` call.
#[proc_macro]
pub fn memo(input: TokenStream) -> TokenStream {
    memo::memo(input)
}
