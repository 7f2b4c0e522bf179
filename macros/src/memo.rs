use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Error, Expr, Ident, Result,
};

struct MemoCall {
    receiver: Expr,
    site: Ident,
    value: Expr,
    deps: Vec<Expr>,
}

impl Parse for MemoCall {
    fn parse(input: ParseStream) -> Result<Self> {
        let expr: Expr = input.parse()?;
        let Expr::MethodCall(call) = expr else {
            return Err(Error::new_spanned(
                expr,
                "expected a call like `m.site(value, [dep1, dep2])`",
            ));
        };
        if call.args.len() != 2 {
            return Err(Error::new_spanned(
                &call,
                "expected exactly two arguments: a value and a dependency array",
            ));
        }

        let mut args = call.args.into_iter();
        let value = args.next().unwrap();
        let deps = match args.next().unwrap() {
            Expr::Array(array) => array.elems.into_iter().collect(),
            other => {
                return Err(Error::new_spanned(
                    other,
                    "dependencies must be an array literal, like `[color, size]`",
                ))
            }
        };

        Ok(MemoCall {
            receiver: *call.receiver,
            site: call.method,
            value,
            deps,
        })
    }
}

pub fn memo(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input);
    let output: proc_macro2::TokenStream = { expand(input) };
    proc_macro::TokenStream::from(output)
}

fn expand(call: MemoCall) -> TokenStream {
    let MemoCall {
        receiver,
        site,
        value,
        deps,
    } = call;
    let site = site.to_string();

    quote! {
        #receiver.memo(
            #site,
            #value,
            ::inline_memo::Deps::from_vec(::std::vec![
                #(::inline_memo::Dep::from(#deps)),*
            ]),
        )
    }
}
