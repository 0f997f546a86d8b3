//! `#[derive(Unit)]` for the angular unit markers of `clockwork-core`.
//!
//! A unit is described by the symbol it prints with and the size of one revolution counted in it:
//!
//! ```ignore
//! #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
//! #[unit(symbol = "Hms", full_turn = 24.0)]
//! pub struct HourAngle;
//! ```
//!
//! expands to `impl crate::Unit for HourAngle` with `FULL_TURN = 24.0` and `SYMBOL = "Hms"`, plus a
//! `Display` impl for `crate::Quantity<HourAngle>` printing `<value> <symbol>` (a requested precision applies to the
//! value). The paths are crate-relative, so the derive only works inside `clockwork-core`.
//!
//! Mistakes that can be caught while expanding are reported as compile errors:
//!
//! - a missing, empty or whitespace-containing `symbol`;
//! - a missing `full_turn`, or a literal one that is zero, negative or not finite;
//! - a key given twice, or an unknown key.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, ExprLit, ExprUnary, Ident, Lit, LitStr, Token,
    UnOp,
};

/// Derive `crate::Unit` and `Display` for `crate::Quantity<ThisUnit>` from `#[unit(symbol = .., full_turn = ..)]`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    if !matches!(&input.data, syn::Data::Struct(data) if data.fields.is_empty()) {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "angular units must be field-less structs",
        ));
    }

    let name = &input.ident;
    let UnitSpec { symbol, full_turn } = find_unit_spec(&input.attrs)?;

    Ok(quote! {
        impl crate::Unit for #name {
            const FULL_TURN: f64 = #full_turn;
            const SYMBOL: &'static str = #symbol;
        }

        impl ::core::fmt::Display for crate::Quantity<#name> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match f.precision() {
                    Some(p) => write!(f, "{:.*} {}", p, self.value(), #symbol),
                    None => write!(f, "{} {}", self.value(), #symbol),
                }
            }
        }
    })
}

/// Contents of `#[unit(...)]`.
struct UnitSpec {
    symbol: LitStr,
    full_turn: Expr,
}

impl Parse for UnitSpec {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut full_turn: Option<Expr> = None;

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match key.to_string().as_str() {
                "symbol" if symbol.is_some() => return Err(duplicate(&key)),
                "full_turn" if full_turn.is_some() => return Err(duplicate(&key)),
                "symbol" => {
                    let lit: LitStr = input.parse()?;
                    check_symbol(&lit)?;
                    symbol = Some(lit);
                }
                "full_turn" => {
                    let expr: Expr = input.parse()?;
                    check_full_turn(&expr)?;
                    full_turn = Some(expr);
                }
                other => {
                    return Err(syn::Error::new(
                        key.span(),
                        format!("unknown key `{other}`, expected `symbol` or `full_turn`"),
                    ));
                }
            }

            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(UnitSpec {
            symbol: symbol.ok_or_else(|| input.error("missing `symbol`"))?,
            full_turn: full_turn.ok_or_else(|| input.error("missing `full_turn`"))?,
        })
    }
}

fn duplicate(key: &Ident) -> syn::Error {
    syn::Error::new(key.span(), format!("`{key}` given more than once"))
}

fn check_symbol(lit: &LitStr) -> syn::Result<()> {
    let value = lit.value();
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(syn::Error::new(
            lit.span(),
            "symbol must be non-empty and contain no whitespace",
        ));
    }
    Ok(())
}

/// Rejects literal full turns that cannot describe a circle. Non-literal expressions are taken on trust.
fn check_full_turn(expr: &Expr) -> syn::Result<()> {
    let (negated, lit) = match expr {
        Expr::Lit(ExprLit { lit, .. }) => (false, lit),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr: inner,
            ..
        }) => match inner.as_ref() {
            Expr::Lit(ExprLit { lit, .. }) => (true, lit),
            _ => return Ok(()),
        },
        _ => return Ok(()),
    };

    let value = match lit {
        Lit::Float(f) => f.base10_parse::<f64>()?,
        Lit::Int(i) => i.base10_parse::<f64>()?,
        _ => return Err(syn::Error::new_spanned(expr, "full_turn must be a number")),
    };

    if negated || !(value.is_finite() && value > 0.0) {
        return Err(syn::Error::new_spanned(
            expr,
            "full_turn must be finite and strictly positive",
        ));
    }
    Ok(())
}

fn find_unit_spec(attrs: &[Attribute]) -> syn::Result<UnitSpec> {
    attrs
        .iter()
        .find(|attr| attr.path().is_ident("unit"))
        .ok_or_else(|| syn::Error::new(Span::call_site(), "missing #[unit(...)] attribute"))?
        .parse_args::<UnitSpec>()
}
