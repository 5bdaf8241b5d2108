//! Macro crate for `strong_types`.
//!
//! Hosts the build-time pipeline that turns annotated wrapper declarations
//! into validated strong types with generated adapters. The pipeline runs
//! once per `#[strong_types]` module: the scanner collects every
//! `#[strong_type]` declaration, the validator checks each one against the
//! wrapper contract, and the emitter appends the adapter impls to the
//! module body. Violations are reported as `STRONGTYPE001`..`STRONGTYPE011`
//! diagnostics; a failing declaration skips generation without affecting
//! its siblings.

use proc_macro::TokenStream;
use syn::{ItemMod, parse_macro_input};

mod diagnostics;
mod expand;
mod generate;
mod parse;
mod validate;

/// Runs the strong type pipeline over a module.
///
/// Every `#[strong_type]` declaration inside the module is validated
/// against the wrapper contract and, when valid, extended with:
///
/// - the value adapter: `StrongType`, `From<TValue>` and `From<Self>`
/// - contract behavior: `Clone`, `Debug`, `Display`, `PartialEq`/`Eq`, and
///   `PartialOrd`/`Ord` for the `StrongWrapperOrd` variant
/// - the serde adapter: `Serialize`/`Deserialize` in the value's own form,
///   with `u64` values going through the shared integer token codec
/// - the string adapter: `FromStr` with a typed parse error
///
/// # Example
///
/// ```rust,ignore
/// #[strong_types]
/// mod ids {
///     use strong_types::{strong_type, StrongWrapperOrd};
///
///     #[strong_type]
///     pub struct OrderId {
///         value: u64,
///     }
///
///     impl StrongWrapperOrd<u64> for OrderId {}
///
///     impl OrderId {
///         pub fn new(value: u64) -> Self {
///             Self { value }
///         }
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn strong_types(args: TokenStream, input: TokenStream) -> TokenStream {
    if !args.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "#[strong_types] takes no arguments",
        )
        .to_compile_error()
        .into();
    }
    let module = parse_macro_input!(input as ItemMod);
    expand::strong_types_module(module)
        .unwrap_or_else(|error| error.to_compile_error())
        .into()
}

/// Marks one declaration inside a `#[strong_types]` module for adapter
/// generation. Carries no parameters.
///
/// The surrounding module macro consumes the marker; on its own this
/// attribute leaves the item untouched, so a stray use outside a
/// `#[strong_types]` module compiles but generates nothing.
#[proc_macro_attribute]
pub fn strong_type(_args: TokenStream, input: TokenStream) -> TokenStream {
    input
}
