//! The adapter emitter.
//!
//! Consumes a [`ValidatedStrongType`] descriptor and synthesizes the adapter
//! units attached alongside the wrapper declaration: the contract behavior
//! impls, the value adapter, the serde adapter and the string adapter.
//! Emission is purely additive (the wrapper's own items are never touched)
//! and deterministic: the same descriptor always yields byte-identical
//! tokens.

mod contract;
mod serde_adapter;
mod string_adapter;
mod value_adapter;

use proc_macro2::TokenStream;
use quote::quote;

use crate::parse::ValidatedStrongType;

pub(crate) fn emit(descriptor: &ValidatedStrongType) -> TokenStream {
    let contract = contract::generate(descriptor);
    let value_adapter = value_adapter::generate(descriptor);
    let serde_adapter = serde_adapter::generate(descriptor);
    let string_adapter = string_adapter::generate(descriptor);

    quote! {
        #contract
        #value_adapter
        #serde_adapter
        #string_adapter
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use crate::parse::StrongVariant;

    use super::*;

    fn descriptor(variant: StrongVariant) -> ValidatedStrongType {
        ValidatedStrongType {
            ident: parse_quote!(OrderId),
            value_ty: parse_quote!(u64),
            variant,
            has_constructor: true,
        }
    }

    #[test]
    fn emission_is_deterministic() {
        let descriptor = descriptor(StrongVariant::Ordered);
        assert_eq!(emit(&descriptor).to_string(), emit(&descriptor).to_string());
    }

    #[test]
    fn plain_variant_gets_no_ordering() {
        let tokens = emit(&descriptor(StrongVariant::Plain)).to_string();
        assert!(!tokens.contains("PartialOrd"));
        assert!(tokens.contains("PartialEq"));
    }

    #[test]
    fn ordered_variant_gets_total_order() {
        let tokens = emit(&descriptor(StrongVariant::Ordered)).to_string();
        assert!(tokens.contains("PartialOrd"));
        assert!(tokens.contains("cmp"));
    }

    #[test]
    fn all_three_adapter_families_are_present() {
        let tokens = emit(&descriptor(StrongVariant::Ordered)).to_string();
        assert!(tokens.contains("StrongType for OrderId"));
        assert!(tokens.contains("Serialize for OrderId"));
        assert!(tokens.contains("FromStr for OrderId"));
    }

    #[test]
    fn construction_goes_through_the_validated_constructor() {
        let tokens = emit(&descriptor(StrongVariant::Plain)).to_string();
        assert!(tokens.contains("Self :: new (value)"));
    }

    #[test]
    fn fallback_construction_uses_the_struct_literal() {
        let mut descriptor = descriptor(StrongVariant::Plain);
        descriptor.has_constructor = false;
        let tokens = emit(&descriptor).to_string();
        assert!(tokens.contains("Self { value }"));
    }
}
