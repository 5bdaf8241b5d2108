//! Metadata extracted from one annotated declaration.
//!
//! These structures are the interface between the scanning phase and the
//! validation phase: a [`Candidate`] records what was declared, without any
//! judgement about whether it is valid, and a [`ValidatedStrongType`] is the
//! descriptor the emitter consumes. Both are transient values discarded at
//! the end of the pass.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Ident, ImplItemFn, ItemStruct, Type};

/// Which contract variant the declaration opted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StrongVariant {
    /// `StrongWrapper<TValue>`: equality, string form, serde.
    Plain,
    /// `StrongWrapperOrd<TValue>`: additionally a total order.
    Ordered,
}

/// Shape of the annotated declaration, as found by the scanner.
#[derive(Debug, Clone)]
pub(crate) enum WrapperShape {
    /// A struct declaration; the validator checks its fields.
    Struct(ItemStruct),
    /// A named type that is not a struct (enum, union, alias) and therefore
    /// cannot host the generated companion members.
    Other,
}

/// One `StrongWrapper`/`StrongWrapperOrd` impl found for a candidate.
#[derive(Debug, Clone)]
pub(crate) struct MarkerImpl {
    pub(crate) variant: StrongVariant,
    /// The marker's single generic argument, when it has exactly one.
    pub(crate) value_ty: Option<Type>,
}

/// An annotated declaration prior to validation.
///
/// Emitted for every `#[strong_type]` item that names a type, valid or not.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub(crate) ident: Ident,
    pub(crate) shape: WrapperShape,
    /// Base marker impls whose self type is this candidate, in declaration
    /// order.
    pub(crate) markers: Vec<MarkerImpl>,
    /// Inherent `fn new` items whose self type is this candidate.
    pub(crate) constructors: Vec<ImplItemFn>,
}

impl Candidate {
    pub(crate) fn span(&self) -> Span {
        self.ident.span()
    }

    pub(crate) fn name(&self) -> String {
        self.ident.to_string()
    }
}

/// Validator output: everything the emitter needs for one wrapper.
#[derive(Debug, Clone)]
pub(crate) struct ValidatedStrongType {
    pub(crate) ident: Ident,
    pub(crate) value_ty: Type,
    pub(crate) variant: StrongVariant,
    /// Whether the single correctly shaped constructor was found. Adapters
    /// construct through it when present and through the struct literal
    /// otherwise.
    pub(crate) has_constructor: bool,
}

impl ValidatedStrongType {
    /// The construction expression adapters use, with the raw value bound to
    /// a local named `value` at the call site.
    pub(crate) fn construct_expr(&self) -> TokenStream {
        if self.has_constructor {
            quote! { Self::new(value) }
        } else {
            quote! { Self { value } }
        }
    }
}
