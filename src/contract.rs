//! The wrapper contract model.
//!
//! A strong type is a struct holding exactly one `value` field. The contract
//! comes in two layers:
//!
//! - [`StrongType`] is the operational contract (construct, borrow, unwrap).
//!   It is implemented by the generation pipeline, never by hand.
//! - [`StrongWrapper`] / [`StrongWrapperOrd`] are the base markers a
//!   declaration implements (as empty impls) to opt into the plain or the
//!   comparable variant. The marker's generic argument declares the wrapped
//!   value type; the validator resolves it from there.
//!
//! Equality, ordering and the string form of a wrapper are always defined in
//! terms of the wrapped value. The pipeline emits the corresponding
//! `PartialEq`/`Eq`, `PartialOrd`/`Ord` and `Display` impls, so two wrappers
//! of the same type compare exactly as their values do, and a wrapper never
//! compares against a different wrapper type at all.

/// Operational contract for a validated strong type.
///
/// Implemented by generated code for every declaration that passes
/// validation. The construction path goes through the declaration's own
/// single-argument constructor, so any invariant that constructor upholds is
/// preserved by every adapter.
pub trait StrongType: Sized {
    /// The wrapped value type.
    type Value;

    /// Construct the wrapper from a raw value.
    fn from_value(value: Self::Value) -> Self;

    /// Borrow the wrapped value.
    fn value(&self) -> &Self::Value;

    /// Unwrap into the raw value.
    fn into_value(self) -> Self::Value;
}

/// Base marker for the plain wrapper variant.
///
/// Declared by hand as an empty impl:
///
/// ```rust,ignore
/// impl StrongWrapper<Uuid> for RequestId {}
/// ```
pub trait StrongWrapper<TValue> {}

/// Base marker for the comparable wrapper variant.
///
/// Same declaration shape as [`StrongWrapper`]; additionally requests
/// `PartialOrd`/`Ord` impls delegating to the wrapped value, so the value
/// type must have a total order.
pub trait StrongWrapperOrd<TValue> {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Count {
        value: u32,
    }

    impl StrongType for Count {
        type Value = u32;

        fn from_value(value: u32) -> Self {
            Self { value }
        }

        fn value(&self) -> &u32 {
            &self.value
        }

        fn into_value(self) -> u32 {
            self.value
        }
    }

    impl StrongWrapper<u32> for Count {}

    #[test]
    fn construct_borrow_unwrap() {
        let count = Count::from_value(7);
        assert_eq!(*count.value(), 7);
        assert_eq!(count.into_value(), 7);
    }

    #[test]
    fn value_round_trip() {
        let count = Count::from_value(41);
        let raw = count.into_value();
        assert_eq!(*Count::from_value(raw).value(), 41);
    }
}
