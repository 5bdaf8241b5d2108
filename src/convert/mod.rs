//! Reusable conversion building blocks for generated adapters.

mod uint64_visitor;

pub use uint64_visitor::{FromUInt64, UInt64Visitor};

/// Serde codec for `u64`-valued wrappers, usable with
/// `#[serde(with = "strong_types::convert::uint64")]` on fields of wrapper
/// type. Generated serde impls go through the same [`UInt64Visitor`].
pub mod uint64 {
    use serde::{Deserializer, Serializer};

    use crate::StrongType;

    use super::{FromUInt64, UInt64Visitor};

    pub fn serialize<S, T>(wrapper: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: StrongType<Value = u64>,
    {
        serializer.serialize_u64(*wrapper.value())
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: FromUInt64 + Default,
    {
        deserializer.deserialize_any(UInt64Visitor::new())
    }
}
