//! Integer token codec shared by all `u64`-valued wrappers.
//!
//! The read path accepts exactly two token kinds: an integer, reconstructed
//! through the wrapper's [`FromUInt64`] hook, and a null token, mapped to the
//! wrapper's default state. Any other token kind is a hard error surfaced to
//! the caller, naming the expected and the actual kind.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Unexpected, Visitor};

/// Constructor hook for wrappers whose value is a 64-bit unsigned integer.
///
/// Implemented by generated code; the generated impl forwards through the
/// declaration's validated constructor.
pub trait FromUInt64: Sized {
    fn from_u64(value: u64) -> Self;
}

/// Serde visitor expecting an unsigned 64-bit integer token or null.
pub struct UInt64Visitor<T> {
    marker: PhantomData<T>,
}

impl<T> UInt64Visitor<T> {
    pub fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T> Default for UInt64Visitor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'de, T> Visitor<'de> for UInt64Visitor<T>
where
    T: FromUInt64 + Default,
{
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a 64-bit unsigned integer or null")
    }

    fn visit_u64<E>(self, value: u64) -> Result<T, E>
    where
        E: de::Error,
    {
        Ok(T::from_u64(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<T, E>
    where
        E: de::Error,
    {
        u64::try_from(value)
            .map(T::from_u64)
            .map_err(|_| E::invalid_value(Unexpected::Signed(value), &self))
    }

    fn visit_unit<E>(self) -> Result<T, E>
    where
        E: de::Error,
    {
        Ok(T::default())
    }

    fn visit_none<E>(self) -> Result<T, E>
    where
        E: de::Error,
    {
        Ok(T::default())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<T, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}
