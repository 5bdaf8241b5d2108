//! # Strong Types
//!
//! Single-value wrapper types ("strong types") that the compiler treats as
//! distinct, non-interchangeable types, with a fixed set of conversion
//! adapters generated at build time.
//!
//! ## Features
//!
//! - **Validated shape**: the `#[strong_types]` pipeline checks every
//!   annotated declaration against the wrapper contract and reports a stable
//!   diagnostic (`STRONGTYPE001`..`STRONGTYPE011`) when the shape is wrong
//! - **Value adapter**: `From` conversions between a wrapper and its raw
//!   value, plus the [`StrongType`] accessor contract
//! - **Serde adapter**: wrappers serialize as their value's own form, never
//!   as a nested object; `u64`-valued wrappers go through a shared integer
//!   token codec
//! - **String adapter**: `FromStr`/`Display` for config and CLI binding
//!   layers that round-trip through strings
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use strong_types::strong_types;
//!
//! #[strong_types]
//! mod ids {
//!     use strong_types::{strong_type, StrongWrapperOrd};
//!
//!     #[strong_type]
//!     pub struct OrderId {
//!         value: u64,
//!     }
//!
//!     impl StrongWrapperOrd<u64> for OrderId {}
//!
//!     impl OrderId {
//!         pub fn new(value: u64) -> Self {
//!             Self { value }
//!         }
//!     }
//! }
//!
//! let id = ids::OrderId::new(42);
//! assert_eq!(u64::from(id), 42);
//! ```

pub mod contract;
pub mod convert;
pub mod error;

pub use contract::{StrongType, StrongWrapper, StrongWrapperOrd};
pub use convert::{FromUInt64, UInt64Visitor};
pub use error::ParseStrongTypeError;

pub use strong_types_macros::{strong_type, strong_types};

// Generated code references serde through this re-export so downstream
// crates do not need their own serde dependency.
pub use serde;
