//! Declaration scanning for the strong type pipeline.

mod candidate;
mod scan;

pub(crate) use candidate::{Candidate, MarkerImpl, StrongVariant, ValidatedStrongType, WrapperShape};
pub(crate) use scan::{ScanOutput, is_marker_attr, scan_module};
