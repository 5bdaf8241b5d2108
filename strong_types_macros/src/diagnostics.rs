//! Diagnostics as data.
//!
//! Every rule the pipeline can trip has a stable identifier
//! (`STRONGTYPE001`..`STRONGTYPE011`), a short title, a message template and
//! a severity, mirrored on the build tool's reporting surface. A diagnostic
//! is a plain value: producing one never aborts processing of sibling
//! candidates, it only skips generation for the candidate it belongs to.

use proc_macro2::Span;
use thiserror::Error;

/// Diagnostic category reported to the host build tool.
pub(crate) const CATEGORY: &str = "StrongTypes";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Severity {
    Error,
    Warning,
}

/// The rule that was violated, with enough context to format the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum DiagnosticKind {
    /// STRONGTYPE001: generation attaches companion impls to the type, so
    /// the declaration must be in the extendable wrapper shape.
    #[error("`{0}` must be a braced struct with a single `value` field")]
    NotWrapperStruct(String),

    /// STRONGTYPE002
    #[error(
        "`{0}` must declare exactly one `StrongWrapper<..>` or `StrongWrapperOrd<..>` impl"
    )]
    DoesNotExtendBase(String),

    /// STRONGTYPE003
    #[error("`{0}` must have exactly one constructor `fn new`, found {1}")]
    NoSingleConstructor(String, usize),

    /// STRONGTYPE004
    #[error("`{0}::new` must take exactly one named parameter")]
    WrongParameterCount(String),

    /// STRONGTYPE005
    #[error("`{0}::new` parameter type does not match the declared value type")]
    ParameterTypeMismatch(String),

    /// STRONGTYPE006
    #[error("`{0}::new` must forward its parameter as `Self {{ value: .. }}`")]
    MissingForwarding(String),

    /// STRONGTYPE007
    #[error("`{0}::new` must forward its own parameter, not a derived expression")]
    ForwardedArgumentMismatch(String),

    /// STRONGTYPE008
    #[error("`{0}::new` forwards `{1}` but its parameter is named `{2}`")]
    ForwardedArgumentNameMismatch(String, String, String),

    /// STRONGTYPE009
    #[error("module `{0}` requests generation but contains no `#[strong_type]` items")]
    NoGenerationRequests(String),

    /// STRONGTYPE010
    #[error(
        "generation for `{0}` requested but neither `StrongWrapper` nor `StrongWrapperOrd` is referenced in this module"
    )]
    ContractNotInScope(String),

    /// STRONGTYPE011
    #[error("`#[strong_type]` is attached to an item that does not name a type")]
    UnresolvableCandidate,
}

impl DiagnosticKind {
    pub(crate) fn id(&self) -> &'static str {
        match self {
            Self::NotWrapperStruct(_) => "STRONGTYPE001",
            Self::DoesNotExtendBase(_) => "STRONGTYPE002",
            Self::NoSingleConstructor(..) => "STRONGTYPE003",
            Self::WrongParameterCount(_) => "STRONGTYPE004",
            Self::ParameterTypeMismatch(_) => "STRONGTYPE005",
            Self::MissingForwarding(_) => "STRONGTYPE006",
            Self::ForwardedArgumentMismatch(_) => "STRONGTYPE007",
            Self::ForwardedArgumentNameMismatch(..) => "STRONGTYPE008",
            Self::NoGenerationRequests(_) => "STRONGTYPE009",
            Self::ContractNotInScope(_) => "STRONGTYPE010",
            Self::UnresolvableCandidate => "STRONGTYPE011",
        }
    }

    pub(crate) fn title(&self) -> &'static str {
        match self {
            Self::NotWrapperStruct(_) => "Is not an extendable wrapper",
            Self::DoesNotExtendBase(_) => "Does not extend base contract",
            Self::NoSingleConstructor(..) => "No single constructor",
            Self::WrongParameterCount(_) => "Invalid constructor",
            Self::ParameterTypeMismatch(_) => "Invalid constructor",
            Self::MissingForwarding(_) => "Invalid constructor",
            Self::ForwardedArgumentMismatch(_) => "Invalid constructor",
            Self::ForwardedArgumentNameMismatch(..) => "Invalid constructor",
            Self::NoGenerationRequests(_) => "Annotation unused",
            Self::ContractNotInScope(_) => "Base contract not found",
            Self::UnresolvableCandidate => "Candidate cannot be determined",
        }
    }

    pub(crate) fn severity(&self) -> Severity {
        match self {
            Self::NoGenerationRequests(_) | Self::UnresolvableCandidate => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// One reported rule violation, tied to the span it was observed at.
#[derive(Debug, Clone)]
pub(crate) struct Diagnostic {
    pub(crate) kind: DiagnosticKind,
    pub(crate) span: Span,
}

impl Diagnostic {
    pub(crate) fn new(kind: DiagnosticKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub(crate) fn id(&self) -> &'static str {
        self.kind.id()
    }

    pub(crate) fn is_error(&self) -> bool {
        self.kind.severity() == Severity::Error
    }

    /// Render for the compiler's reporting surface: id, category, title,
    /// then the formatted message.
    pub(crate) fn to_syn_error(&self) -> syn::Error {
        syn::Error::new(
            self.span,
            format!(
                "{} [{}] {}: {}",
                self.id(),
                CATEGORY,
                self.kind.title(),
                self.kind
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_stable() {
        let kinds = [
            DiagnosticKind::NotWrapperStruct("X".into()),
            DiagnosticKind::DoesNotExtendBase("X".into()),
            DiagnosticKind::NoSingleConstructor("X".into(), 0),
            DiagnosticKind::WrongParameterCount("X".into()),
            DiagnosticKind::ParameterTypeMismatch("X".into()),
            DiagnosticKind::MissingForwarding("X".into()),
            DiagnosticKind::ForwardedArgumentMismatch("X".into()),
            DiagnosticKind::ForwardedArgumentNameMismatch("X".into(), "a".into(), "b".into()),
            DiagnosticKind::NoGenerationRequests("m".into()),
            DiagnosticKind::ContractNotInScope("X".into()),
            DiagnosticKind::UnresolvableCandidate,
        ];
        for (index, kind) in kinds.iter().enumerate() {
            assert_eq!(kind.id(), format!("STRONGTYPE{:03}", index + 1));
        }
    }

    #[test]
    fn severities_follow_the_taxonomy() {
        assert_eq!(
            DiagnosticKind::NoGenerationRequests("m".into()).severity(),
            Severity::Warning
        );
        assert_eq!(
            DiagnosticKind::UnresolvableCandidate.severity(),
            Severity::Warning
        );
        assert_eq!(
            DiagnosticKind::ContractNotInScope("X".into()).severity(),
            Severity::Error
        );
        assert_eq!(
            DiagnosticKind::NotWrapperStruct("X".into()).severity(),
            Severity::Error
        );
    }

    #[test]
    fn rendered_message_carries_id_and_category() {
        let diagnostic = Diagnostic::new(
            DiagnosticKind::NotWrapperStruct("Timestamp".into()),
            Span::call_site(),
        );
        let rendered = diagnostic.to_syn_error().to_string();
        assert!(rendered.starts_with("STRONGTYPE001 [StrongTypes] Is not an extendable wrapper:"));
        assert!(rendered.contains("Timestamp"));
    }
}
