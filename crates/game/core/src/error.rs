//! Common error infrastructure shared by every crate in the workspace.
//!
//! Domain-specific errors (e.g. `PathError`, `BrainError`) are defined next to
//! the code that raises them; this module only provides the classification
//! used to decide what a caller may recover from.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the situation may change next turn (blocked tile)
/// - **Validation**: invalid input, reject without retry (bad map file)
/// - **Internal**: a caller bug such as an out-of-grid coordinate or a
///   dangling actor id; the current decision is abandoned
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a programming error.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all workspace errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

impl GameError for crate::env::LayoutError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "layout.empty",
            Self::RaggedRow { .. } => "layout.ragged_row",
            Self::UnknownGlyph { .. } => "layout.unknown_glyph",
        }
    }
}
