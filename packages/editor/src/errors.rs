//! Error types for the editor

use thiserror::Error;

/// Failure surface of the engine. Every rejected intent is reported as a
/// value and leaves the document, history and selection untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// The referenced node does not exist in the active snapshot.
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// The referenced parent does not exist in the active snapshot.
    #[error("Parent not found: {0}")]
    ParentNotFound(String),

    /// The referenced template is not in the registry.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// The root node cannot be deleted.
    #[error("Cannot delete the root node")]
    CannotDeleteRoot,

    /// A parentless insert was attempted on a non-empty document.
    #[error("Document already has a root node")]
    RootAlreadyExists,
}

impl EditorError {
    /// True when the failure is a reference to something that does not
    /// exist (node, parent or template).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            EditorError::NodeNotFound(_)
                | EditorError::ParentNotFound(_)
                | EditorError::TemplateNotFound(_)
        )
    }

    /// True when the intent itself is structurally disallowed.
    pub fn is_invalid_operation(&self) -> bool {
        !self.is_not_found()
    }
}

/// Common result alias for engine operations.
pub type EditorResult<T> = Result<T, EditorError>;
