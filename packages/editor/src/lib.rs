//! # Maquette Editor
//!
//! The document engine behind the maquette visual builder: a typed node
//! tree with structural mutations, whole-snapshot undo/redo, starter
//! templates and selection tracking.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ UI collaborators (rendering, drag & drop)    │
//! └──────────────────────────────────────────────┘
//!                      ↓ intents        ↑ views
//! ┌──────────────────────────────────────────────┐
//! │ Editor (facade, one per open document)       │
//! │   mutations  insert/update/delete/reorder    │
//! │   history    linear snapshot undo/redo       │
//! │   templates  starter-document catalog        │
//! │   selection  at-most-one selected node       │
//! └──────────────────────────────────────────────┘
//!                      ↓
//! ┌──────────────────────────────────────────────┐
//! │ maquette-document (nodes, snapshots,         │
//! │ integrity checks, id allocation)             │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Snapshots are values**. Every structural edit produces a new
//!    snapshot; recorded history entries are never touched again, which is
//!    what makes undo/redo a cursor move.
//! 2. **Validate before copy**. A rejected intent returns an error value
//!    and leaves document, history and selection exactly as they were.
//! 3. **Selection is orthogonal**. It is never recorded in history and
//!    never restored by undo/redo; stale ids resolve to "nothing
//!    selected".
//! 4. **Templates are frozen**. Loading one clones the catalog copy, so
//!    documents never write back into the registry.
//!
//! ## Usage
//!
//! ```rust
//! use maquette_editor::{Editor, NodeKind, NodeUpdate};
//!
//! let mut editor = Editor::new();
//! editor.load_template("blank").unwrap();
//!
//! let root = editor.document().root().unwrap().id.clone();
//! let text = editor.insert(NodeKind::Text, Some(&root)).unwrap();
//! editor.update(&text, NodeUpdate::new().content("Hello")).unwrap();
//!
//! editor.undo();
//! editor.redo();
//! assert_eq!(editor.document().get(&text).unwrap().content, "Hello");
//! ```

mod editor;
mod errors;
mod history;
mod mutations;
mod selection;
mod templates;

pub use editor::{DocumentView, Editor};
pub use errors::{EditorError, EditorResult};
pub use history::History;
pub use mutations::{Mutation, MutationOutcome, NodeUpdate, SelectionEffect};
pub use selection::Selection;
pub use templates::{Template, TemplateRegistry};

// Re-export the document model for convenience.
pub use maquette_document::{Node, NodeKind, Snapshot};
