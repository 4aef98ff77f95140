//! # Maquette Document Model
//!
//! The data model for maquette documents: a flat, id-keyed store of typed
//! nodes wired into a tree through parent/child references.
//!
//! - [`Node`] / [`NodeKind`]: one element of the tree and the closed set of
//!   kinds, with per-kind creation defaults.
//! - [`Snapshot`]: the whole store at one instant. A plain value — the
//!   editor clones it per edit, so history entries stay untouched.
//! - [`integrity`]: invariant checks for tests and hand-built catalogs.
//! - [`IdAllocator`]: seeded sequential node ids.

pub mod id;
pub mod integrity;
pub mod node;
pub mod snapshot;

pub use id::{document_seed, IdAllocator};
pub use integrity::{check_integrity, IntegrityViolation};
pub use node::{Node, NodeKind};
pub use snapshot::Snapshot;
