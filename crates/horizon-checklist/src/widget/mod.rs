//! The checklist widget and its render surface.
//!
//! # Core Types
//!
//! - [`CheckList`]: the mounted widget; reconciles rows against the bound
//!   catalog and selection, and forwards checkbox toggles into the selection
//! - [`Container`]: the host-provided render target and input source
//! - [`RenderSurface`] / [`RenderNode`]: the rows, keyed by [`NodeId`]
//! - [`ListRenderer`]: materializes items into rows
//! - [`InputEvent`]: a user interaction with one row
//!
//! # Architecture Overview
//!
//! ```text
//! Binding<ItemCatalog> ──┐                       ┌──> RenderSurface
//!                        ├──> CheckList ─────────┤
//! Binding<SelectionSet> ─┘        ^              └──> SelectionSet edits
//!                                 │
//! Container::dispatch ────────────┘
//! ```

mod container;
mod engine;
mod events;
mod renderer;
mod surface;

pub use container::Container;
pub use engine::{CheckList, Reconcile, Toggle};
pub use events::{ControlKind, InputEvent};
pub use renderer::ListRenderer;
pub use surface::{NodeId, RenderNode, RenderSurface, RowView};
