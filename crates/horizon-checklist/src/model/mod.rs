//! Data handled by the checklist: what can be chosen, and what is chosen.
//!
//! - [`Item`]: one selectable entry (value + display text)
//! - [`ItemCatalog`]: immutable ordered snapshot of the available items
//! - [`SelectionSet`]: shared, ordered collection of selected values
//!
//! Both collections are owned by the host and handed to the widget through
//! [`Binding`](horizon_checklist_core::Binding)s. The widget reads catalogs
//! and edits the selection in place; it never replaces either.

mod item;
mod selection;

pub use item::{Item, ItemCatalog};
pub use selection::{SelectionEdit, SelectionSet};
