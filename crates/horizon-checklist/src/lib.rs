//! Horizon Checklist: a checkbox list bound to a catalog and a selection.
//!
//! The host owns two collections: the catalog of items that *can* be chosen
//! and the set of values that *are* chosen. It hands both to a [`CheckList`]
//! through [`Binding`]s. The list renders one checkbox row per catalog item,
//! checks the rows whose value is selected, and writes user toggles straight
//! back into the host's selection.
//!
//! # Reconciliation
//!
//! - Rebinding the catalog rebuilds every row, unless the new catalog has the
//!   same length as the old one (see [`ChangeDetection`]).
//! - Rebinding the selection re-marks the existing rows, under the same
//!   length rule. Rows are never rebuilt for a selection change.
//! - Checking a row appends its value to the selection; unchecking removes
//!   that value's first occurrence.
//!
//! # Example
//!
//! ```
//! use horizon_checklist::prelude::*;
//!
//! let available = Binding::new(ItemCatalog::from_json_str(
//!     r#"[{"value": "a", "displayText": "A"}, {"value": "b", "displayText": "B"}]"#,
//! )?);
//! let selected = Binding::new(SelectionSet::from_json_str(r#"["b"]"#)?);
//! let container = Container::new("plugins");
//!
//! let list = CheckList::mount(container.clone(), &available, &selected, CheckListConfig::default())?;
//! println!("{}", list.debug_tree());
//!
//! let a = list.rows()[0].id;
//! container.dispatch(InputEvent::checkbox(a, true));
//! assert_eq!(selected.get().to_json(), serde_json::json!(["b", "a"]));
//! # Ok::<(), horizon_checklist::CheckListError>(())
//! ```
//!
//! [`Binding`]: horizon_checklist_core::Binding
//! [`ChangeDetection`]: config::ChangeDetection

pub mod config;
mod error;
pub mod logging;
pub mod model;
pub mod prelude;
pub mod widget;

pub use error::{CheckListError, Result};
pub use widget::CheckList;
