//! Convenient re-exports for hosts embedding a checklist.
//!
//! ```
//! use horizon_checklist::prelude::*;
//! ```

pub use horizon_checklist_core::{Binding, Change, ConnectionId, Signal};

pub use crate::config::{ChangeDetection, CheckListConfig};
pub use crate::error::{CheckListError, Result};
pub use crate::model::{Item, ItemCatalog, SelectionEdit, SelectionSet};
pub use crate::widget::{CheckList, Container, ControlKind, InputEvent, NodeId, Reconcile, RowView, Toggle};
