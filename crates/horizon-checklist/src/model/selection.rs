//! The shared, ordered set of selected values.
//!
//! A [`SelectionSet`] is owned by the host and lent to the widget by
//! reference: cloning the handle shares the underlying collection, so an edit
//! made by the widget is immediately visible to the host, and announced on
//! [`SelectionSet::edited`].
//!
//! # Example
//!
//! ```
//! use horizon_checklist::model::{SelectionEdit, SelectionSet};
//!
//! let selected = SelectionSet::new(["b"]);
//! selected.edited().connect(|edit| match edit {
//!     SelectionEdit::Appended { value, index } => println!("+{value} at {index}"),
//!     SelectionEdit::Removed { value, index } => println!("-{value} at {index}"),
//! });
//!
//! let handle = selected.clone();
//! handle.push("a");
//! assert_eq!(selected.values(), vec!["b", "a"]);
//! ```

use std::fmt;
use std::sync::Arc;

use horizon_checklist_core::Signal;
use parking_lot::RwLock;

use super::item::{kind_of, ItemCatalog};
use crate::error::{CheckListError, Result};
use crate::logging::targets;

/// An in-place edit applied to a [`SelectionSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEdit {
    /// `value` was appended and now sits at `index`.
    Appended { value: String, index: usize },
    /// `value` was removed from `index`.
    Removed { value: String, index: usize },
}

struct SelectionInner {
    values: RwLock<Vec<String>>,
    edited: Signal<SelectionEdit>,
}

/// Ordered collection of selected values, shared by reference.
///
/// Order reflects selection order, not catalog order. Duplicates are not
/// prevented, and values need not exist in any catalog: stale values simply
/// never render as checked (see [`stale_values`](Self::stale_values)).
#[derive(Clone)]
pub struct SelectionSet {
    inner: Arc<SelectionInner>,
}

impl Default for SelectionSet {
    fn default() -> Self {
        Self::new(std::iter::empty::<String>())
    }
}

impl SelectionSet {
    /// Creates a selection holding `values` in order.
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            inner: Arc::new(SelectionInner {
                values: RwLock::new(values.into_iter().map(Into::into).collect()),
                edited: Signal::new(),
            }),
        }
    }

    /// Decodes a selection from a JSON array of strings.
    pub fn from_json(json: &serde_json::Value) -> Result<Self> {
        let entries = json.as_array().ok_or_else(|| {
            CheckListError::malformed("selected", format!("expected an array, found {}", kind_of(json)))
        })?;
        let values = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                entry.as_str().map(str::to_string).ok_or_else(|| {
                    CheckListError::malformed(
                        "selected",
                        format!("entry {index}: expected a string, found {}", kind_of(entry)),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(values))
    }

    /// Parses JSON text and decodes it with [`from_json`](Self::from_json).
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::from_json(&serde_json::from_str(text)?)
    }

    /// Encodes the current values as a JSON array.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(self.values())
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.inner.values.read().len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.inner.values.read().is_empty()
    }

    /// Returns `true` if `value` is selected.
    pub fn contains(&self, value: &str) -> bool {
        self.inner.values.read().iter().any(|v| v == value)
    }

    /// Snapshot of the values in selection order.
    pub fn values(&self) -> Vec<String> {
        self.inner.values.read().clone()
    }

    /// Access the values through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[String]) -> R,
    {
        f(&self.inner.values.read())
    }

    /// Position of the first entry equal to `value`.
    pub fn position(&self, value: &str) -> Option<usize> {
        self.inner.values.read().iter().position(|v| v == value)
    }

    /// Appends `value` and returns its index. No duplicate check is made.
    pub fn push(&self, value: impl Into<String>) -> usize {
        let value = value.into();
        let index = {
            let mut values = self.inner.values.write();
            values.push(value.clone());
            values.len() - 1
        };
        tracing::trace!(target: targets::SELECTION, %value, index, "selection appended");
        self.inner.edited.emit(SelectionEdit::Appended { value, index });
        index
    }

    /// Removes and returns the entry at `index`, or `None` if out of range.
    pub fn remove_at(&self, index: usize) -> Option<String> {
        let value = {
            let mut values = self.inner.values.write();
            if index >= values.len() {
                return None;
            }
            values.remove(index)
        };
        tracing::trace!(target: targets::SELECTION, %value, index, "selection removed");
        self.inner.edited.emit(SelectionEdit::Removed {
            value: value.clone(),
            index,
        });
        Some(value)
    }

    /// Removes the first entry equal to `value`, returning where it was.
    pub fn remove_value(&self, value: &str) -> Option<usize> {
        let index = self.position(value)?;
        self.remove_at(index).map(|_| index)
    }

    /// Selected values that no item in `catalog` carries, in selection order.
    pub fn stale_values(&self, catalog: &ItemCatalog) -> Vec<String> {
        self.inner
            .values
            .read()
            .iter()
            .filter(|value| !catalog.contains(value))
            .cloned()
            .collect()
    }

    /// Returns `true` if both handles share the same collection.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Signal emitted after every in-place edit.
    pub fn edited(&self) -> &Signal<SelectionEdit> {
        &self.inner.edited
    }
}

impl fmt::Debug for SelectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.values.read().iter()).finish()
    }
}

static_assertions::assert_impl_all!(SelectionSet: Send, Sync);
