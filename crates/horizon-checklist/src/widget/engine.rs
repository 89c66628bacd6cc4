//! The reconciliation engine behind [`CheckList`].
//!
//! A mounted checklist registers exactly three listeners:
//!
//! - a watcher on the `available` binding, which rebuilds the rows when the
//!   catalog changes,
//! - a watcher on the `selected` binding, which re-marks the rows when the
//!   selection changes,
//! - an input listener on the container, which turns checkbox toggles into
//!   in-place edits of the bound selection.
//!
//! Everything runs synchronously inside the notification that triggered it.
//! The engine's state lock is never held while the selection is edited or
//! while outcome signals are emitted, so host slots may freely call back
//! into the list or rebind either binding.

use std::collections::HashSet;
use std::sync::{Arc, Weak};

use horizon_checklist_core::{Binding, Change, ConnectionGuard, Signal};
use parking_lot::Mutex;

use crate::config::{ChangeDetection, CheckListConfig};
use crate::error::{CheckListError, Result};
use crate::logging::{targets, SurfaceDebug, TreeFormatOptions};
use crate::model::{ItemCatalog, SelectionSet};

use super::container::Container;
use super::events::InputEvent;
use super::renderer::ListRenderer;
use super::surface::{RenderSurface, RowView};

/// What a binding notification did to the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconcile {
    /// The rows were torn down and rebuilt from the new catalog.
    CatalogRebuilt { rows: usize },
    /// The new catalog is empty; the rows were torn down.
    CatalogCleared,
    /// The catalog was rebound without a detected change; rows untouched.
    CatalogSkipped,
    /// Every row's check mark was recomputed.
    SelectionRemarked { checked: usize },
    /// The selection was rebound without a detected change; marks untouched.
    SelectionSkipped,
}

/// What a user input did to the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    /// Not a checkbox event, or its row no longer exists.
    Ignored,
    /// The row's value was appended to the selection at `index`.
    Appended { value: String, index: usize },
    /// The row at `row` was unchecked and its value removed from `index`.
    Removed {
        value: String,
        row: usize,
        index: usize,
    },
    /// The row at `row` was unchecked but its value was not selected.
    Missing { value: String, row: usize },
}

/// A selection edit decided under the state lock, applied after releasing it.
enum PendingEdit {
    None,
    Append {
        selection: SelectionSet,
        value: String,
    },
    Remove {
        selection: SelectionSet,
        value: String,
        row: usize,
    },
}

struct EngineState {
    surface: RenderSurface,
    renderer: ListRenderer,
    selection: SelectionSet,
    change_detection: ChangeDetection,
}

impl EngineState {
    fn new(selection: SelectionSet, config: &CheckListConfig) -> Self {
        Self {
            surface: RenderSurface::new(),
            renderer: ListRenderer::new(config.id_prefix.clone()),
            selection,
            change_detection: config.change_detection,
        }
    }

    #[tracing::instrument(skip_all, target = "horizon_checklist::engine", level = "debug")]
    fn on_catalog_change(
        &mut self,
        current: &ItemCatalog,
        previous: Option<&ItemCatalog>,
    ) -> Reconcile {
        if current.is_empty() {
            let removed = self.renderer.teardown(&mut self.surface);
            tracing::debug!(target: targets::ENGINE, removed, "catalog empty, rows cleared");
            return Reconcile::CatalogCleared;
        }

        if let Some(previous) = previous {
            if !self.change_detection.catalog_changed(current, previous) {
                tracing::debug!(
                    target: targets::ENGINE,
                    rows = self.surface.len(),
                    "catalog rebound without a detected change, rebuild skipped"
                );
                return Reconcile::CatalogSkipped;
            }
        }

        self.renderer.teardown(&mut self.surface);
        let selection = &self.selection;
        let rows = selection.with(|values| {
            let selected: HashSet<&str> = values.iter().map(String::as_str).collect();
            self.renderer
                .render_all(&mut self.surface, current, |value| selected.contains(value))
        });
        tracing::debug!(target: targets::ENGINE, rows, "rows rebuilt");
        Reconcile::CatalogRebuilt { rows }
    }

    #[tracing::instrument(skip_all, target = "horizon_checklist::engine", level = "debug")]
    fn on_selection_change(
        &mut self,
        current: &SelectionSet,
        previous: Option<&SelectionSet>,
    ) -> Reconcile {
        self.selection = current.clone();

        if let Some(previous) = previous {
            if !self.change_detection.selection_changed(current, previous) {
                tracing::debug!(
                    target: targets::ENGINE,
                    "selection rebound without a detected change, marks untouched"
                );
                return Reconcile::SelectionSkipped;
            }
        }

        let checked = self.remark();
        tracing::debug!(target: targets::ENGINE, checked, "check marks updated");
        Reconcile::SelectionRemarked { checked }
    }

    /// Sets every row's check mark from the bound selection.
    fn remark(&mut self) -> usize {
        let surface = &mut self.surface;
        self.selection.with(|values| {
            let selected: HashSet<&str> = values.iter().map(String::as_str).collect();
            let mut checked = 0;
            for node in surface.nodes_mut() {
                let is_selected = selected.contains(node.value());
                node.set_checked(is_selected);
                checked += usize::from(is_selected);
            }
            checked
        })
    }

    #[tracing::instrument(skip_all, target = "horizon_checklist::engine", level = "debug")]
    fn on_user_toggle(&mut self, event: &InputEvent) -> PendingEdit {
        if !event.is_checkbox() {
            tracing::trace!(target: targets::ENGINE, control = ?event.control, "non-checkbox input ignored");
            return PendingEdit::None;
        }

        let Some((row, node)) = self.surface.locate_mut(event.target) else {
            tracing::trace!(target: targets::ENGINE, target_id = ?event.target, "input for a row that no longer exists ignored");
            return PendingEdit::None;
        };
        node.set_checked(event.checked);
        let value = node.value().to_string();

        if event.checked {
            PendingEdit::Append {
                selection: self.selection.clone(),
                value,
            }
        } else {
            PendingEdit::Remove {
                selection: self.selection.clone(),
                value,
                row,
            }
        }
    }
}

struct Shared {
    state: Mutex<EngineState>,
    reconciled: Signal<Reconcile>,
    toggled: Signal<Toggle>,
}

impl Shared {
    fn catalog_changed(&self, change: &Change<ItemCatalog>) {
        let outcome = self
            .state
            .lock()
            .on_catalog_change(&change.current, change.previous.as_ref());
        self.reconciled.emit(outcome);
    }

    fn selection_changed(&self, change: &Change<SelectionSet>) {
        let outcome = self
            .state
            .lock()
            .on_selection_change(&change.current, change.previous.as_ref());
        self.reconciled.emit(outcome);
    }

    fn input(&self, event: &InputEvent) {
        let pending = self.state.lock().on_user_toggle(event);
        let outcome = match pending {
            PendingEdit::None => Toggle::Ignored,
            PendingEdit::Append { selection, value } => {
                let index = selection.push(value.clone());
                Toggle::Appended { value, index }
            }
            PendingEdit::Remove {
                selection,
                value,
                row,
            } => match selection.remove_value(&value) {
                Some(index) => Toggle::Removed { value, row, index },
                None => Toggle::Missing { value, row },
            },
        };
        tracing::debug!(target: targets::ENGINE, ?outcome, "input handled");
        self.toggled.emit(outcome);
    }
}

/// A checkbox list mounted in a [`Container`], kept in sync with a bound
/// catalog and a bound selection.
///
/// # Example
///
/// ```
/// use horizon_checklist::prelude::*;
///
/// let available = Binding::new(ItemCatalog::new([("a", "A"), ("b", "B")]).unwrap());
/// let selected = Binding::new(SelectionSet::new(["b"]));
/// let container = Container::new("regions");
///
/// let list = CheckList::mount(container.clone(), &available, &selected, CheckListConfig::default())
///     .unwrap();
///
/// let rows = list.rows();
/// assert!(!rows[0].checked);
/// assert!(rows[1].checked);
///
/// container.dispatch(InputEvent::checkbox(rows[0].id, true));
/// assert_eq!(selected.get().values(), vec!["b", "a"]);
///
/// container.dispatch(InputEvent::checkbox(rows[1].id, false));
/// assert_eq!(selected.get().values(), vec!["a"]);
/// ```
///
/// # Signals
///
/// - [`reconciled`](Self::reconciled): outcome of every binding notification
/// - [`toggled`](Self::toggled): outcome of every input event
///
/// Dropping the list detaches its listeners and frees the container.
pub struct CheckList {
    shared: Arc<Shared>,
    container: Arc<Container>,
    connections: Vec<ConnectionGuard>,
}

impl CheckList {
    /// Mounts a list in `container`.
    ///
    /// The catalog and selection watchers run once immediately, so the rows
    /// are rendered and marked by the time this returns.
    ///
    /// # Errors
    ///
    /// - [`CheckListError::InvalidConfig`] if `config` does not validate
    /// - [`CheckListError::ContainerInUse`] if another list is mounted in
    ///   `container`
    pub fn mount(
        container: Arc<Container>,
        available: &Binding<ItemCatalog>,
        selected: &Binding<SelectionSet>,
        config: CheckListConfig,
    ) -> Result<Self> {
        config.validate()?;
        if !container.claim() {
            return Err(CheckListError::ContainerInUse {
                container: container.name().to_string(),
            });
        }

        let shared = Arc::new(Shared {
            state: Mutex::new(EngineState::new(selected.get(), &config)),
            reconciled: Signal::new(),
            toggled: Signal::new(),
        });

        let weak = Arc::downgrade(&shared);
        let catalog_watch = available.watch_scoped(move |change| {
            with_shared(&weak, |shared| shared.catalog_changed(change));
        });
        let weak = Arc::downgrade(&shared);
        let selection_watch = selected.watch_scoped(move |change| {
            with_shared(&weak, |shared| shared.selection_changed(change));
        });
        let weak = Arc::downgrade(&shared);
        let input_listener = container.listen(move |event| {
            with_shared(&weak, |shared| shared.input(event));
        });

        tracing::debug!(
            target: targets::ENGINE,
            container = container.name(),
            ?config,
            "checklist mounted"
        );

        Ok(Self {
            shared,
            container,
            connections: vec![catalog_watch, selection_watch, input_listener],
        })
    }

    /// Snapshot of the rendered rows in display order.
    pub fn rows(&self) -> Vec<RowView> {
        self.shared.state.lock().surface.rows()
    }

    /// Number of rendered rows.
    pub fn len(&self) -> usize {
        self.shared.state.lock().surface.len()
    }

    /// Returns `true` if no rows are rendered.
    pub fn is_empty(&self) -> bool {
        self.shared.state.lock().surface.is_empty()
    }

    /// Values of the checked rows in display order.
    pub fn checked_values(&self) -> Vec<String> {
        self.shared.state.lock().surface.checked_values()
    }

    /// The selection that input events currently edit.
    pub fn selection(&self) -> SelectionSet {
        self.shared.state.lock().selection.clone()
    }

    /// The container this list is mounted in.
    pub fn container(&self) -> &Arc<Container> {
        &self.container
    }

    /// Human-readable dump of the rows.
    pub fn debug_tree(&self) -> String {
        self.debug_tree_with(TreeFormatOptions::default())
    }

    /// Human-readable dump of the rows with custom formatting.
    pub fn debug_tree_with(&self, options: TreeFormatOptions) -> String {
        let state = self.shared.state.lock();
        SurfaceDebug::with_options(options).format(self.container.name(), &state.surface)
    }

    /// Signal emitted after every catalog or selection notification.
    pub fn reconciled(&self) -> &Signal<Reconcile> {
        &self.shared.reconciled
    }

    /// Signal emitted after every input event.
    pub fn toggled(&self) -> &Signal<Toggle> {
        &self.shared.toggled
    }
}

impl Drop for CheckList {
    fn drop(&mut self) {
        self.connections.clear();
        self.container.release();
        tracing::debug!(target: targets::ENGINE, container = self.container.name(), "checklist unmounted");
    }
}

impl std::fmt::Debug for CheckList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckList")
            .field("container", &self.container.name())
            .field("rows", &self.len())
            .finish()
    }
}

fn with_shared(weak: &Weak<Shared>, f: impl FnOnce(&Shared)) {
    if let Some(shared) = weak.upgrade() {
        f(&shared);
    }
}

static_assertions::assert_impl_all!(CheckList: Send, Sync);
