//! Rebindable shared references with change notification.
//!
//! A [`Binding<T>`] is the slot through which a host hands a value to a
//! widget and later replaces it. Each replacement emits a [`Change`] carrying
//! the new value and the one it replaced, so an observer can compare the two
//! snapshots without keeping its own copy.
//!
//! Bindings have reference semantics: cloning a `Binding` yields another
//! handle to the same slot, and a rebind through either handle is seen by
//! every watcher.
//!
//! # Example
//!
//! ```
//! use horizon_checklist_core::Binding;
//!
//! let available = Binding::new(vec!["a", "b"]);
//!
//! available.watch(|change| match &change.previous {
//!     None => println!("attached to {:?}", change.current),
//!     Some(previous) => println!("{:?} -> {:?}", previous, change.current),
//! });
//!
//! available.rebind(vec!["a", "b", "c"]);
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::logging::targets;
use crate::signal::{ConnectionGuard, ConnectionId, Signal};

/// A change notification delivered by a [`Binding`].
///
/// `previous` is `None` exactly once per watcher: on the initial call made
/// when the watcher attaches.
#[derive(Debug, Clone, PartialEq)]
pub struct Change<T> {
    /// The value now held by the binding.
    pub current: T,
    /// The value held immediately before, or `None` on first attach.
    pub previous: Option<T>,
}

impl<T> Change<T> {
    /// Returns `true` if this is the initial notification of a new watcher.
    pub fn is_initial(&self) -> bool {
        self.previous.is_none()
    }
}

struct BindingInner<T> {
    value: RwLock<T>,
    changed: Signal<Change<T>>,
}

/// A shared, rebindable reference to a host-owned value.
///
/// # Thread Safety
///
/// `Binding<T>` uses `parking_lot::RwLock` internally and is `Send + Sync`
/// when `T` is. Notifications are delivered synchronously on the thread that
/// calls [`rebind`](Self::rebind).
pub struct Binding<T> {
    inner: Arc<BindingInner<T>>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Binding<T> {
    /// Create a binding holding an initial value.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(BindingInner {
                value: RwLock::new(value),
                changed: Signal::new(),
            }),
        }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.inner.value.read().clone()
    }

    /// Access the current value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.inner.value.read())
    }

    /// Replace the bound value and notify every watcher.
    ///
    /// Watchers always run, even when the new value equals the old one:
    /// rebinding is an identity change, and deciding whether it matters is
    /// the watcher's business. Returns the replaced value.
    pub fn rebind(&self, value: T) -> T {
        let previous = std::mem::replace(&mut *self.inner.value.write(), value.clone());
        tracing::trace!(
            target: targets::BINDING,
            watchers = self.inner.changed.connection_count(),
            "binding rebound"
        );
        self.inner.changed.emit(Change {
            current: value,
            previous: Some(previous.clone()),
        });
        previous
    }

    /// Replace the bound value without notifying watchers.
    pub fn set_silent(&self, value: T) {
        *self.inner.value.write() = value;
    }

    /// Attach a watcher.
    ///
    /// The watcher is called once immediately with `previous: None`, then on
    /// every subsequent [`rebind`](Self::rebind).
    pub fn watch<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Change<T>) + Send + Sync + 'static,
    {
        let slot = Arc::new(slot);
        let connected = Arc::clone(&slot);
        let id = self.inner.changed.connect(move |change| connected(change));
        slot(&Change {
            current: self.get(),
            previous: None,
        });
        id
    }

    /// Attach a watcher that is detached when the returned guard drops.
    pub fn watch_scoped<F>(&self, slot: F) -> ConnectionGuard
    where
        F: Fn(&Change<T>) + Send + Sync + 'static,
    {
        let id = self.watch(slot);
        let binding = self.clone();
        ConnectionGuard::new(move || {
            binding.unwatch(id);
        })
    }

    /// Detach a watcher. Returns `false` if it was not attached.
    pub fn unwatch(&self, id: ConnectionId) -> bool {
        self.inner.changed.disconnect(id)
    }

    /// Number of attached watchers.
    pub fn watcher_count(&self) -> usize {
        self.inner.changed.connection_count()
    }

    /// Returns `true` if both handles refer to the same binding slot.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone + fmt::Debug + Send + Sync + 'static> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("value", &*self.inner.value.read())
            .field("watchers", &self.watcher_count())
            .finish()
    }
}

static_assertions::assert_impl_all!(Binding<Vec<String>>: Send, Sync);
