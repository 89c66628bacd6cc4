//! Core systems for Horizon Checklist.
//!
//! This crate provides the observation primitives the checklist widget is
//! built on:
//!
//! - **Signal/Slot System**: Type-safe, synchronous notification ([`Signal`])
//! - **Bindings**: Host-owned values that can be rebound, delivering both the
//!   new and the previous value to watchers ([`Binding`], [`Change`])
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_checklist_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Binding Example
//!
//! ```
//! use horizon_checklist_core::Binding;
//!
//! let selected = Binding::new(vec!["b".to_string()]);
//! selected.watch(|change| {
//!     let before = change.previous.as_ref().map(Vec::len);
//!     println!("{:?} -> {}", before, change.current.len());
//! });
//! selected.rebind(vec!["a".to_string(), "b".to_string()]);
//! ```

pub mod binding;
pub mod logging;
pub mod signal;

pub use binding::{Binding, Change};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
