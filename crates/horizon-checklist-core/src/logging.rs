//! Logging targets for Horizon Checklist core.
//!
//! Horizon Checklist uses the `tracing` crate for instrumentation. To see
//! logs, install a subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_checklist_core=trace,horizon_checklist=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_checklist_core::signal";
    /// Binding system target.
    pub const BINDING: &str = "horizon_checklist_core::binding";
}
