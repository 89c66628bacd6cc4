//! Logging and debugging facilities for the checklist widget.
//!
//! This module provides:
//! - Target names for filtering the crate's `tracing` output
//! - [`SurfaceDebug`], a text dump of the rendered rows
//!
//! # Tracing Integration
//!
//! Reconciliation decisions are logged at `debug`, row materialization and
//! ignored input at `trace`:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_checklist::engine=debug")
//!     .init();
//! ```
//!
//! # Debug Visualization
//!
//! ```ignore
//! println!("{}", list.debug_tree());
//! // regions (2 rows)
//! // ├── [ ] A (a) #checklist-item-1
//! // └── [x] B (b) #checklist-item-2
//! ```

use std::fmt::Write as FmtWrite;

use crate::widget::{RenderNode, RenderSurface};

/// Target names for log filtering.
pub mod targets {
    /// Reconciliation engine target.
    pub const ENGINE: &str = "horizon_checklist::engine";
    /// Row materialization target.
    pub const RENDERER: &str = "horizon_checklist::renderer";
    /// Selection edit target.
    pub const SELECTION: &str = "horizon_checklist::selection";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_checklist::config";
}

/// Style options for the row dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact single-line representation.
    Compact,
}

/// Configuration for [`SurfaceDebug`] output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show each row's value next to its label.
    pub show_values: bool,
    /// Whether to show each row's element id.
    pub show_element_ids: bool,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_values: true,
            show_element_ids: true,
        }
    }
}

impl TreeFormatOptions {
    /// Labels and check marks only.
    pub fn minimal() -> Self {
        Self {
            show_values: false,
            show_element_ids: false,
            ..Default::default()
        }
    }
}

/// Debug utility for visualizing a render surface.
#[derive(Debug, Clone, Default)]
pub struct SurfaceDebug {
    options: TreeFormatOptions,
}

impl SurfaceDebug {
    /// Create a visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a visualizer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format `surface` under a header naming its container.
    pub fn format(&self, container: &str, surface: &RenderSurface) -> String {
        let mut output = String::new();

        if self.options.style == TreeStyle::Compact {
            let rows: Vec<String> = surface.iter().map(|node| self.format_row(node)).collect();
            let _ = writeln!(output, "{container}: {}", rows.join(", "));
            return output;
        }

        let rows = surface.len();
        let _ = writeln!(
            output,
            "{container} ({rows} {})",
            if rows == 1 { "row" } else { "rows" }
        );
        if rows == 0 {
            output.push_str("  (empty)\n");
            return output;
        }

        let (corner, last) = match self.options.style {
            TreeStyle::Ascii => ("+--", "`--"),
            _ => ("\u{251c}\u{2500}\u{2500}", "\u{2514}\u{2500}\u{2500}"),
        };
        for (index, node) in surface.iter().enumerate() {
            let connector = if index + 1 == rows { last } else { corner };
            let _ = writeln!(output, "{connector} {}", self.format_row(node));
        }
        output
    }

    fn format_row(&self, node: &RenderNode) -> String {
        let mut row = format!(
            "[{}] {}",
            if node.is_checked() { 'x' } else { ' ' },
            node.label()
        );
        if self.options.show_values {
            let _ = write!(row, " ({})", node.value());
        }
        if self.options.show_element_ids {
            let _ = write!(row, " #{}", node.element_id());
        }
        row
    }
}
