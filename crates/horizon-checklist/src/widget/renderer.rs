//! Materialization of catalog items into rendered rows.

use crate::logging::targets;
use crate::model::Item;

use super::surface::{NodeId, RenderNode, RenderSurface};

/// Turns items into rows on a [`RenderSurface`].
///
/// Every row gets a fresh arena id and an element id of the form
/// `<prefix>-<serial>`. The serial only ever grows, so element ids are unique
/// for the renderer's whole lifetime, not just within one pass.
#[derive(Debug)]
pub struct ListRenderer {
    id_prefix: String,
    next_serial: u64,
}

impl ListRenderer {
    /// Creates a renderer that names rows `<id_prefix>-1`, `<id_prefix>-2`, ...
    pub fn new(id_prefix: impl Into<String>) -> Self {
        Self {
            id_prefix: id_prefix.into(),
            next_serial: 1,
        }
    }

    /// Appends one row for `item`.
    pub fn render(&mut self, surface: &mut RenderSurface, item: &Item, checked: bool) -> NodeId {
        let element_id = format!("{}-{}", self.id_prefix, self.next_serial);
        self.next_serial += 1;
        let id = surface.append_with(|id| RenderNode::new(id, element_id, item.clone(), checked));
        tracing::trace!(target: targets::RENDERER, value = item.value(), checked, "row rendered");
        id
    }

    /// Appends one row per item, in iteration order, checking the rows whose
    /// value satisfies `is_checked`. Returns the number of rows rendered.
    pub fn render_all<'a, I, F>(&mut self, surface: &mut RenderSurface, items: I, is_checked: F) -> usize
    where
        I: IntoIterator<Item = &'a Item>,
        F: Fn(&str) -> bool,
    {
        let mut rendered = 0;
        for item in items {
            self.render(surface, item, is_checked(item.value()));
            rendered += 1;
        }
        rendered
    }

    /// Removes every row. Calling this on an empty surface does nothing.
    pub fn teardown(&self, surface: &mut RenderSurface) -> usize {
        let removed = surface.clear();
        if removed > 0 {
            tracing::trace!(target: targets::RENDERER, removed, "rows torn down");
        }
        removed
    }
}
