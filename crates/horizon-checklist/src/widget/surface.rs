//! The render surface: an ordered arena of rendered rows.

use slotmap::{new_key_type, SlotMap};

use crate::model::Item;

new_key_type! {
    /// Stable, opaque identifier of one rendered row.
    ///
    /// Ids are generated when a row is created and are independent of the
    /// row's value. Once a row is torn down its id never resolves again,
    /// even if a new row takes its slot.
    pub struct NodeId;
}

/// One rendered row: a checkbox tagged with the item's value, a label
/// showing its display text, wrapped in a row carrying a stable id.
#[derive(Debug, Clone)]
pub struct RenderNode {
    id: NodeId,
    element_id: String,
    item: Item,
    checked: bool,
}

impl RenderNode {
    pub(crate) fn new(id: NodeId, element_id: String, item: Item, checked: bool) -> Self {
        Self {
            id,
            element_id,
            item,
            checked,
        }
    }

    /// The row's stable id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The row's element id (`<prefix>-<serial>`).
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// The item this row was rendered from.
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// The value the checkbox is tagged with.
    pub fn value(&self) -> &str {
        self.item.value()
    }

    /// The label text.
    pub fn label(&self) -> &str {
        self.item.display_text()
    }

    /// Whether the checkbox is checked.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub(crate) fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }
}

/// A read-only snapshot of one row, handed out to hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: NodeId,
    pub element_id: String,
    pub value: String,
    pub label: String,
    pub checked: bool,
}

impl From<&RenderNode> for RowView {
    fn from(node: &RenderNode) -> Self {
        Self {
            id: node.id,
            element_id: node.element_id.clone(),
            value: node.value().to_string(),
            label: node.label().to_string(),
            checked: node.checked,
        }
    }
}

/// Rows owned by one checklist, in display order.
#[derive(Debug, Default)]
pub struct RenderSurface {
    nodes: SlotMap<NodeId, RenderNode>,
    order: Vec<NodeId>,
}

impl RenderSurface {
    /// Creates an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no rows are rendered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Appends a row built by `build`, which receives the row's new id.
    pub(crate) fn append_with<F>(&mut self, build: F) -> NodeId
    where
        F: FnOnce(NodeId) -> RenderNode,
    {
        let id = self.nodes.insert_with_key(build);
        self.order.push(id);
        id
    }

    /// Removes every row, returning how many there were. Safe on an empty
    /// surface.
    pub(crate) fn clear(&mut self) -> usize {
        let removed = self.order.len();
        self.nodes.clear();
        self.order.clear();
        removed
    }

    /// The row with `id`, if it is still rendered.
    pub fn get(&self, id: NodeId) -> Option<&RenderNode> {
        self.nodes.get(id)
    }

    /// The display position and row with `id`, found by scanning the rows
    /// in order.
    pub(crate) fn locate_mut(&mut self, id: NodeId) -> Option<(usize, &mut RenderNode)> {
        let row = self.position(id)?;
        self.nodes.get_mut(id).map(|node| (row, node))
    }

    /// Display position of the row with `id`, found by scanning the rows in
    /// order.
    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.order.iter().position(|&candidate| candidate == id)
    }

    /// The row at display position `index`.
    pub fn node_at(&self, index: usize) -> Option<&RenderNode> {
        self.order.get(index).and_then(|&id| self.nodes.get(id))
    }

    /// Rows in display order.
    pub fn iter(&self) -> impl Iterator<Item = &RenderNode> {
        self.order.iter().filter_map(|&id| self.nodes.get(id))
    }

    /// Mutable rows, in arena order.
    pub(crate) fn nodes_mut(&mut self) -> impl Iterator<Item = &mut RenderNode> {
        self.nodes.values_mut()
    }

    /// Row ids in display order.
    pub fn ids(&self) -> &[NodeId] {
        &self.order
    }

    /// Snapshot of every row in display order.
    pub fn rows(&self) -> Vec<RowView> {
        self.iter().map(RowView::from).collect()
    }

    /// Values of the checked rows in display order.
    pub fn checked_values(&self) -> Vec<String> {
        self.iter()
            .filter(|node| node.is_checked())
            .map(|node| node.value().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface_with(values: &[&str]) -> RenderSurface {
        let mut surface = RenderSurface::new();
        for (n, value) in values.iter().enumerate() {
            surface.append_with(|id| RenderNode::new(id, format!("row-{n}"), Item::bare(*value), false));
        }
        surface
    }

    #[test]
    fn test_rows_keep_insertion_order() {
        let surface = surface_with(&["c", "a", "b"]);
        let values: Vec<_> = surface.iter().map(RenderNode::value).collect();
        assert_eq!(values, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_position_is_display_ordinal() {
        let surface = surface_with(&["x", "y", "z"]);
        let third = surface.ids()[2];
        assert_eq!(surface.position(third), Some(2));
        assert_eq!(surface.node_at(2).map(RenderNode::value), Some("z"));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut surface = surface_with(&["a", "b"]);
        assert_eq!(surface.clear(), 2);
        assert_eq!(surface.clear(), 0);
        assert!(surface.is_empty());
    }

    #[test]
    fn test_ids_do_not_survive_clear() {
        let mut surface = surface_with(&["a"]);
        let old = surface.ids()[0];
        surface.clear();
        let fresh = surface.append_with(|id| RenderNode::new(id, "row-0".into(), Item::bare("b"), false));

        assert_ne!(old, fresh);
        assert!(surface.get(old).is_none());
        assert_eq!(surface.position(old), None);
    }

    #[test]
    fn test_locate_mut_reports_ordinal() {
        let mut surface = surface_with(&["x", "y", "z"]);
        let second = surface.ids()[1];

        let (row, node) = surface.locate_mut(second).unwrap();
        assert_eq!((row, node.value()), (1, "y"));

        surface.clear();
        assert!(surface.locate_mut(second).is_none());
    }

    #[test]
    fn test_checked_values() {
        let mut surface = surface_with(&["a", "b", "c"]);
        let b = surface.ids()[1];
        surface.locate_mut(b).unwrap().1.set_checked(true);
        assert_eq!(surface.checked_values(), vec!["b"]);
        assert!(surface.rows()[1].checked);
    }
}
