//! Input events delivered to a mounted checklist.

use super::surface::NodeId;

/// The part of a row an input event originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// The checkbox control. The only kind the checklist reacts to.
    Checkbox,
    /// The text label next to the checkbox.
    Label,
    /// The row wrapper itself.
    Row,
}

/// A user interaction targeting one rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    /// The row the event targets.
    pub target: NodeId,
    /// Which part of the row produced the event.
    pub control: ControlKind,
    /// The control's checked state after the interaction.
    pub checked: bool,
}

impl InputEvent {
    /// A checkbox toggled to `checked`.
    pub fn checkbox(target: NodeId, checked: bool) -> Self {
        Self {
            target,
            control: ControlKind::Checkbox,
            checked,
        }
    }

    /// A click on the row's label.
    pub fn label(target: NodeId) -> Self {
        Self {
            target,
            control: ControlKind::Label,
            checked: false,
        }
    }

    /// Returns `true` if the event came from a checkbox.
    pub fn is_checkbox(&self) -> bool {
        self.control == ControlKind::Checkbox
    }
}
