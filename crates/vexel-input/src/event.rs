//! Pointer events and the handler trait they are dispatched to.

use vexel_core::Pointf;

use crate::action::MouseAction;

/// A discrete pointer event delivered by the host input source.
///
/// Positions are raw pixel coordinates; [`crate::Mouse`] converts them to
/// logical coordinates using the display's resolution scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseEvent {
    Pressed { button: u32 },
    Released { button: u32 },
    Clicked { button: u32 },
    Moved { position: Pointf },
    Dragged { position: Pointf },
    Entered,
    Exited,
    WheelScrolled { direction: i32 },
}

impl MouseEvent {
    /// The action category this event falls under.
    pub fn action(&self) -> MouseAction {
        match self {
            MouseEvent::Pressed { .. } => MouseAction::Press,
            MouseEvent::Released { .. } => MouseAction::Release,
            MouseEvent::Clicked { .. } => MouseAction::Click,
            MouseEvent::Moved { .. } => MouseAction::Move,
            MouseEvent::Dragged { .. } => MouseAction::Drag,
            MouseEvent::Entered => MouseAction::Enter,
            MouseEvent::Exited => MouseAction::Exit,
            MouseEvent::WheelScrolled { .. } => MouseAction::WheelScroll,
        }
    }
}

/// Receiver for pointer events, called after the debounce bookkeeping for
/// each event has run. All methods default to no-ops so implementations
/// only override what they care about.
pub trait MouseEventHandler {
    fn mouse_pressed(&mut self, _event: &MouseEvent) {}
    fn mouse_released(&mut self, _event: &MouseEvent) {}
    fn mouse_clicked(&mut self, _event: &MouseEvent) {}
    fn mouse_moved(&mut self, _event: &MouseEvent) {}
    fn mouse_dragged(&mut self, _event: &MouseEvent) {}
    fn mouse_entered(&mut self, _event: &MouseEvent) {}
    fn mouse_exited(&mut self, _event: &MouseEvent) {}
    fn mouse_wheel_scrolled(&mut self, _event: &MouseEvent) {}
}
