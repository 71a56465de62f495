//! Pointer-action categories.

/// The category of a pointer interaction. Each action carries one
/// "recent activity" flag in [`crate::Mouse`], consumed by hit tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseAction {
    Press = 0,
    Release = 1,
    Click = 2,
    Move = 3,
    Drag = 4,
    Enter = 5,
    Exit = 6,
    WheelScroll = 7,
}

impl MouseAction {
    pub const COUNT: usize = 8;

    pub const ALL: [MouseAction; MouseAction::COUNT] = [
        MouseAction::Press,
        MouseAction::Release,
        MouseAction::Click,
        MouseAction::Move,
        MouseAction::Drag,
        MouseAction::Enter,
        MouseAction::Exit,
        MouseAction::WheelScroll,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}
