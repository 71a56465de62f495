//! Debounced pointer-state tracking.
//!
//! [`Mouse`] owns one atomic "recent activity" flag per [`MouseAction`]
//! plus scalar trackers for the last button pressed/released/clicked, the
//! last scroll direction, the on-screen flag and the pointer location.
//! Events arrive from the host input thread while flag resets run on a
//! small timer pool, so all shared state is atomics or behind locks;
//! individual flag updates are last-writer-wins by design.

use std::collections::HashMap;
use std::io;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Runtime;

use vexel_core::{Display, Pointf};
use vexel_graphics::geometry::path_contains;
use vexel_graphics::Polygon;

use crate::action::MouseAction;
use crate::event::{MouseEvent, MouseEventHandler};

/// How long an action stays "recent" after its triggering event.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(50);

const NO_BUTTON: i64 = -1;

/// Tracks pointer state and the per-action debounce windows.
pub struct Mouse {
    recent: Arc<[AtomicBool; MouseAction::COUNT]>,
    buttons: Mutex<HashMap<u32, bool>>,
    button_last_pressed: AtomicI64,
    button_last_released: AtomicI64,
    button_last_clicked: AtomicI64,
    last_scroll_direction: AtomicI32,
    on_screen: AtomicBool,
    location: Mutex<Pointf>,
    window: Duration,
    timers: Mutex<Option<Runtime>>,
}

impl Mouse {
    /// Creates a mouse with the standard debounce window and a reset-timer
    /// pool sized to available hardware concurrency.
    pub fn new() -> io::Result<Self> {
        Self::with_debounce_window(DEBOUNCE_WINDOW)
    }

    pub fn with_debounce_window(window: Duration) -> io::Result<Self> {
        let workers = std::thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(workers)
            .enable_time()
            .thread_name("mouse-debounce")
            .build()?;

        Ok(Self {
            recent: Arc::new(std::array::from_fn(|_| AtomicBool::new(false))),
            buttons: Mutex::new(HashMap::new()),
            button_last_pressed: AtomicI64::new(NO_BUTTON),
            button_last_released: AtomicI64::new(NO_BUTTON),
            button_last_clicked: AtomicI64::new(NO_BUTTON),
            last_scroll_direction: AtomicI32::new(0),
            on_screen: AtomicBool::new(false),
            location: Mutex::new(Pointf::ORIGIN),
            window,
            timers: Mutex::new(Some(runtime)),
        })
    }

    /// Processes one pointer event: updates the action's debounce flag and
    /// the scalar trackers, then dispatches the event to `handler`.
    pub fn process_event(
        &self,
        display: &dyn Display,
        handler: &mut dyn MouseEventHandler,
        event: MouseEvent,
    ) {
        match event {
            MouseEvent::Pressed { button } => {
                self.mark_recent(MouseAction::Press);
                self.buttons.lock().insert(button, true);
                self.button_last_pressed
                    .store(button as i64, Ordering::Relaxed);
                handler.mouse_pressed(&event);
            }
            MouseEvent::Released { button } => {
                self.mark_recent(MouseAction::Release);
                if let Some(pressed) = self.buttons.lock().get_mut(&button) {
                    *pressed = false;
                }
                self.button_last_released
                    .store(button as i64, Ordering::Relaxed);
                handler.mouse_released(&event);
            }
            MouseEvent::Clicked { button } => {
                self.mark_recent(MouseAction::Click);
                self.button_last_clicked
                    .store(button as i64, Ordering::Relaxed);
                handler.mouse_clicked(&event);
            }
            MouseEvent::Moved { position } => {
                self.mark_recent(MouseAction::Move);
                *self.location.lock() = position / display.resolution_scale();
                handler.mouse_moved(&event);
            }
            MouseEvent::Dragged { position } => {
                self.mark_recent(MouseAction::Drag);
                *self.location.lock() = position / display.resolution_scale();
                handler.mouse_dragged(&event);
            }
            MouseEvent::Entered => {
                self.mark_recent_screen_change(MouseAction::Enter);
                self.on_screen.store(true, Ordering::Relaxed);
                handler.mouse_entered(&event);
            }
            MouseEvent::Exited => {
                self.mark_recent_screen_change(MouseAction::Exit);
                self.on_screen.store(false, Ordering::Relaxed);
                handler.mouse_exited(&event);
            }
            MouseEvent::WheelScrolled { direction } => {
                self.mark_recent(MouseAction::WheelScroll);
                self.last_scroll_direction
                    .store(direction, Ordering::Relaxed);
                handler.mouse_wheel_scrolled(&event);
            }
        }
    }

    /// Returns whether `action` happened within the debounce window,
    /// consuming it: the flag reads `false` until the next qualifying
    /// event.
    pub fn was_recent(&self, action: MouseAction) -> bool {
        self.recent[action.index()].swap(false, Ordering::Relaxed)
    }

    /// Whether the pointer currently intersects `shape` while `action` is
    /// recent. The action's window is consumed whether or not the pointer
    /// is over the shape.
    pub fn interacts_with(&self, shape: &Polygon, action: MouseAction) -> bool {
        let location = *self.location.lock();
        let over = shape
            .collision_path()
            .map(|path| path_contains(path, location))
            .unwrap_or(false);
        let recent = self.was_recent(action);

        over && recent
    }

    /// The pointer location in logical coordinates.
    pub fn location(&self) -> Pointf {
        *self.location.lock()
    }

    /// Whether the pointer is currently over the display window.
    pub fn is_on_screen(&self) -> bool {
        self.on_screen.load(Ordering::Relaxed)
    }

    /// Whether `button` is currently held down.
    pub fn is_button_pressed(&self, button: u32) -> bool {
        self.buttons.lock().get(&button).copied().unwrap_or(false)
    }

    pub fn button_last_pressed(&self) -> Option<u32> {
        tracked_button(&self.button_last_pressed)
    }

    pub fn button_last_released(&self) -> Option<u32> {
        tracked_button(&self.button_last_released)
    }

    pub fn button_last_clicked(&self) -> Option<u32> {
        tracked_button(&self.button_last_clicked)
    }

    /// The direction of the last wheel scroll; `0` before any scroll.
    pub fn scroll_direction(&self) -> i32 {
        self.last_scroll_direction.load(Ordering::Relaxed)
    }

    /// Forces an immediate end to an action's debounce window.
    pub fn end_process(&self, action: MouseAction) {
        self.recent[action.index()].store(false, Ordering::Relaxed);
    }

    /// Clears every flag and scalar tracker back to its default. The timer
    /// service keeps running.
    pub fn reset(&self) {
        for flag in self.recent.iter() {
            flag.store(false, Ordering::Relaxed);
        }
        self.buttons.lock().clear();
        self.button_last_pressed.store(NO_BUTTON, Ordering::Relaxed);
        self.button_last_released.store(NO_BUTTON, Ordering::Relaxed);
        self.button_last_clicked.store(NO_BUTTON, Ordering::Relaxed);
        self.last_scroll_direction.store(0, Ordering::Relaxed);
        self.on_screen.store(false, Ordering::Relaxed);
        self.location.lock().reset();
    }

    /// Resets all state and stops the timer service, dropping any pending
    /// flag resets. Safe to call more than once.
    pub fn shutdown(&self) {
        self.reset();
        if let Some(runtime) = self.timers.lock().take() {
            tracing::debug!("stopping mouse debounce timers");
            runtime.shutdown_background();
        }
    }

    /// Normal actions arm the reset timer only when the flag is not
    /// already set; the flag itself always ends up set.
    fn mark_recent(&self, action: MouseAction) {
        if !self.recent[action.index()].load(Ordering::Relaxed) {
            self.arm_reset(action);
        }
    }

    /// Enter/exit invert the condition: the window is armed only while the
    /// flag is already set, so an initial enter/exit leaves it untouched.
    fn mark_recent_screen_change(&self, action: MouseAction) {
        if self.recent[action.index()].load(Ordering::Relaxed) {
            self.arm_reset(action);
        }
    }

    fn arm_reset(&self, action: MouseAction) {
        self.recent[action.index()].store(true, Ordering::Relaxed);

        // After shutdown there is no timer service left; the flag simply
        // stays set until read.
        if let Some(runtime) = self.timers.lock().as_ref() {
            let flags = Arc::clone(&self.recent);
            let window = self.window;
            runtime.spawn(async move {
                tokio::time::sleep(window).await;
                flags[action.index()].store(false, Ordering::Relaxed);
            });
        }
    }
}

impl Drop for Mouse {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn tracked_button(tracker: &AtomicI64) -> Option<u32> {
    let raw = tracker.load(Ordering::Relaxed);
    (raw >= 0).then_some(raw as u32)
}
