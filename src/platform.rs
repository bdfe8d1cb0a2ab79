use raylib::core::window::get_monitor_count;
use raylib::prelude::*;
use crate::chrome::{FullscreenCapability, FullscreenMode};
use crate::input::Key;
use crate::presenter::InputEvent;

const WATCHED_KEYS: [(KeyboardKey, Key); 10] = [
    (KeyboardKey::KEY_RIGHT, Key::Right),
    (KeyboardKey::KEY_SPACE, Key::Space),
    (KeyboardKey::KEY_LEFT, Key::Left),
    (KeyboardKey::KEY_HOME, Key::Home),
    (KeyboardKey::KEY_END, Key::End),
    (KeyboardKey::KEY_ESCAPE, Key::Escape),
    (KeyboardKey::KEY_Q, Key::Q),
    (KeyboardKey::KEY_Y, Key::Y),
    (KeyboardKey::KEY_N, Key::N),
    (KeyboardKey::KEY_ENTER, Key::Enter),
];

/// Collects this frame's input as backend-independent events.
pub fn poll_events(rl: &RaylibHandle) -> Vec<InputEvent> {
    let mut events: Vec<InputEvent> = WATCHED_KEYS
        .iter()
        .filter(|(raylib_key, _)| rl.is_key_pressed(*raylib_key))
        .map(|(_, key)| InputEvent::Key(*key))
        .collect();

    // raylib resets the close flag every frame, so a window-manager close
    // can be turned into a guarded leave request
    if rl.window_should_close() {
        events.push(InputEvent::CloseRequested);
    }

    // Touch input is reported through the mouse on every raylib platform
    let pos = rl.get_mouse_position();
    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        events.push(InputEvent::PointerDown { x: pos.x, y: pos.y });
    }
    if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
        events.push(InputEvent::PointerUp { x: pos.x, y: pos.y });
    }

    events
}

/// Fullscreen capability backed by the raylib window.
pub struct RaylibWindow<'a> {
    rl: &'a mut RaylibHandle,
}

impl<'a> RaylibWindow<'a> {
    pub fn new(rl: &'a mut RaylibHandle) -> Self {
        Self { rl }
    }

    fn is_borderless(&self) -> bool {
        unsafe { raylib::ffi::IsWindowState(raylib::ffi::ConfigFlags::FLAG_BORDERLESS_WINDOWED_MODE as u32) }
    }
}

impl FullscreenCapability for RaylibWindow<'_> {
    fn supports_fullscreen(&self, mode: FullscreenMode) -> bool {
        let monitors = get_monitor_count();
        match mode {
            FullscreenMode::Exclusive => monitors > 0 && !cfg!(target_os = "macos"),
            FullscreenMode::Borderless => monitors > 0,
        }
    }

    fn active_fullscreen(&self) -> Option<FullscreenMode> {
        if self.rl.is_window_fullscreen() {
            Some(FullscreenMode::Exclusive)
        } else if self.is_borderless() {
            Some(FullscreenMode::Borderless)
        } else {
            None
        }
    }

    fn request_fullscreen(&mut self, mode: FullscreenMode) {
        match mode {
            FullscreenMode::Exclusive => self.rl.toggle_fullscreen(),
            FullscreenMode::Borderless => self.rl.toggle_borderless_windowed(),
        }
    }

    fn exit_fullscreen(&mut self, mode: FullscreenMode) {
        // Both raylib calls are toggles
        if self.active_fullscreen() == Some(mode) {
            self.request_fullscreen(mode);
        }
    }
}
