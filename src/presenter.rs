use tracing::info;
use crate::chrome::{Button, Chrome, ChromeLayout, FullscreenCapability, LeaveGuard};
use crate::deck::Deck;
use crate::input::{action_for_key, Gesture, Key, NavAction, PointerTracker};
use crate::navigator::DeckNavigator;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum InputEvent {
    Key(Key),
    PointerDown { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    CloseRequested,
}

/// Owns the navigator and its chrome, and routes input to them.
pub struct Presenter {
    navigator: DeckNavigator<Chrome>,
    pointer: PointerTracker,
    leave_prompt: bool,
    quit: bool,
}

impl Presenter {
    pub fn new(deck: Deck, chrome: Chrome) -> Self {
        Self {
            navigator: DeckNavigator::new(deck, chrome),
            pointer: PointerTracker::default(),
            leave_prompt: false,
            quit: false,
        }
    }

    pub fn navigator(&self) -> &DeckNavigator<Chrome> {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut DeckNavigator<Chrome> {
        &mut self.navigator
    }

    pub fn chrome(&self) -> &Chrome {
        self.navigator.observer()
    }

    pub fn leave_prompt_open(&self) -> bool {
        self.leave_prompt
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle(&mut self, event: InputEvent, layout: &ChromeLayout, cap: &mut dyn FullscreenCapability) {
        if self.leave_prompt {
            self.handle_leave_prompt(event);
            return;
        }

        if self.chrome().help.is_open() {
            // Modal: the dismissing input does nothing else
            match event {
                InputEvent::Key(_) | InputEvent::PointerUp { .. } => {
                    self.pointer = PointerTracker::default();
                    self.navigator.observer_mut().help.close();
                }
                // A window close is never swallowed
                InputEvent::CloseRequested => {
                    self.navigator.observer_mut().help.close();
                    self.request_leave();
                }
                InputEvent::PointerDown { .. } => {}
            }
            return;
        }

        match event {
            InputEvent::Key(key) => {
                if let Some(action) = action_for_key(key) {
                    self.apply(action, cap);
                }
            }
            InputEvent::PointerDown { x, y } => self.pointer.press(x, y),
            InputEvent::PointerUp { x, y } => match self.pointer.release(x, y) {
                Some(Gesture::Swipe(action)) => self.apply(action, cap),
                Some(Gesture::Click { x, y }) => {
                    if let Some(button) = layout.hit(x, y) {
                        self.click(button, cap);
                    }
                }
                None => {}
            },
            InputEvent::CloseRequested => self.request_leave(),
        }
    }

    pub fn apply(&mut self, action: NavAction, cap: &mut dyn FullscreenCapability) {
        match action {
            NavAction::Advance => { self.navigator.advance(); }
            NavAction::Retreat => { self.navigator.retreat(); }
            NavAction::First => { self.navigator.first(); }
            NavAction::Last => { self.navigator.last(); }
            NavAction::ExitFullscreen => self.navigator.observer_mut().fullscreen.exit(cap),
            NavAction::Leave => self.request_leave(),
        }
    }

    fn click(&mut self, button: Button, cap: &mut dyn FullscreenCapability) {
        let prev_disabled = self.chrome().controls.prev_disabled;
        let next_disabled = self.chrome().controls.next_disabled;
        match button {
            Button::Previous if !prev_disabled => { self.navigator.retreat(); }
            Button::Next if !next_disabled => { self.navigator.advance(); }
            Button::Previous | Button::Next => {}
            Button::Fullscreen => self.navigator.observer_mut().fullscreen.toggle(cap),
            Button::Help => self.navigator.observer_mut().help.toggle(),
        }
    }

    /// Quits at once from the first slide, otherwise asks first.
    pub fn request_leave(&mut self) {
        if LeaveGuard::should_confirm(self.navigator.cursor()) {
            info!(cursor = self.navigator.cursor(), "leave requested mid-presentation, asking");
            self.leave_prompt = true;
        } else {
            self.quit = true;
        }
    }

    fn handle_leave_prompt(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key(Key::Y | Key::Enter) => {
                self.leave_prompt = false;
                self.quit = true;
            }
            InputEvent::Key(Key::N | Key::Escape) => {
                self.leave_prompt = false;
            }
            _ => {}
        }
    }
}
