use tracing::{debug, info};
use crate::constants::*;
use crate::navigator::{Transition, TransitionObserver};

// --- Fullscreen Capability ---

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FullscreenMode {
    Exclusive,
    Borderless,
}

/// Modes tried in order when entering fullscreen.
pub const FULLSCREEN_FALLBACK: [FullscreenMode; 2] = [FullscreenMode::Exclusive, FullscreenMode::Borderless];

/// Window capabilities the chrome needs. Implemented by the platform layer
/// and by fakes in tests.
pub trait FullscreenCapability {
    fn supports_fullscreen(&self, mode: FullscreenMode) -> bool;
    fn active_fullscreen(&self) -> Option<FullscreenMode>;
    fn request_fullscreen(&mut self, mode: FullscreenMode);
    fn exit_fullscreen(&mut self, mode: FullscreenMode);
}

#[derive(Debug, Default)]
pub struct FullscreenToggle {
    fullscreen: bool,
}

impl FullscreenToggle {
    pub fn label(&self) -> &'static str {
        if self.fullscreen { FULLSCREEN_EXIT_LABEL } else { FULLSCREEN_ENTER_LABEL }
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Enters the first supported mode. Silently does nothing if none is.
    pub fn enter(&mut self, cap: &mut dyn FullscreenCapability) {
        if cap.active_fullscreen().is_some() {
            self.fullscreen = true;
            return;
        }
        match FULLSCREEN_FALLBACK.into_iter().find(|mode| cap.supports_fullscreen(*mode)) {
            Some(mode) => {
                cap.request_fullscreen(mode);
                self.fullscreen = true;
                debug!(?mode, "entered fullscreen");
            }
            None => debug!("no fullscreen mode available"),
        }
    }

    pub fn exit(&mut self, cap: &mut dyn FullscreenCapability) {
        if let Some(mode) = cap.active_fullscreen() {
            cap.exit_fullscreen(mode);
            debug!(?mode, "left fullscreen");
        }
        self.fullscreen = false;
    }

    pub fn toggle(&mut self, cap: &mut dyn FullscreenCapability) {
        if cap.active_fullscreen().is_some() {
            self.exit(cap);
        } else {
            self.enter(cap);
        }
    }

    /// Resets the label when fullscreen was left behind our back.
    pub fn sync(&mut self, cap: &dyn FullscreenCapability) {
        if cap.active_fullscreen().is_none() {
            self.fullscreen = false;
        }
    }
}

// --- Transition Observers ---

#[derive(Debug, Default, Clone, PartialEq)]
pub struct NavControls {
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub next_label: &'static str,
    pub counter: String,
}

impl TransitionObserver for NavControls {
    fn on_transition(&mut self, t: &Transition) {
        self.prev_disabled = t.cursor == 1;
        self.next_disabled = t.cursor == t.total;
        self.next_label = if t.cursor == t.total { NEXT_LABEL_TERMINAL } else { NEXT_LABEL };
        self.counter = format!("{} / {}", t.cursor, t.total);
    }
}

/// Accessibility announcement for the active slide.
#[derive(Debug, Default)]
pub struct Announcer {
    latest: Option<String>,
}

impl Announcer {
    pub fn latest(&self) -> Option<&str> {
        self.latest.as_deref()
    }
}

pub fn announcement(t: &Transition) -> String {
    format!("{}. Slide {} of {}.", t.title, t.cursor, t.total)
}

impl TransitionObserver for Announcer {
    fn on_transition(&mut self, t: &Transition) {
        let text = announcement(t);
        info!(target: "announce", "{text}");
        self.latest = Some(text);
    }
}

#[derive(Debug, Default)]
pub struct ProgressBar {
    fraction: f32,
}

impl ProgressBar {
    pub fn update_progress(&mut self, cursor: usize, total: usize) {
        if total > 0 {
            self.fraction = cursor as f32 / total as f32;
        }
    }

    pub fn fraction(&self) -> f32 {
        self.fraction
    }
}

impl TransitionObserver for ProgressBar {
    fn on_transition(&mut self, t: &Transition) {
        self.update_progress(t.cursor, t.total);
    }
}

// --- Overlays ---

#[derive(Debug, Default)]
pub struct HelpOverlay {
    open: bool,
}

impl HelpOverlay {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn text(&self) -> &'static str {
        HELP_TEXT
    }
}

/// Leaving mid-presentation asks first; leaving from the first slide does not.
pub struct LeaveGuard;

impl LeaveGuard {
    pub fn should_confirm(cursor: usize) -> bool {
        cursor > 1
    }
}

// --- Layout ---

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Button {
    Previous,
    Next,
    Fullscreen,
    Help,
}

/// Button placement for a given screen size.
#[derive(Debug, Clone, Copy)]
pub struct ChromeLayout {
    pub previous: Rect,
    pub next: Rect,
    pub fullscreen: Rect,
    pub help: Rect,
    pub counter: (f32, f32),
}

impl ChromeLayout {
    pub fn new(width: f32, height: f32) -> Self {
        let button_w = 140.0;
        let button_h = 40.0;
        let bottom = height - 24.0 - button_h;
        let next = Rect::new(width - 24.0 - button_w, bottom, button_w, button_h);
        let previous = Rect::new(next.x - 12.0 - button_w, bottom, button_w, button_h);

        Self {
            previous,
            next,
            fullscreen: Rect::new(24.0, 24.0, 170.0, button_h),
            help: Rect::new(previous.x - 12.0 - button_h, bottom, button_h, button_h),
            counter: (24.0, bottom + 10.0),
        }
    }

    pub fn hit(&self, x: f32, y: f32) -> Option<Button> {
        [
            (Button::Previous, self.previous),
            (Button::Next, self.next),
            (Button::Fullscreen, self.fullscreen),
            (Button::Help, self.help),
        ]
        .into_iter()
        .find(|(_, rect)| rect.contains(x, y))
        .map(|(button, _)| button)
    }
}

// --- Chrome ---

/// Everything around the slides. Registered on the navigator as its
/// observer; parts are updated in a fixed order, extras last.
#[derive(Default)]
pub struct Chrome {
    pub controls: NavControls,
    pub announcer: Announcer,
    pub progress: ProgressBar,
    pub fullscreen: FullscreenToggle,
    pub help: HelpOverlay,
    extra: Vec<Box<dyn TransitionObserver>>,
}

impl Chrome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, observer: Box<dyn TransitionObserver>) {
        self.extra.push(observer);
    }
}

impl TransitionObserver for Chrome {
    fn on_transition(&mut self, t: &Transition) {
        self.controls.on_transition(t);
        self.announcer.on_transition(t);
        self.progress.on_transition(t);
        self.extra.on_transition(t);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Window stand-in with a configurable set of supported modes.
    #[derive(Debug, Default)]
    pub(crate) struct FakeWindow {
        pub supported: Vec<FullscreenMode>,
        pub active: Option<FullscreenMode>,
        pub requests: Vec<FullscreenMode>,
    }

    impl FakeWindow {
        pub(crate) fn with(supported: &[FullscreenMode]) -> Self {
            Self { supported: supported.to_vec(), ..Self::default() }
        }
    }

    impl FullscreenCapability for FakeWindow {
        fn supports_fullscreen(&self, mode: FullscreenMode) -> bool {
            self.supported.contains(&mode)
        }

        fn active_fullscreen(&self) -> Option<FullscreenMode> {
            self.active
        }

        fn request_fullscreen(&mut self, mode: FullscreenMode) {
            self.requests.push(mode);
            self.active = Some(mode);
        }

        fn exit_fullscreen(&mut self, mode: FullscreenMode) {
            if self.active == Some(mode) {
                self.active = None;
            }
        }
    }

    fn transition(cursor: usize, total: usize) -> Transition {
        Transition { cursor, total, title: format!("Slide {cursor}") }
    }

    #[test]
    fn controls_follow_cursor_edges() {
        let mut controls = NavControls::default();
        for cursor in 1..=4 {
            controls.on_transition(&transition(cursor, 4));
            assert_eq!(controls.prev_disabled, cursor == 1);
            assert_eq!(controls.next_disabled, cursor == 4);
            assert_eq!(controls.counter, format!("{cursor} / 4"));
        }
        assert_eq!(controls.next_label, NEXT_LABEL_TERMINAL);

        controls.on_transition(&transition(3, 4));
        assert_eq!(controls.next_label, NEXT_LABEL);
    }

    #[test]
    fn single_slide_disables_both_controls() {
        let mut controls = NavControls::default();
        controls.on_transition(&transition(1, 1));
        assert!(controls.prev_disabled && controls.next_disabled);
    }

    #[test]
    fn announcement_names_title_and_position() {
        let mut announcer = Announcer::default();
        announcer.on_transition(&Transition { cursor: 2, total: 9, title: "Agenda".to_string() });
        assert_eq!(announcer.latest(), Some("Agenda. Slide 2 of 9."));
    }

    #[test]
    fn progress_is_cursor_over_total() {
        let mut progress = ProgressBar::default();
        progress.update_progress(1, 4);
        assert_eq!(progress.fraction(), 0.25);
        progress.on_transition(&transition(4, 4));
        assert_eq!(progress.fraction(), 1.0);
    }

    #[test]
    fn fullscreen_prefers_exclusive_then_falls_back() {
        let mut toggle = FullscreenToggle::default();
        let mut both = FakeWindow::with(&[FullscreenMode::Borderless, FullscreenMode::Exclusive]);
        toggle.enter(&mut both);
        assert_eq!(both.requests, vec![FullscreenMode::Exclusive]);
        assert_eq!(toggle.label(), FULLSCREEN_EXIT_LABEL);

        let mut toggle = FullscreenToggle::default();
        let mut borderless = FakeWindow::with(&[FullscreenMode::Borderless]);
        toggle.enter(&mut borderless);
        assert_eq!(borderless.requests, vec![FullscreenMode::Borderless]);
    }

    #[test]
    fn missing_capability_is_a_silent_no_op() {
        let mut toggle = FullscreenToggle::default();
        let mut none = FakeWindow::default();
        toggle.enter(&mut none);
        assert!(none.requests.is_empty());
        assert!(!toggle.is_fullscreen());
        assert_eq!(toggle.label(), FULLSCREEN_ENTER_LABEL);

        toggle.exit(&mut none);
        assert!(!toggle.is_fullscreen());
    }

    #[test]
    fn toggle_round_trips_and_sync_resets_label() {
        let mut toggle = FullscreenToggle::default();
        let mut window = FakeWindow::with(&[FullscreenMode::Exclusive]);
        toggle.toggle(&mut window);
        assert_eq!(window.active, Some(FullscreenMode::Exclusive));
        toggle.toggle(&mut window);
        assert_eq!(window.active, None);
        assert_eq!(toggle.label(), FULLSCREEN_ENTER_LABEL);

        toggle.enter(&mut window);
        window.active = None; // left through the window manager
        toggle.sync(&window);
        assert_eq!(toggle.label(), FULLSCREEN_ENTER_LABEL);
    }

    #[test]
    fn leave_guard_only_confirms_past_first_slide() {
        assert!(!LeaveGuard::should_confirm(1));
        assert!(LeaveGuard::should_confirm(2));
        assert!(LeaveGuard::should_confirm(5));
    }

    #[test]
    fn layout_hit_tests_each_button() {
        let layout = ChromeLayout::new(1280.0, 720.0);
        let centre = |r: Rect| (r.x + r.width / 2.0, r.y + r.height / 2.0);

        let (x, y) = centre(layout.next);
        assert_eq!(layout.hit(x, y), Some(Button::Next));
        let (x, y) = centre(layout.previous);
        assert_eq!(layout.hit(x, y), Some(Button::Previous));
        let (x, y) = centre(layout.fullscreen);
        assert_eq!(layout.hit(x, y), Some(Button::Fullscreen));
        let (x, y) = centre(layout.help);
        assert_eq!(layout.hit(x, y), Some(Button::Help));
        assert_eq!(layout.hit(640.0, 360.0), None);
    }

    #[test]
    fn chrome_updates_parts_before_extras() {
        struct SeesProgress(std::rc::Rc<std::cell::Cell<usize>>);
        impl TransitionObserver for SeesProgress {
            fn on_transition(&mut self, t: &Transition) {
                self.0.set(t.cursor);
            }
        }

        let seen = std::rc::Rc::new(std::cell::Cell::new(0));
        let mut chrome = Chrome::new();
        chrome.register(Box::new(SeesProgress(std::rc::Rc::clone(&seen))));
        chrome.on_transition(&transition(3, 6));

        assert_eq!(seen.get(), 3);
        assert_eq!(chrome.progress.fraction(), 0.5);
        assert_eq!(chrome.controls.counter, "3 / 6");
        assert_eq!(chrome.announcer.latest(), Some("Slide 3. Slide 3 of 6."));
    }
}
