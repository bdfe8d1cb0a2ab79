pub const DEFAULT_WIDTH: i32 = 1280;          // Initial window width
pub const DEFAULT_HEIGHT: i32 = 720;          // Initial window height
pub const FPS: u32 = 60;                      // Default frames per second

pub const TRANSITION_DURATION: f32 = 0.35;    // Slide in/out animation (seconds)
pub const MIN_SWIPE_DISTANCE: f32 = 50.0;     // Horizontal drag dead zone (pixels)

pub const PROGRESS_BAR_HEIGHT: i32 = 4;
pub const TITLE_FONT_SIZE: i32 = 48;
pub const BODY_FONT_SIZE: i32 = 28;
pub const CHROME_FONT_SIZE: i32 = 20;
pub const SLIDE_MARGIN: f32 = 64.0;

pub const PREV_LABEL: &str = "< Previous";
pub const NEXT_LABEL: &str = "Next >";
pub const NEXT_LABEL_TERMINAL: &str = "End";
pub const FULLSCREEN_ENTER_LABEL: &str = "[ ] Fullscreen";
pub const FULLSCREEN_EXIT_LABEL: &str = "X Exit";
pub const HELP_LABEL: &str = "?";
pub const LEAVE_PROMPT: &str = "Leave the presentation? (Y/N)";

pub const HELP_TEXT: &str = "Keyboard shortcuts:
Right or Space: next slide
Left: previous slide
Home: first slide
End: last slide
Esc: leave fullscreen
Q: leave the presentation

Drag / swipe:
Drag left: next
Drag right: previous";
