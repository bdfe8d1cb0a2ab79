use crate::constants::MIN_SWIPE_DISTANCE;

/// Keys the presenter reacts to, independent of the windowing backend.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Key {
    Right,
    Space,
    Left,
    Home,
    End,
    Escape,
    Q,
    Y,
    N,
    Enter,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NavAction {
    Advance,
    Retreat,
    First,
    Last,
    ExitFullscreen,
    Leave,
}

pub fn action_for_key(key: Key) -> Option<NavAction> {
    match key {
        Key::Right | Key::Space => Some(NavAction::Advance),
        Key::Left => Some(NavAction::Retreat),
        Key::Home => Some(NavAction::First),
        Key::End => Some(NavAction::Last),
        Key::Escape => Some(NavAction::ExitFullscreen),
        Key::Q => Some(NavAction::Leave),
        _ => None,
    }
}

/// Maps a horizontal drag to navigation. Dragging left moves forward.
/// Drags shorter than the dead zone map to nothing.
pub fn swipe_action(start_x: f32, end_x: f32) -> Option<NavAction> {
    let distance = start_x - end_x;
    if distance.abs() < MIN_SWIPE_DISTANCE {
        return None;
    }
    if distance > 0.0 {
        Some(NavAction::Advance)
    } else {
        Some(NavAction::Retreat)
    }
}

/// What a completed press/release gesture turned out to be.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Gesture {
    Swipe(NavAction),
    Click { x: f32, y: f32 },
}

/// Remembers where a pointer went down so the release can be classified.
#[derive(Debug, Default)]
pub struct PointerTracker {
    start: Option<(f32, f32)>,
}

impl PointerTracker {
    pub fn press(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// Returns `None` for a release without a matching press.
    pub fn release(&mut self, x: f32, y: f32) -> Option<Gesture> {
        let (start_x, _) = self.start.take()?;
        match swipe_action(start_x, x) {
            Some(action) => Some(Gesture::Swipe(action)),
            None => Some(Gesture::Click { x, y }),
        }
    }
}
