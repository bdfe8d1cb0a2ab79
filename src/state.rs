#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SlideState {
    Upcoming,  // Positioned after the cursor, waiting off to the right
    Active,    // The slide at the cursor
    Preceding, // Positioned before the cursor, parked off to the left
}

impl SlideState {
    /// State of the slide at `position` when the cursor sits at `cursor`.
    pub fn for_position(position: usize, cursor: usize) -> Self {
        if position < cursor {
            SlideState::Preceding
        } else if position == cursor {
            SlideState::Active
        } else {
            SlideState::Upcoming
        }
    }

    /// Horizontal resting offset in screen widths, used to pick the
    /// direction a slide animates in from or out to.
    pub fn resting_offset(self) -> f32 {
        match self {
            SlideState::Preceding => -1.0,
            SlideState::Active => 0.0,
            SlideState::Upcoming => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_positions_precede_the_cursor() {
        assert_eq!(SlideState::for_position(1, 3), SlideState::Preceding);
        assert_eq!(SlideState::for_position(2, 3), SlideState::Preceding);
        assert_eq!(SlideState::for_position(3, 3), SlideState::Active);
        assert_eq!(SlideState::for_position(4, 3), SlideState::Upcoming);
    }

    #[test]
    fn offsets_point_away_from_the_active_slide() {
        assert!(SlideState::Preceding.resting_offset() < 0.0);
        assert_eq!(SlideState::Active.resting_offset(), 0.0);
        assert!(SlideState::Upcoming.resting_offset() > 0.0);
    }
}
