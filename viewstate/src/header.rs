// header state machine
//
// two orthogonal pieces of state are derived from each scroll sample: whether the page
// has moved past the "scrolled" threshold, and which way it last moved.  both end up as
// class toggles on the header element

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Top,
    ScrollingDown,
    ScrollingUp,
}

impl Direction {
    pub fn class(self) -> Option<&'static str> {
        match self {
            Direction::Top => None,
            Direction::ScrollingDown => Some("scroll-down"),
            Direction::ScrollingUp => Some("scroll-up"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeaderState {
    pub scrolled: bool,
    pub direction: Direction,
    pub last_offset: f64,
}

impl HeaderState {
    // the single transition function
    //
    // an unchanged offset leaves the direction alone, so a sample that only repeats the
    // previous position never flips the header
    pub fn next(self, offset: f64, scrolled_threshold: f64) -> HeaderState {
        let direction = if offset <= 0.0 {
            Direction::Top
        } else if offset > self.last_offset {
            Direction::ScrollingDown
        } else if offset < self.last_offset {
            Direction::ScrollingUp
        } else {
            self.direction
        };

        HeaderState {
            scrolled: offset > scrolled_threshold,
            direction,
            last_offset: offset,
        }
    }

    pub fn classes(&self) -> String {
        let mut classes = String::from("header");

        if self.scrolled {
            classes.push_str(" on-scroll");
        }
        if let Some(class) = self.direction.class() {
            classes.push(' ');
            classes.push_str(class);
        }

        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const THRESHOLD: f64 = 20.0;

    fn run(samples: &[f64]) -> HeaderState {
        samples
            .iter()
            .fold(HeaderState::default(), |state, &offset| state.next(offset, THRESHOLD))
    }

    #[test]
    fn starts_plain_at_top() {
        let state = HeaderState::default().next(0.0, THRESHOLD);

        assert_eq!(state.direction, Direction::Top);
        assert!(!state.scrolled);
        assert_eq!(state.classes(), "header");
    }

    #[test]
    fn scrolled_flag_is_strict() {
        assert!(!run(&[20.0]).scrolled);
        assert!(run(&[20.5]).scrolled);
    }

    #[test]
    fn down_then_up_then_top() {
        let down = run(&[50.0, 120.0]);
        assert_eq!(down.direction, Direction::ScrollingDown);
        assert_eq!(down.classes(), "header on-scroll scroll-down");

        let up = run(&[50.0, 120.0, 80.0]);
        assert_eq!(up.direction, Direction::ScrollingUp);
        assert_eq!(up.classes(), "header on-scroll scroll-up");

        let top = run(&[50.0, 120.0, 80.0, 0.0]);
        assert_eq!(top.direction, Direction::Top);
        assert_eq!(top.classes(), "header");
    }

    #[test]
    fn repeated_offset_keeps_direction() {
        assert_eq!(run(&[40.0, 90.0, 90.0]).direction, Direction::ScrollingDown);
        assert_eq!(run(&[90.0, 40.0, 40.0]).direction, Direction::ScrollingUp);
    }

    #[test]
    fn overscroll_counts_as_top() {
        assert_eq!(run(&[30.0, -12.0]).direction, Direction::Top);
    }

    proptest! {
        #[test]
        fn scrolled_iff_above_threshold(offset in -500.0f64..5000.0) {
            let state = HeaderState::default().next(offset, THRESHOLD);
            prop_assert_eq!(state.scrolled, offset > THRESHOLD);
            prop_assert_eq!(state.classes().contains("on-scroll"), offset > THRESHOLD);
        }

        #[test]
        fn direction_follows_latest_nonzero_delta(
            samples in prop::collection::vec(0.0f64..2000.0, 1..40)
        ) {
            let mut state = HeaderState::default();
            let mut previous = 0.0;
            let mut expected = Direction::Top;

            for offset in samples {
                state = state.next(offset, THRESHOLD);

                if offset <= 0.0 {
                    expected = Direction::Top;
                } else if offset > previous {
                    expected = Direction::ScrollingDown;
                } else if offset < previous {
                    expected = Direction::ScrollingUp;
                }
                previous = offset;

                prop_assert_eq!(state.direction, expected);
                prop_assert_eq!(state.last_offset, offset);
            }
        }
    }
}
