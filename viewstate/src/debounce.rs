// resize debounce
//
// every resize starts a new generation and marks the window as resizing.  the timer
// started for that resize carries its generation back when it fires, and only the
// latest generation may settle the debounce, so each resize restarts the quiet period
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResizeDebounce {
    generation: u64,
    active: bool,
}

impl ResizeDebounce {
    // returns the generation the settle timer should report back
    pub fn resized(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.active = true;
        self.generation
    }

    // returns true if this timer ended the resize
    pub fn settled(&mut self, generation: u64) -> bool {
        if !self.active || generation != self.generation {
            return false;
        }
        self.active = false;
        true
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_is_active_until_its_timer_fires() {
        let mut debounce = ResizeDebounce::default();
        assert!(!debounce.is_active());

        let first = debounce.resized();
        assert!(debounce.is_active());

        assert!(debounce.settled(first));
        assert!(!debounce.is_active());
    }

    #[test]
    fn later_resize_restarts_the_quiet_period() {
        let mut debounce = ResizeDebounce::default();

        let first = debounce.resized();
        let second = debounce.resized();

        assert!(!debounce.settled(first));
        assert!(debounce.is_active());

        assert!(debounce.settled(second));
        assert!(!debounce.is_active());
    }

    #[test]
    fn settling_twice_is_a_no_op() {
        let mut debounce = ResizeDebounce::default();

        let only = debounce.resized();
        assert!(debounce.settled(only));
        assert!(!debounce.settled(only));
        assert!(!debounce.is_active());
    }
}
