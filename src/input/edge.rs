//! Key edge detection
//!
//! Mode toggles must fire exactly once per physical key press, no matter
//! how many polls happen while the key is held. `KeyEdge` compares the
//! previous sampled state against the current one and reports the
//! transition, replacing ad hoc per-key debounce booleans.

/// Transition observed between two consecutive samples of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Key went from up to down this sample
    Rising,
    /// Key went from down to up this sample
    Falling,
    /// No change since the previous sample
    Steady,
}

impl Edge {
    /// True only on the up-to-down transition
    pub fn rising(self) -> bool {
        self == Edge::Rising
    }
}

/// Tracks the previously sampled state of a single key
#[derive(Debug, Default)]
pub struct KeyEdge {
    was_down: bool,
}

impl KeyEdge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current key state and get the observed transition
    pub fn update(&mut self, down: bool) -> Edge {
        let edge = match (self.was_down, down) {
            (false, true) => Edge::Rising,
            (true, false) => Edge::Falling,
            _ => Edge::Steady,
        };
        self.was_down = down;
        edge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rising_edge_fires_once() {
        let mut edge = KeyEdge::new();

        assert_eq!(edge.update(true), Edge::Rising);
        // Held key keeps reporting Steady, not Rising
        assert_eq!(edge.update(true), Edge::Steady);
        assert_eq!(edge.update(true), Edge::Steady);
    }

    #[test]
    fn test_falling_edge() {
        let mut edge = KeyEdge::new();
        edge.update(true);

        assert_eq!(edge.update(false), Edge::Falling);
        assert_eq!(edge.update(false), Edge::Steady);
    }

    #[test]
    fn test_release_rearms_the_trigger() {
        let mut edge = KeyEdge::new();

        assert!(edge.update(true).rising());
        assert!(!edge.update(true).rising());
        edge.update(false);
        assert!(edge.update(true).rising());
    }
}
