//! Timing module - fixed-step lag accumulator for the driver loop
//!
//! The driver measures wall-clock time between iterations and adds it here;
//! the accumulator hands it back as whole fixed-size slices. Simulation speed
//! therefore never depends on how often the loop happens to run: a stall just
//! produces several catch-up ticks in order, none skipped.

use tracing::trace;

use crate::game_state::GameState;
use crate::types::TICK_NS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedStep {
    slice_ns: u64,
    lag_ns: u64,
}

impl FixedStep {
    /// Create an accumulator handing out slices of `slice_ns` (at least 1ns)
    pub fn new(slice_ns: u64) -> Self {
        Self {
            slice_ns: slice_ns.max(1),
            lag_ns: 0,
        }
    }

    pub fn slice_ns(&self) -> u64 {
        self.slice_ns
    }

    /// Lag not yet handed out as slices
    pub fn lag_ns(&self) -> u64 {
        self.lag_ns
    }

    /// Add measured elapsed time
    pub fn accumulate(&mut self, elapsed_ns: u64) {
        self.lag_ns = self.lag_ns.saturating_add(elapsed_ns);
    }

    /// Take one slice while the lag strictly exceeds a slice.
    pub fn next_slice(&mut self) -> Option<u64> {
        if self.lag_ns > self.slice_ns {
            self.lag_ns -= self.slice_ns;
            Some(self.slice_ns)
        } else {
            None
        }
    }

    /// Feed every available slice into the game.
    ///
    /// Returns whether any tick reported a visible change.
    pub fn run(&mut self, game: &mut GameState) -> bool {
        let mut changed = false;
        let mut ticks = 0u32;
        while let Some(slice) = self.next_slice() {
            changed |= game.tick(slice);
            ticks += 1;
        }
        if ticks > 1 {
            trace!(ticks, lag_ns = self.lag_ns, "caught up");
        }
        changed
    }

    /// Drop any pending lag
    pub fn reset(&mut self) {
        self.lag_ns = 0;
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(TICK_NS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slices_only_when_lag_exceeds_one_slice() {
        let mut step = FixedStep::new(16);
        step.accumulate(16);
        assert_eq!(step.next_slice(), None);

        step.accumulate(1);
        assert_eq!(step.next_slice(), Some(16));
        assert_eq!(step.lag_ns(), 1);
    }

    #[test]
    fn test_stall_produces_catch_up_slices_in_order() {
        let mut step = FixedStep::new(10);
        step.accumulate(55);

        let mut slices = Vec::new();
        while let Some(s) = step.next_slice() {
            slices.push(s);
        }
        assert_eq!(slices, vec![10, 10, 10, 10, 10]);
        assert_eq!(step.lag_ns(), 5);
    }

    #[test]
    fn test_zero_slice_is_clamped() {
        let step = FixedStep::new(0);
        assert_eq!(step.slice_ns(), 1);
        assert_eq!(FixedStep::default().slice_ns(), TICK_NS);
    }

    #[test]
    fn test_run_feeds_game() {
        let mut game = GameState::new(3);
        let mut step = FixedStep::default();
        step.accumulate(TICK_NS + 1);
        // First tick spawns a piece.
        assert!(step.run(&mut game));
        assert!(game.active().is_some());
        assert_eq!(step.lag_ns(), 1);
    }
}
