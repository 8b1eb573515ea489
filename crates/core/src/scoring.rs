//! Scoring module - line clear points, level-ups and the gravity policy
//!
//! Points come from a fixed table with no level multiplier. A level is gained
//! when a lock event carries the cleared-line count across a multiple of 10,
//! at most once per event. Gravity speeds up by 4/5 on each level-up through
//! level 10, stays put from 11 to 28, and is pinned to 20ms from level 29.

use crate::types::{
    BASE_GRAVITY_NS, GRAVITY_FLOOR_LEVEL, GRAVITY_FLOOR_NS, GRAVITY_SPEEDUP_DENOMINATOR,
    GRAVITY_SPEEDUP_NUMERATOR, LINES_PER_LEVEL, LINE_SCORES, SOFT_DROP_GRAVITY_NS,
    SPEEDUP_MAX_LEVEL, START_LEVEL,
};

/// Points for filling `lines` rows in a single lock event (0 outside 1..=4)
pub fn line_clear_score(lines: u32) -> u32 {
    LINE_SCORES.get(lines as usize).copied().unwrap_or(0)
}

/// Whether a lock event filling `filled` rows raises the level.
pub fn crosses_level_boundary(previous_lines: u32, filled: u32) -> bool {
    previous_lines % LINES_PER_LEVEL + filled >= LINES_PER_LEVEL
}

/// Base gravity interval after reaching `level`, given the interval before it.
///
/// Uses truncating integer arithmetic, so the speed-up compounds exactly the
/// way repeated level-ups apply it.
pub fn next_base_gravity_ns(level: u32, base_ns: u64) -> u64 {
    if level <= SPEEDUP_MAX_LEVEL {
        base_ns * GRAVITY_SPEEDUP_NUMERATOR / GRAVITY_SPEEDUP_DENOMINATOR
    } else if level >= GRAVITY_FLOOR_LEVEL {
        GRAVITY_FLOOR_NS
    } else {
        base_ns
    }
}

/// Effective gravity interval for a base interval and soft-drop state.
///
/// Soft drop never slows a level that is already faster than it.
pub fn gravity_interval_ns(base_ns: u64, soft_drop: bool) -> u64 {
    if soft_drop {
        base_ns.min(SOFT_DROP_GRAVITY_NS)
    } else {
        base_ns
    }
}

/// Base gravity interval at `level`, replaying every level-up from the start level
pub fn gravity_for_level(level: u32) -> u64 {
    (START_LEVEL + 1..=level).fold(BASE_GRAVITY_NS, |base, lvl| next_base_gravity_ns(lvl, base))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NANOS_PER_MILLI;

    #[test]
    fn test_line_scores() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 40);
        assert_eq!(line_clear_score(2), 100);
        assert_eq!(line_clear_score(3), 300);
        assert_eq!(line_clear_score(4), 1200);
        assert_eq!(line_clear_score(5), 0);
    }

    #[test]
    fn test_level_boundary() {
        assert!(crosses_level_boundary(8, 2));
        assert!(!crosses_level_boundary(8, 1));
        assert!(!crosses_level_boundary(9, 0));
        assert!(crosses_level_boundary(19, 1));
        // Overflow past the boundary still counts once.
        assert!(crosses_level_boundary(9, 4));
        assert!(!crosses_level_boundary(10, 4));
    }

    #[test]
    fn test_gravity_speeds_up_through_level_ten() {
        assert_eq!(gravity_for_level(1), BASE_GRAVITY_NS);
        assert_eq!(gravity_for_level(2), 800 * NANOS_PER_MILLI);
        assert_eq!(gravity_for_level(3), 640 * NANOS_PER_MILLI);
        assert_eq!(gravity_for_level(4), 512 * NANOS_PER_MILLI);

        for level in 2..=10 {
            assert!(gravity_for_level(level) < gravity_for_level(level - 1));
        }
    }

    #[test]
    fn test_gravity_plateau_then_floor() {
        let at_ten = gravity_for_level(10);
        assert_eq!(gravity_for_level(11), at_ten);
        assert_eq!(gravity_for_level(28), at_ten);
        assert_eq!(gravity_for_level(29), GRAVITY_FLOOR_NS);
        assert_eq!(gravity_for_level(40), GRAVITY_FLOOR_NS);
    }

    #[test]
    fn test_soft_drop_interval() {
        assert_eq!(gravity_interval_ns(BASE_GRAVITY_NS, false), BASE_GRAVITY_NS);
        assert_eq!(gravity_interval_ns(BASE_GRAVITY_NS, true), SOFT_DROP_GRAVITY_NS);
        assert_eq!(gravity_interval_ns(GRAVITY_FLOOR_NS, true), GRAVITY_FLOOR_NS);
    }
}
