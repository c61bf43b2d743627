//! Reveal-on-scroll visibility rule.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Root margin trimming 30% off the top and bottom of the viewport.
pub const REVEAL_ROOT_MARGIN: &str = "-30% 0px -30% 0px";
/// Intersection ratios that re-evaluate visibility.
pub const REVEAL_THRESHOLDS: [f64; 3] = [0.15, 0.35, 0.75];

/// Next visibility flag for a section after an observer entry.
///
/// Entering the root box reveals the section. Leaving it while the section's
/// top edge is below the viewport top (scrolled back up past it) hides it
/// again so the animation replays; leaving upward keeps it revealed.
#[must_use]
pub fn next_visibility(current: bool, is_intersecting: bool, top: f64) -> bool {
    if is_intersecting {
        true
    } else if top > 0.0 {
        false
    } else {
        current
    }
}
