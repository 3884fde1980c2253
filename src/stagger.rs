use std::time::Duration;

/// animate.css classes for the entrance effect shared by every section.
pub const ENTRANCE_CLASS: &str = "animate__animated animate__fadeInUp";

pub const STAGGER_STEP_MS: u64 = 100;

/// Delay before the item at `index` starts its entrance animation.
pub fn stagger_delay(index: usize) -> Duration {
    Duration::from_millis(STAGGER_STEP_MS * index as u64)
}

/// CSS `animation-delay` value for the item at `index`.
pub fn animation_delay(index: usize) -> String {
    format!("{}s", stagger_delay(index).as_secs_f64())
}
