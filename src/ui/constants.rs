// Timing constants for the inspector event loop

/// How long `event::poll` waits before redrawing
pub const EVENT_POLL_MS: u64 = 50;

/// Delay between forms while auto-play is on
pub const PLAY_INTERVAL_MS: u64 = 1000;

/// Minimum gap between two space presses that toggle auto-play
pub const SPACE_DEBOUNCE_MS: u64 = 200;
