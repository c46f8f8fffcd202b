//! Typed secret code matcher
//!
//! Tracks how much of a code has been typed. A wrong key or a pause longer
//! than the timeout starts the match over.

/// Code that reveals the gradual speed toggle on the settings screen
pub const GRADUAL_SPEED_CODE: &str = "ramp";
/// Max ticks allowed between keys (1.5 s at 60 Hz)
pub const SECRET_TIMEOUT_TICKS: u64 = 90;

#[derive(Debug, Clone)]
pub struct SecretCode {
    code: Vec<char>,
    matched: usize,
    last_tick: u64,
    timeout_ticks: u64,
}

impl SecretCode {
    pub fn new(code: &str, timeout_ticks: u64) -> Self {
        debug_assert!(!code.is_empty());
        Self {
            code: code.to_lowercase().chars().collect(),
            matched: 0,
            last_tick: 0,
            timeout_ticks,
        }
    }

    pub fn reset(&mut self) {
        self.matched = 0;
    }

    /// Feed one typed character at `tick`. Returns true when the code completes.
    pub fn feed(&mut self, ch: char, tick: u64) -> bool {
        if self.matched > 0 && tick.saturating_sub(self.last_tick) > self.timeout_ticks {
            self.matched = 0;
        }
        self.last_tick = tick;

        let ch = ch.to_lowercase().next().unwrap_or(ch);
        if ch == self.code[self.matched] {
            self.matched += 1;
        } else {
            // A wrong key may still begin a new attempt
            self.matched = usize::from(ch == self.code[0]);
        }

        if self.matched == self.code.len() {
            self.matched = 0;
            return true;
        }
        false
    }
}

impl Default for SecretCode {
    fn default() -> Self {
        Self::new(GRADUAL_SPEED_CODE, SECRET_TIMEOUT_TICKS)
    }
}
