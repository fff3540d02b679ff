//! Push Keys
//!
//! Generates 20-character child keys that sort lexicographically by creation
//! time: 8 characters of millisecond timestamp followed by a 12-character
//! counter that increments when two keys share a millisecond.

/// Key alphabet, in ASCII order so string order matches numeric order
const PUSH_CHARS: &[u8; 64] = b"-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

const TIME_LEN: usize = 8;
const SUFFIX_LEN: usize = 12;

/// Stateful generator; keys from one generator are strictly increasing
#[derive(Debug, Clone)]
pub struct PushIdGenerator {
    last_millis: i64,
    suffix: [u8; SUFFIX_LEN],
}

impl Default for PushIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PushIdGenerator {
    pub fn new() -> Self {
        Self {
            last_millis: -1,
            suffix: [0; SUFFIX_LEN],
        }
    }

    /// Next key for a push happening at `now_millis`.
    ///
    /// A clock that goes backwards is treated as standing still.
    pub fn next_id(&mut self, now_millis: i64) -> String {
        if now_millis > self.last_millis {
            self.last_millis = now_millis;
            self.suffix = [0; SUFFIX_LEN];
        } else if !self.increment_suffix() {
            // Counter exhausted within one millisecond: borrow the next one
            self.last_millis += 1;
            self.suffix = [0; SUFFIX_LEN];
        }

        let mut id = String::with_capacity(TIME_LEN + SUFFIX_LEN);
        let mut time_chars = [0u8; TIME_LEN];
        let mut ts = self.last_millis.max(0) as u64;
        for slot in time_chars.iter_mut().rev() {
            *slot = PUSH_CHARS[(ts % 64) as usize];
            ts /= 64;
        }
        id.extend(time_chars.iter().map(|&c| c as char));
        id.extend(self.suffix.iter().map(|&i| PUSH_CHARS[i as usize] as char));
        id
    }

    /// Add one to the suffix; false on overflow
    fn increment_suffix(&mut self) -> bool {
        for digit in self.suffix.iter_mut().rev() {
            if *digit < 63 {
                *digit += 1;
                return true;
            }
            *digit = 0;
        }
        false
    }
}
