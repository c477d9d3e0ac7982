//! Shared passphrase screen shown before the booking calendar.
//!
//! Everyone in the family uses the same passphrase. This keeps casual
//! visitors out of the calendar; it does not authenticate anybody.

use log::{info, warn};

pub const DEFAULT_PASSPHRASE: &str = "mamamia";

#[derive(Debug, Clone)]
pub struct AccessGate {
    passphrase: String,
    unlocked: bool,
    failed_attempts: u32,
}

impl AccessGate {
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
            unlocked: false,
            failed_attempts: 0,
        }
    }

    /// Try to unlock the session. The comparison is exact; returns whether
    /// this attempt matched. A wrong attempt does not lock an open session.
    pub fn unlock(&mut self, attempt: &str) -> bool {
        let matched = attempt == self.passphrase;
        if matched {
            info!("Booking calendar unlocked");
            self.unlocked = true;
        } else {
            self.failed_attempts += 1;
            warn!("Incorrect passphrase ({} failed attempts)", self.failed_attempts);
        }
        matched
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    pub fn lock(&mut self) {
        self.unlocked = false;
    }
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new(DEFAULT_PASSPHRASE)
    }
}
