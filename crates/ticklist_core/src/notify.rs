//! User-facing notification seam.
//!
//! # Responsibility
//! - Decouple controller confirmations from any blocking UI facility.
//!
//! # Invariants
//! - Notifications never block the caller.

use log::info;

/// Non-blocking sink for user-facing confirmations.
pub trait Notifier {
    /// Delivers one confirmation message.
    fn notify(&mut self, message: &str);
}

/// Default notifier that routes confirmations into the application log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, message: &str) {
        info!("event=user_notice module=controller status=ok message=\"{message}\"");
    }
}
