//! Blocking user notifications

use std::rc::Rc;

use tracing::warn;

/// Shows a message the visitor has to acknowledge. Only the quote form's
/// required-field check uses it.
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

/// Writes the message to the log. Used during server rendering, where there
/// is nobody to acknowledge an alert.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        warn!(notification = message, "User notification shown");
    }
}
