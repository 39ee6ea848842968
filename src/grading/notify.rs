use super::model::{Severity, Toast};
use super::ports::Notifier;

/// Collects toasts raised while handling one request so the response can
/// carry them back to the front end.
#[derive(Debug, Default)]
pub struct ToastQueue {
    pending: Vec<Toast>,
}

impl ToastQueue {
    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.pending)
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, title: &str, message: &str, severity: Severity) {
        self.pending.push(Toast {
            title: title.to_string(),
            message: message.to_string(),
            variant: severity,
        });
    }
}
