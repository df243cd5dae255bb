//! Seam between review logic and whatever shows messages to the user.
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Info => "notification-info",
            Severity::Success => "notification-success",
            Severity::Error => "notification-error",
        }
    }
}

pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
    fn notify(&self, message: &str, severity: Severity) {
        (**self).notify(message, severity)
    }
}

/// Keeps every notification; used where nothing is displayed.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: RefCell<Vec<(String, Severity)>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<(String, Severity)> {
        self.sent.borrow().clone()
    }

    pub fn last(&self) -> Option<(String, Severity)> {
        self.sent.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.sent.borrow_mut().push((message.to_string(), severity));
    }
}
