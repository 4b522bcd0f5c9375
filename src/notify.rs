//! Desktop notification port
//!
//! Notifications are best-effort: if the helper binary is missing the message
//! is dropped silently. The port is injected so tests never shell out.

use std::rc::Rc;

use regex::Regex;

use crate::io::Io;

const TITLE: &str = "Webbynode";

/// Fire-and-forget notification sink
pub trait Notifier {
    fn message(&self, text: &str);
}

/// growlnotify-backed notifier
pub struct DesktopNotifier {
    io: Rc<dyn Io>,
}

impl DesktopNotifier {
    pub fn new(io: Rc<dyn Io>) -> Self {
        DesktopNotifier { io }
    }

    fn installed(&self) -> bool {
        self.io.in_path("growlnotify")
    }
}

impl Notifier for DesktopNotifier {
    fn message(&self, text: &str) {
        if !self.installed() {
            return;
        }
        let clean = strip_ansi(text);
        // Failure to notify is never an error
        let _ = self
            .io
            .exec(&format!("growlnotify -t \"{TITLE}\" -m \"{clean}\""));
    }
}

/// Notifier that drops everything; used in tests and non-interactive runs
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn message(&self, _text: &str) {}
}

fn strip_ansi(text: &str) -> String {
    let re = Regex::new(r"\x1B\[([0-9]{1,2}(;[0-9]{1,2})?)?[mK]").expect("valid ansi pattern");
    re.replace_all(text, "").to_string()
}
