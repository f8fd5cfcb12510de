use std::sync::{Arc, Mutex};

/// Operator-facing confirmation channel.
pub trait Reporter: Send + Sync {
    fn report(&self, message: &str);
}

/// Prints each message as one line on stdout.
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn report(&self, message: &str) {
        println!("{message}");
    }
}

/// Collects messages for test assertions.
#[derive(Default)]
pub struct MemoryReporter {
    messages: Mutex<Vec<String>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

impl<R: Reporter + ?Sized> Reporter for Arc<R> {
    fn report(&self, message: &str) {
        (**self).report(message)
    }
}
