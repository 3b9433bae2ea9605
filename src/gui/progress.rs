// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    failed: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, failed: 0 }
    }

    pub fn failed(&self) -> bool {
        self.failed > 0
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        self.set_status(format!("Read {}", label));
    }
    fn item_failed(&mut self, _label: &str, err: &str) {
        self.failed += 1;
        // The error already names the file.
        self.set_status(format!("Error: {}", err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_lands_in_status() {
        let status = Arc::new(Mutex::new(s!("Idle")));
        let mut p = GuiProgress::new(status.clone());
        p.log("Reading a.html");
        assert_eq!(*status.lock().unwrap(), "Reading a.html");
        p.item_done("a.html");
        assert_eq!(*status.lock().unwrap(), "Read a.html");
        p.item_failed("b.html", "Cannot read 'b.html': gone");
        assert_eq!(*status.lock().unwrap(), "Error: Cannot read 'b.html': gone");
        assert!(p.failed());
    }
}
