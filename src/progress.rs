// src/progress.rs
/// Progress reporting for runs over several inputs.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of inputs.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One input was parsed and extracted.
    fn item_done(&mut self, _label: &str) {}

    /// One input could not be read or processed; the run goes on.
    fn item_failed(&mut self, _label: &str, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Counts outcomes; handy for tests and summaries.
#[derive(Debug, Default)]
pub struct CountingProgress {
    pub total: usize,
    pub logged: usize,
    pub done: usize,
    pub failed: usize,
    pub finished: bool,
}

impl Progress for CountingProgress {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, _msg: &str) { self.logged += 1; }
    fn item_done(&mut self, _label: &str) { self.done += 1; }
    fn item_failed(&mut self, _label: &str, _err: &str) { self.failed += 1; }
    fn finish(&mut self) { self.finished = true; }
}
