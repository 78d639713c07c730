//! Progress and status reporting seam
//!
//! The scaffolder never prints directly. It talks to a [`Reporter`], and every
//! fan-out holds a [`ProgressGuard`] for its lifetime so an indicator is always
//! closed, on success or failure.

/// Receives status messages from the scaffolder
pub trait Reporter {
    /// Begin a task that completes in `total` steps
    fn task(&self, label: &str, total: usize) -> Box<dyn TaskProgress>;

    fn info(&self, message: &str);

    fn warning(&self, message: &str);
}

/// A running task indicator
pub trait TaskProgress {
    fn advance(&mut self, completed: usize, total: usize);

    fn finish(&mut self, message: &str);

    fn fail(&mut self, message: &str);
}

/// Scoped handle over a [`TaskProgress`]
///
/// Dropping a guard that was neither finished nor failed marks the task failed.
pub struct ProgressGuard {
    inner: Box<dyn TaskProgress>,
    label: String,
    closed: bool,
}

impl ProgressGuard {
    pub fn start(reporter: &dyn Reporter, label: &str, total: usize) -> Self {
        Self {
            inner: reporter.task(label, total),
            label: label.to_string(),
            closed: false,
        }
    }

    pub fn advance(&mut self, completed: usize, total: usize) {
        self.inner.advance(completed, total);
    }

    pub fn finish(mut self, message: &str) {
        self.closed = true;
        self.inner.finish(message);
    }

    pub fn fail(mut self, message: &str) {
        self.closed = true;
        self.inner.fail(message);
    }
}

impl Drop for ProgressGuard {
    fn drop(&mut self) {
        if !self.closed {
            self.inner.fail(&format!("{} interrupted", self.label));
        }
    }
}

/// Reporter that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

struct NullTask;

impl TaskProgress for NullTask {
    fn advance(&mut self, _completed: usize, _total: usize) {}
    fn finish(&mut self, _message: &str) {}
    fn fail(&mut self, _message: &str) {}
}

impl Reporter for NullReporter {
    fn task(&self, _label: &str, _total: usize) -> Box<dyn TaskProgress> {
        Box::new(NullTask)
    }

    fn info(&self, _message: &str) {}

    fn warning(&self, _message: &str) {}
}
