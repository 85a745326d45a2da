use super::*;

/// Cleanup to run when a subscription ends, whether by error, completion or unsubscription.
/// Running consumes it, so a teardown can never run twice.
#[derive(derivative::Derivative)]
#[derivative(Debug)]
pub struct Teardown {
    #[derivative(Debug = "ignore")]
    f: Box<dyn FnOnce() + Send>,
}

impl Teardown {
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self { f: Box::new(f) }
    }

    /// For producers that have nothing to clean up
    pub fn noop() -> Self {
        Self::new(|| ())
    }

    pub fn run(self) {
        (self.f)()
    }
}

impl Default for Teardown {
    fn default() -> Self {
        Self::noop()
    }
}
