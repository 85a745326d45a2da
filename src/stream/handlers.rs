use super::*;

type NextFn<T> = Box<dyn Fn(T) + Send + Sync>;
type ErrorFn<E> = Box<dyn Fn(E) + Send + Sync>;
type CompleteFn = Box<dyn Fn() + Send + Sync>;

/// The callbacks a consumer hands to `Observable::subscribe()`. Every callback is optional; a
/// missing one silently drops its signal.
#[derive(derivative::Derivative)]
#[derivative(Default(bound = ""))]
pub struct Handlers<T, E> {
    on_next: Option<NextFn<T>>,
    on_error: Option<ErrorFn<E>>,
    on_complete: Option<CompleteFn>,
}

impl<T, E> Handlers<T, E> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_next<F>(mut self, f: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        self.on_next = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_error<F>(mut self, f: F) -> Self
    where
        F: Fn(E) + Send + Sync + 'static,
    {
        self.on_error = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_complete<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_complete = Some(Box::new(f));
        self
    }

    pub fn has_next(&self) -> bool {
        self.on_next.is_some()
    }

    pub fn has_error(&self) -> bool {
        self.on_error.is_some()
    }

    pub fn has_complete(&self) -> bool {
        self.on_complete.is_some()
    }

    pub(super) fn next(&self, value: T) {
        if let Some(f) = &self.on_next {
            f(value);
        }
    }

    pub(super) fn error(&self, error: E) {
        if let Some(f) = &self.on_error {
            f(error);
        }
    }

    pub(super) fn complete(&self) {
        if let Some(f) = &self.on_complete {
            f();
        }
    }
}

impl<T, E> std::fmt::Debug for Handlers<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Handlers")
            .field("next", &self.has_next())
            .field("error", &self.has_error())
            .field("complete", &self.has_complete())
            .finish()
    }
}
