use super::*;

/// A signal delivered to a handler set
#[derive(Debug, Clone, PartialEq)]
pub enum Event<T, E> {
    Next(T),
    Error(E),
    Complete,
}

/// Records every signal its handlers receive, in order
pub struct MockHandlers<T, E>(Arc<Mutex<Vec<Event<T, E>>>>);

impl<T, E> MockHandlers<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(Vec::new())))
    }

    /// A full handler set that records into this mock
    pub fn handlers(&self) -> Handlers<T, E> {
        let (next, error, complete) = (self.0.clone(), self.0.clone(), self.0.clone());
        Handlers::new()
            .on_next(move |value| next.lock().unwrap().push(Event::Next(value)))
            .on_error(move |e| error.lock().unwrap().push(Event::Error(e)))
            .on_complete(move || complete.lock().unwrap().push(Event::Complete))
    }

    pub fn events(&self) -> Vec<Event<T, E>> {
        self.0.lock().unwrap().clone()
    }
}
