use super::*;
use std::panic::{self, AssertUnwindSafe};

/// A reusable stream template. Each `subscribe()` runs the producer again against a new observer,
/// so subscriptions never share state unless the producer makes them.
#[derive(derivative::Derivative)]
#[derivative(Clone(bound = ""))]
pub struct Observable<T, E> {
    producer: Arc<dyn Producer<T, E>>,
}

impl<T: 'static, E: 'static> Observable<T, E> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Arc<Observer<T, E>>) -> Teardown + Send + Sync + 'static,
    {
        Self::from_producer(f)
    }

    pub fn from_producer<P>(producer: P) -> Self
    where
        P: Producer<T, E> + 'static,
    {
        Self {
            producer: Arc::new(producer),
        }
    }

    /// Like `new()`, but the producer may fail instead of returning a teardown. A failure is sent
    /// to the subscriber's error handler.
    pub fn try_new<F>(f: F) -> Self
    where
        F: Fn(&Arc<Observer<T, E>>) -> Result<Teardown, E> + Send + Sync + 'static,
    {
        Self::from_producer(FallibleProducer::new(f))
    }

    /// Emits every item in order, then completes. All of it happens inside `subscribe()`.
    #[allow(clippy::should_implement_trait)]
    pub fn from<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Clone + Send + Sync,
    {
        Self::from_producer(IterProducer::new(items.into_iter().collect()))
    }

    /// Runs the producer with a new observer wrapping `handlers` and binds the teardown it returns.
    /// If the producer panics the observer is terminated (no handler fires) and the panic carries
    /// on up to the caller.
    pub fn subscribe(&self, handlers: Handlers<T, E>) -> Subscription<T, E> {
        trace!("subscribing {:?}", handlers);
        let observer = Arc::new(Observer::new(handlers));
        match panic::catch_unwind(AssertUnwindSafe(|| self.producer.produce(&observer))) {
            Ok(teardown) => observer
                .set_teardown(teardown)
                .or_log_warn("discarding teardown returned by producer"),
            Err(payload) => {
                error!("{}", ProducerPanicked(attempt_any_to_string(&*payload)));
                observer.unsubscribe();
                panic::resume_unwind(payload);
            }
        }
        Subscription::new(observer)
    }
}
