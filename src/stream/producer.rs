use super::*;

/// Starts a stream for one subscriber. Called once per `Observable::subscribe()`, synchronously,
/// with the fresh observer for that subscription. The returned teardown is bound to the observer.
pub trait Producer<T, E>: Send + Sync {
    fn produce(&self, observer: &Arc<Observer<T, E>>) -> Teardown;
}

impl<T, E, F> Producer<T, E> for F
where
    F: Fn(&Arc<Observer<T, E>>) -> Teardown + Send + Sync,
{
    fn produce(&self, observer: &Arc<Observer<T, E>>) -> Teardown {
        self(observer)
    }
}

/// Emits each item in order then completes
pub struct IterProducer<T> {
    items: Vec<T>,
}

impl<T> IterProducer<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T, E> Producer<T, E> for IterProducer<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn produce(&self, observer: &Arc<Observer<T, E>>) -> Teardown {
        for item in &self.items {
            if observer.is_terminated() {
                break;
            }
            observer.next(item.clone());
        }
        observer.complete();
        let name = short_type_name::<T>();
        let count = self.items.len();
        Teardown::new(move || info!("unsubscribed from {} source of {} items", name, count))
    }
}

/// Wraps a producer that can fail before it has a teardown to hand back. The failure is delivered
/// through the observer's error channel.
pub struct FallibleProducer<F> {
    f: F,
}

impl<F> FallibleProducer<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<T, E, F> Producer<T, E> for FallibleProducer<F>
where
    F: Fn(&Arc<Observer<T, E>>) -> Result<Teardown, E> + Send + Sync,
{
    fn produce(&self, observer: &Arc<Observer<T, E>>) -> Teardown {
        match (self.f)(observer) {
            Ok(teardown) => teardown,
            Err(e) => {
                debug!("producer failed, erroring observer");
                observer.error(e);
                Teardown::noop()
            }
        }
    }
}
