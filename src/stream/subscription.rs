use super::*;

/// Handed back by `Observable::subscribe()`. The only thing it can do is cancel.
#[derive(derivative::Derivative)]
#[derivative(Debug(bound = ""))]
pub struct Subscription<T, E> {
    observer: Arc<Observer<T, E>>,
}

impl<T, E> Subscription<T, E> {
    pub(super) fn new(observer: Arc<Observer<T, E>>) -> Self {
        Self { observer }
    }

    /// Stops delivery and runs the teardown if it hasn't run yet. Safe to call any number of
    /// times.
    pub fn unsubscribe(&self) {
        self.observer.unsubscribe();
    }

    /// If the stream has ended, whether by unsubscription, error or completion
    pub fn is_closed(&self) -> bool {
        self.observer.is_terminated()
    }
}

impl<T, E> Drop for Subscription<T, E> {
    fn drop(&mut self) {
        if !self.observer.is_terminated() {
            warn!(
                "Subscription<{}> dropped without being unsubscribed",
                short_type_name::<T>()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (MockTeardown, Subscription<i32, ()>) {
        let teardown = MockTeardown::new();
        let observer = Arc::new(Observer::new(Handlers::new()));
        observer.set_teardown(teardown.get()).unwrap();
        (teardown, Subscription::new(observer))
    }

    #[test]
    fn new_subscription_is_open() {
        let (_, subscription) = setup();
        assert!(!subscription.is_closed());
        subscription.unsubscribe();
    }

    #[test]
    fn unsubscribe_closes_and_tears_down() {
        let (teardown, subscription) = setup();
        subscription.unsubscribe();
        assert!(subscription.is_closed());
        assert_eq!(teardown.run_count(), 1);
    }

    #[test]
    fn unsubscribing_twice_tears_down_once() {
        let (teardown, subscription) = setup();
        subscription.unsubscribe();
        subscription.unsubscribe();
        assert_eq!(teardown.run_count(), 1);
    }

    #[test]
    fn dropping_does_not_unsubscribe() {
        let (teardown, subscription) = setup();
        drop(subscription);
        assert_eq!(teardown.run_count(), 0);
    }
}
