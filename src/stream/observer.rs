use super::*;

#[derive(Debug)]
enum TeardownSlot {
    Unbound,
    Bound(Teardown),
    Released,
}

#[derive(Debug)]
struct ObserverState {
    terminated: bool,
    teardown: TeardownSlot,
}

/// The receiving end of a single subscription. Wraps the consumer's handlers and makes sure none
/// of them fire once the observer has terminated (by error, completion or unsubscription), and
/// that its teardown runs at most once.
///
/// No user code ever runs while the state lock is held, so handlers and teardowns are free to call
/// back into the observer.
#[derive(derivative::Derivative)]
#[derivative(Debug(bound = ""))]
pub struct Observer<T, E> {
    handlers: Handlers<T, E>,
    state: Mutex<ObserverState>,
}

impl<T, E> Observer<T, E> {
    pub fn new(handlers: Handlers<T, E>) -> Self {
        Self {
            handlers,
            state: Mutex::new(ObserverState {
                terminated: false,
                teardown: TeardownSlot::Unbound,
            }),
        }
    }

    fn state(&self) -> MutexGuard<ObserverState> {
        lock_unpoisoned(&self.state)
    }

    pub fn is_terminated(&self) -> bool {
        self.state().terminated
    }

    pub fn next(&self, value: T) {
        if !self.is_terminated() {
            self.handlers.next(value);
        } else {
            trace!("dropped value sent to terminated observer");
        }
    }

    pub fn error(&self, error: E) {
        if self.terminate() {
            self.handlers.error(error);
            self.release_teardown();
        }
    }

    pub fn complete(&self) {
        if self.terminate() {
            self.handlers.complete();
            self.release_teardown();
        }
    }

    /// Ends the subscription without notifying the handlers. Only the teardown runs. Calling this
    /// more than once (or after an error or completion) does nothing.
    pub fn unsubscribe(&self) {
        if self.terminate() {
            debug!("observer unsubscribed");
        }
        self.release_teardown();
    }

    /// Binds the cleanup for this subscription. The first binding wins; later ones are rejected
    /// and dropped without running. If the observer already terminated (a producer that finishes
    /// synchronously does this before its teardown can be bound) the teardown runs immediately.
    pub fn set_teardown(&self, teardown: Teardown) -> StreamResult<()> {
        let run_now = {
            let mut state = self.state();
            if !matches!(state.teardown, TeardownSlot::Unbound) {
                return Err(TeardownAlreadyBound);
            }
            if state.terminated {
                state.teardown = TeardownSlot::Released;
                Some(teardown)
            } else {
                state.teardown = TeardownSlot::Bound(teardown);
                None
            }
        };
        if let Some(teardown) = run_now {
            trace!("running teardown bound after termination");
            teardown.run();
        }
        Ok(())
    }

    /// Moves from active to terminated. Returns true only for the call that made the transition.
    fn terminate(&self) -> bool {
        let mut state = self.state();
        if state.terminated {
            false
        } else {
            state.terminated = true;
            true
        }
    }

    fn release_teardown(&self) {
        let teardown = {
            let mut state = self.state();
            match std::mem::replace(&mut state.teardown, TeardownSlot::Released) {
                TeardownSlot::Bound(teardown) => Some(teardown),
                TeardownSlot::Unbound => {
                    // Nothing to release yet; the teardown runs as soon as it is bound
                    state.teardown = TeardownSlot::Unbound;
                    None
                }
                TeardownSlot::Released => None,
            }
        };
        if let Some(teardown) = teardown {
            teardown.run();
        }
    }
}
