use super::*;

/// Locks a mutex, taking the data back out of a poisoned lock. Only for locks that never have user
/// code run while they're held, so a panic can't leave the data half-updated.
pub fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> MutexGuard<T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
