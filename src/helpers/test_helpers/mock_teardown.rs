use super::*;

/// Hands out teardowns that count how many times any of them has run
#[derive(Debug, Clone)]
pub struct MockTeardown(Arc<Mutex<u32>>);

impl MockTeardown {
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(0)))
    }

    pub fn get(&self) -> Teardown {
        let count = self.0.clone();
        Teardown::new(move || *count.lock().unwrap() += 1)
    }

    pub fn run_count(&self) -> u32 {
        *self.0.lock().unwrap()
    }
}
