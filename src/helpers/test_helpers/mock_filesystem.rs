use super::*;

/// An in-memory filesystem holding only the files a test adds. Clones share the same files.
#[derive(Debug, Clone, Default)]
pub struct MockFilesystem(Arc<Mutex<HashMap<String, String>>>);

impl MockFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(self, path: &str, contents: &str) -> Self {
        self.0
            .lock()
            .unwrap()
            .insert(path.to_owned(), contents.to_owned());
        self
    }

    pub fn boxed(&self) -> Filesystem {
        Box::new(self.clone())
    }
}

impl FileSource for MockFilesystem {
    fn read_optional(&self, path: &str) -> std::io::Result<Option<String>> {
        Ok(self.0.lock().unwrap().get(path).cloned())
    }
}
