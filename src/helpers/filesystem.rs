use std::io;

/// Where config and request files are read from. Tests swap in an in-memory version.
pub trait FileSource {
    /// Contents of the file at `path`, or None if nothing exists there
    fn read_optional(&self, path: &str) -> io::Result<Option<String>>;

    /// Like `read_optional()`, but a missing file is a `NotFound` error
    fn read(&self, path: &str) -> io::Result<String> {
        self.read_optional(path)?.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path),
            )
        })
    }
}

pub type Filesystem = Box<dyn FileSource>;

pub fn real_filesystem() -> Filesystem {
    Box::new(DiskFiles)
}

struct DiskFiles;

impl FileSource for DiskFiles {
    fn read_optional(&self, path: &str) -> io::Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace_path(parts: &[&str]) -> String {
        let mut buf = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        for part in parts {
            buf.push(part);
        }
        buf.to_str().unwrap().to_string()
    }

    #[test]
    fn reads_manifest() {
        let files = real_filesystem();
        let contents = files
            .read_optional(&workspace_path(&["Cargo.toml"]))
            .unwrap()
            .unwrap();
        assert!(contents.contains("name = \"pushstream\""));
    }

    #[test]
    fn missing_file_is_none() {
        let files = real_filesystem();
        let contents = files
            .read_optional(&workspace_path(&["not-a-file.txt"]))
            .unwrap();
        assert_eq!(contents, None);
    }

    #[test]
    fn reading_missing_file_is_not_found() {
        let files = real_filesystem();
        let err = files
            .read(&workspace_path(&["not-a-file.txt"]))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("not-a-file.txt"));
    }

    #[test]
    fn reading_directory_is_an_error() {
        let files = real_filesystem();
        assert!(files.read_optional(&workspace_path(&["src"])).is_err());
    }

    #[test]
    fn demo_requests_file_loads() {
        let files = real_filesystem();
        let path = workspace_path(&["demos", "requests.json"]);
        let requests = crate::requests::load_requests(&path, &files).unwrap();
        assert_eq!(requests.len(), 2);
    }
}
