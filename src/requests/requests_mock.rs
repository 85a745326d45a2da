use super::*;
use std::time::SystemTime;

/// The two requests the demo streams when no file is given: creating a user, then fetching one
pub fn requests_mock() -> Vec<Request> {
    let user = User {
        name: "User Name".to_owned(),
        age: 26,
        roles: vec!["user".to_owned(), "admin".to_owned()],
        created_at: SystemTime::now(),
        is_deleted: false,
    };
    vec![
        Request {
            method: HttpMethod::Post,
            host: "service.example".to_owned(),
            path: "user".to_owned(),
            body: Some(user),
            params: HashMap::new(),
        },
        Request {
            method: HttpMethod::Get,
            host: "service.example".to_owned(),
            path: "user".to_owned(),
            body: None,
            params: vec![("id".to_owned(), "3f5h67s4s".to_owned())]
                .into_iter()
                .collect(),
        },
    ]
}

/// Reads a JSON array of requests
pub fn load_requests(path: &str, fs: &Filesystem) -> Result<Vec<Request>, Box<dyn Error>> {
    let contents = fs
        .read(path)
        .map_err(|e| format!("reading {}: {}", path, e))?;
    let requests: Vec<Request> =
        serde_json::from_str(&contents).map_err(|e| format!("parsing {}: {}", path, e))?;
    debug!("loaded {} requests from {}", requests.len(), path);
    Ok(requests)
}
