use super::*;
use std::time::SystemTime;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HttpMethod {
    #[serde(rename = "GET")]
    Get,
    #[serde(rename = "POST")]
    Post,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub age: u32,
    pub roles: Vec<String>,
    pub created_at: SystemTime,
    pub is_deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub method: HttpMethod,
    pub host: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<User>,
    #[serde(default)]
    pub params: HashMap<String, String>,
}

impl Request {
    /// Method, host and path, for logging
    pub fn summary(&self) -> String {
        format!("{:?} {}/{}", self.method, self.host, self.path)
    }
}

/// Error type of the request stream. Carries no information.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RequestError;

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "request failed")
    }
}

impl Error for RequestError {}
