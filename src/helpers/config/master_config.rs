use super::*;

/// How the demo handlers log each request they receive
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RequestLogFormat {
    /// Method, host and path on one line
    Summary,
    /// The whole request serialized as JSON
    Json,
}

/// Configuration for the whole pushstream demo program
#[derive(Debug)]
pub struct MasterConfig {
    /// If to abort with success (for example, after showing --help)
    pub happy_exit: bool,
    /// JSON file to read requests from, or None to use the built-in mock requests
    pub requests_file: Option<String>,
    pub subscriptions: u32,
    pub unsubscribe_immediately: bool,
    pub request_log: RequestLogFormat,
}

impl Default for MasterConfig {
    /// NOTE: the true default configuration you get when you run pushstream is determined by
    /// the defaults in config_options(), this is just an empty struct
    fn default() -> Self {
        Self {
            happy_exit: false,
            requests_file: None,
            subscriptions: 0,
            unsubscribe_immediately: false,
            request_log: RequestLogFormat::Summary,
        }
    }
}
