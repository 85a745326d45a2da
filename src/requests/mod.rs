//! An HTTP-shaped example payload for the stream to carry. Nothing in here is known to the stream
//! core; it only supplies values.

use super::*;
use serde::{Deserialize, Serialize};

mod request;
mod request_handlers;
mod requests_mock;
mod status;

pub use request::{HttpMethod, Request, RequestError, User};
pub use request_handlers::{handle_complete, handle_error, handle_request};
pub use requests_mock::{load_requests, requests_mock};
pub use status::{HttpStatus, Status, StatusFactory};
