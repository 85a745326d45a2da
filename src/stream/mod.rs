//! The observable/observer pair and the plumbing that ties a subscription to its teardown

use super::*;

mod handlers;
mod observable;
mod observer;
mod producer;
mod stream_error;
mod subscription;
mod teardown;

pub use handlers::Handlers;
pub use observable::Observable;
pub use observer::Observer;
pub use producer::Producer;
pub use stream_error::{StreamError, StreamResult};
pub use subscription::Subscription;
pub use teardown::Teardown;

use producer::{FallibleProducer, IterProducer};
use stream_error::StreamError::*;
