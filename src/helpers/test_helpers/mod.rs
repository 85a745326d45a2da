use super::*;

mod mock_filesystem;
mod mock_handlers;
mod mock_teardown;

pub use mock_filesystem::*;
pub use mock_handlers::*;
pub use mock_teardown::*;
