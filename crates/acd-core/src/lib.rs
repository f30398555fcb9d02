pub mod config;
pub mod logging;

pub mod node_id;
pub mod request;
pub mod transport;

pub use node_id::{is_valid_id, NodeId};
pub use request::{run_with_retry, CallError, RequestError};
