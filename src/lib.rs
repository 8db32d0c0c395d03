pub mod config;
pub mod error;
pub mod render;
pub mod reply;
pub mod routes;
pub mod sink;
pub mod state;
pub mod utils {
    pub mod json;
}

pub use render::{write_error, write_json, ErrorEnvelope, Payload};
pub use sink::{ResponseBuffer, ResponseSink, StreamSink};
