//! Request building, sending, and response consumption in one call.

pub mod convenience;
pub mod probe;
pub mod stream;
pub mod text;

pub use convenience::{ask, ask_stream};
pub use probe::probe_web_search;
pub use stream::{collect_stream, stream_text};
pub use text::generate_text;
