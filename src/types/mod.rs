//! Core types for sonar.

pub mod generation;
pub mod message;
pub mod request;
pub mod response;
pub mod stream;

pub use generation::*;
pub use message::*;
pub use request::*;
pub use response::*;
pub use stream::*;
