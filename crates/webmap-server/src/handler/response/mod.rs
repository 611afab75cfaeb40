//! Response types for HTTP handlers.

mod chat;
mod errors;
mod monitors;
mod places;
mod sentiment;

pub use chat::*;
pub use errors::*;
pub use monitors::*;
pub use places::*;
pub use sentiment::*;
