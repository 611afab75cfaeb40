//! Request payload types.
//!
//! Each payload knows how to turn itself into the provider request it
//! triggers.

mod chat;
mod places;
mod sentiment;
mod validations;

pub use chat::TravelChat;
pub use places::PlaceQuery;
pub use sentiment::AnalyzeSentiment;
