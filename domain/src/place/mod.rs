//! Place catalog domain

pub mod bookmarks;
pub mod cost;
pub mod entities;
pub mod feedback;

pub use bookmarks::Bookmarks;
pub use cost::EstimatedCost;
pub use entities::{Category, Place, PlaceDetails, PlaceId};
pub use feedback::{Feedback, FeedbackReceipt, Rating};
