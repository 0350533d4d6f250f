//! Domain layer for tripmate
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Survey
//!
//! A guided, steppable conversation that collects travel preferences:
//!
//! - **QuestionnaireEngine**: walks the questions, owns answers and transcript
//! - **DateRangeSelector**: calendar sub-flow that turns clicks into a date answer
//!
//! ## Recommendation
//!
//! - **RecommendationMatcher**: filter, rank and backfill places into a
//!   fixed-size result

pub mod calendar;
pub mod config;
pub mod core;
pub mod place;
pub mod recommendation;
pub mod survey;

// Re-export commonly used types
pub use calendar::{
    CalendarMonth, DateRangeSelector, DateSelection, SelectOutcome, TripLength, format_date,
    format_range, weekday_headers,
};
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use place::{
    Bookmarks, Category, EstimatedCost, Feedback, FeedbackReceipt, Place, PlaceDetails, PlaceId,
    Rating,
};
pub use recommendation::{
    DEFAULT_TARGET_COUNT, RecommendationMatcher, RecommendationRequest, RecommendationResult,
};
pub use survey::{
    Answers, ChatMessage, ChoiceOption, DateProgress, Origin, Question, QuestionKind,
    QuestionnaireEngine, SubmitOutcome, Survey, Transcript,
};
