//! Core of the math tutor: learner profiles, teaching strategies and the
//! agent that dispatches topics to the strategy bound to the current profile.

pub mod agent;
pub mod completion;
pub mod profile;
pub mod strategy;
pub mod topic;

pub use agent::TutoringAgent;
pub use completion::{CompletionBackend, CompletionError, CompletionRequest};
pub use profile::{ProfileError, UserProfile};
pub use strategy::{ERROR_MARKER, TeachingStrategy, TeachingStyle, resolve};
pub use topic::{Topic, TopicError};
