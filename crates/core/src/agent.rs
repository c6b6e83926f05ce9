//! Tutoring Agent
//!
//! The agent is the dispatcher of a tutoring session: it owns the current
//! learner profile together with the strategy resolved from it, and forwards
//! every topic to that strategy. Switching profile swaps the strategy out
//! wholesale; strategies themselves are never mutated.

use crate::completion::CompletionBackend;
use crate::profile::UserProfile;
use crate::strategy::{TeachingStrategy, resolve};
use crate::topic::Topic;
use std::sync::Arc;
use tracing::info;

/// A single learner's tutoring session.
///
/// `active_strategy` is always the strategy resolved from `current_profile`;
/// both are only ever assigned together.
pub struct TutoringAgent {
    current_profile: UserProfile,
    active_strategy: Box<dyn TeachingStrategy>,
    backend: Arc<dyn CompletionBackend>,
}

impl TutoringAgent {
    /// Starts a session for `profile`, binding the matching strategy.
    pub fn new(profile: UserProfile, backend: Arc<dyn CompletionBackend>) -> Self {
        let active_strategy = resolve(profile, backend.clone());
        info!(profile = %profile, "Tutoring session started");
        Self {
            current_profile: profile,
            active_strategy,
            backend,
        }
    }

    /// Rebinds the session to `profile`. Re-selecting the current profile is harmless.
    pub fn set_profile(&mut self, profile: UserProfile) {
        info!(from = %self.current_profile, to = %profile, "Switching profile");
        let strategy = resolve(profile, self.backend.clone());
        self.current_profile = profile;
        self.active_strategy = strategy;
    }

    /// Explains `topic` using the active strategy. The result is returned untouched.
    pub async fn teach(&self, topic: &Topic) -> String {
        info!(topic = %topic, profile = %self.current_profile, "Looking up explanation");
        self.active_strategy.teach(topic).await
    }

    pub fn profile(&self) -> UserProfile {
        self.current_profile
    }

    pub fn strategy(&self) -> &dyn TeachingStrategy {
        self.active_strategy.as_ref()
    }
}
