//! Teaching Strategies
//!
//! Each strategy pitches an explanation at one audience. A strategy is pure
//! configuration (a [`TeachingStyle`]) plus a handle to the injected
//! completion backend; the three variants differ only in their style table.

use crate::completion::{CompletionBackend, CompletionRequest};
use crate::profile::UserProfile;
use crate::topic::Topic;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Prefix of every string returned by a strategy when the backend call fails.
pub const ERROR_MARKER: &str = "Error calling API: ";

/// The immutable configuration that defines how one audience is taught.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeachingStyle {
    /// System prompt establishing the tutor's persona.
    pub persona: &'static str,
    /// User prompt with a `{topic}` placeholder.
    pub prompt_template: &'static str,
    /// Creativity knob passed to the backend as the sampling temperature.
    pub temperature: f32,
    /// Response length budget in tokens.
    pub max_tokens: u32,
}

impl TeachingStyle {
    pub fn render_prompt(&self, topic: &Topic) -> String {
        self.prompt_template.replace("{topic}", topic.as_str())
    }

    /// Builds the backend request for a topic in this style.
    pub fn request_for(&self, topic: &Topic) -> CompletionRequest {
        CompletionRequest {
            system_prompt: self.persona.to_string(),
            user_message: self.render_prompt(topic),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

pub const EARLY_YEARS_STYLE: TeachingStyle = TeachingStyle {
    persona: "You are a math teacher for young children. Speak in a playful, cheerful way.",
    prompt_template: "Explain '{topic}' in a fun way.",
    temperature: 0.7,
    max_tokens: 150,
};

pub const ELEMENTARY_STYLE: TeachingStyle = TeachingStyle {
    persona: "You are an elementary school math tutor. Use practical examples.",
    prompt_template: "Explain the concept of '{topic}'.",
    temperature: 0.5,
    max_tokens: 200,
};

pub const SECONDARY_STYLE: TeachingStyle = TeachingStyle {
    persona: "You are a secondary school math teacher. Be technical and formal.",
    prompt_template: "Discuss the topic '{topic}'.",
    temperature: 0.4,
    max_tokens: 250,
};

/// Defines the contract every teaching behavior must satisfy.
///
/// `teach` never fails: backend errors are folded into a string that starts
/// with [`ERROR_MARKER`], so callers can always print whatever comes back.
#[async_trait]
pub trait TeachingStrategy: Send + Sync {
    /// The profile this strategy is built for.
    fn profile(&self) -> UserProfile;

    /// The persona, template and generation parameters used by `teach`.
    fn style(&self) -> &TeachingStyle;

    /// Produces an explanation of `topic` for this strategy's audience.
    ///
    /// Makes exactly one call to the completion backend.
    async fn teach(&self, topic: &Topic) -> String;
}

/// Sends one styled request and folds any failure into an error string.
async fn explain(backend: &dyn CompletionBackend, style: &TeachingStyle, topic: &Topic) -> String {
    let request = style.request_for(topic);
    debug!(
        temperature = request.temperature,
        max_tokens = request.max_tokens,
        "Requesting explanation"
    );
    match backend.complete(request).await {
        Ok(text) => text,
        Err(err) => {
            warn!(error = %err, "Completion backend call failed");
            format!("{ERROR_MARKER}{err}")
        }
    }
}

/// Playful explanations for young children.
pub struct EarlyYearsStrategy {
    backend: Arc<dyn CompletionBackend>,
}

impl EarlyYearsStrategy {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl TeachingStrategy for EarlyYearsStrategy {
    fn profile(&self) -> UserProfile {
        UserProfile::EarlyYears
    }

    fn style(&self) -> &TeachingStyle {
        &EARLY_YEARS_STYLE
    }

    async fn teach(&self, topic: &Topic) -> String {
        explain(self.backend.as_ref(), self.style(), topic).await
    }
}

/// Example-driven explanations for elementary school learners.
pub struct ElementaryStrategy {
    backend: Arc<dyn CompletionBackend>,
}

impl ElementaryStrategy {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl TeachingStrategy for ElementaryStrategy {
    fn profile(&self) -> UserProfile {
        UserProfile::Elementary
    }

    fn style(&self) -> &TeachingStyle {
        &ELEMENTARY_STYLE
    }

    async fn teach(&self, topic: &Topic) -> String {
        explain(self.backend.as_ref(), self.style(), topic).await
    }
}

/// Formal, technical explanations for secondary school learners.
pub struct SecondaryStrategy {
    backend: Arc<dyn CompletionBackend>,
}

impl SecondaryStrategy {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl TeachingStrategy for SecondaryStrategy {
    fn profile(&self) -> UserProfile {
        UserProfile::Secondary
    }

    fn style(&self) -> &TeachingStyle {
        &SECONDARY_STYLE
    }

    async fn teach(&self, topic: &Topic) -> String {
        explain(self.backend.as_ref(), self.style(), topic).await
    }
}

/// Maps a profile to a freshly built strategy sharing the given backend.
///
/// The match is exhaustive, so adding a profile without a strategy is a
/// compile error rather than a silent fallback to the wrong audience.
pub fn resolve(profile: UserProfile, backend: Arc<dyn CompletionBackend>) -> Box<dyn TeachingStrategy> {
    match profile {
        UserProfile::EarlyYears => Box::new(EarlyYearsStrategy::new(backend)),
        UserProfile::Elementary => Box::new(ElementaryStrategy::new(backend)),
        UserProfile::Secondary => Box::new(SecondaryStrategy::new(backend)),
    }
}
