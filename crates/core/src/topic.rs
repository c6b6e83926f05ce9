use std::fmt;
use std::str::FromStr;

/// A subject the learner wants explained.
///
/// A `Topic` is always trimmed and non-empty, so a strategy never has to
/// guard against blank input before calling the completion backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Topic(String);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TopicError {
    #[error("Topic must not be empty")]
    Empty,
}

impl Topic {
    /// Creates a topic from raw user input, trimming surrounding whitespace.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, TopicError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TopicError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Topic {
    type Err = TopicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Topic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
