//! Learner profiles.
//!
//! A [`UserProfile`] names the audience a lesson is pitched at. The set is
//! closed: every profile maps to exactly one teaching strategy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The audience level that drives tone, vocabulary and generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserProfile {
    EarlyYears,
    Elementary,
    Secondary,
}

/// Returned when a profile name from outside the core does not match any profile.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Unknown profile '{0}' (expected one of: early-years, elementary, secondary)")]
    Unknown(String),
}

impl UserProfile {
    /// All profiles in menu order.
    pub const ALL: [UserProfile; 3] = [
        UserProfile::EarlyYears,
        UserProfile::Elementary,
        UserProfile::Secondary,
    ];

    /// Human-readable label shown in selection menus.
    pub fn label(self) -> &'static str {
        match self {
            UserProfile::EarlyYears => "Early Years",
            UserProfile::Elementary => "Elementary School",
            UserProfile::Secondary => "Secondary School",
        }
    }

    /// Stable machine-readable name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            UserProfile::EarlyYears => "early-years",
            UserProfile::Elementary => "elementary",
            UserProfile::Secondary => "secondary",
        }
    }

    /// Maps a 1-based menu selection to a profile.
    pub fn from_selection(choice: usize) -> Option<Self> {
        choice
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx).copied())
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UserProfile {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "early-years" | "earlyyears" => Ok(UserProfile::EarlyYears),
            "elementary" => Ok(UserProfile::Elementary),
            "secondary" => Ok(UserProfile::Secondary),
            _ => Err(ProfileError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_selection_is_one_based() {
        assert_eq!(UserProfile::from_selection(1), Some(UserProfile::EarlyYears));
        assert_eq!(UserProfile::from_selection(2), Some(UserProfile::Elementary));
        assert_eq!(UserProfile::from_selection(3), Some(UserProfile::Secondary));
    }

    #[test]
    fn test_from_selection_out_of_range() {
        assert_eq!(UserProfile::from_selection(0), None);
        assert_eq!(UserProfile::from_selection(4), None);
        assert_eq!(UserProfile::from_selection(usize::MAX), None);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("early-years".parse::<UserProfile>(), Ok(UserProfile::EarlyYears));
        assert_eq!("Early_Years".parse::<UserProfile>(), Ok(UserProfile::EarlyYears));
        assert_eq!("ELEMENTARY".parse::<UserProfile>(), Ok(UserProfile::Elementary));
        assert_eq!(" secondary ".parse::<UserProfile>(), Ok(UserProfile::Secondary));
    }

    #[test]
    fn test_parse_unknown_name_fails() {
        let err = "university".parse::<UserProfile>().unwrap_err();
        assert_eq!(err, ProfileError::Unknown("university".to_string()));
        assert!(err.to_string().contains("university"));
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for profile in UserProfile::ALL {
            assert_eq!(profile.name().parse::<UserProfile>(), Ok(profile));
        }
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(format!("{}", UserProfile::EarlyYears), "Early Years");
        assert_eq!(format!("{}", UserProfile::Secondary), "Secondary School");
    }

    #[test]
    fn test_serialization_is_kebab_case() {
        let json = serde_json::to_string(&UserProfile::EarlyYears).unwrap();
        assert_eq!(json, "\"early-years\"");

        let parsed: UserProfile = serde_json::from_str("\"secondary\"").unwrap();
        assert_eq!(parsed, UserProfile::Secondary);
    }
}
