//! Notice codes and severities.
//!
//! Every rule in the catalog reports under exactly one [`NoticeCode`]. The
//! code carries the human-readable title used when the rule announces itself,
//! the default severity, and the field keys a notice of that code must hold.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::notice::NoticeKey;

/// Notice severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Feed is invalid and must be fixed
    Error,
    /// Feed is usable but should be reviewed
    Warning,
    /// Informational only
    Info,
}

impl Severity {
    /// Parse severity from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }
}

/// Stable identifier of the rule that produced a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NoticeCode {
    /// Feed start date falls after the feed end date.
    E037,
    /// Feed expires within the next 7 days.
    E038,
    /// Feed does not cover the next 30 days of service.
    W009,
}

const EXPIRY_KEYS: &[NoticeKey] = &[
    NoticeKey::CurrentDate,
    NoticeKey::FeedEndDate,
    NoticeKey::FieldName,
    NoticeKey::CompositeKeyFirstPart,
    NoticeKey::CompositeKeySecondPart,
    NoticeKey::CompositeKeyThirdPart,
    NoticeKey::CompositeKeyFirstValue,
    NoticeKey::CompositeKeySecondValue,
    NoticeKey::CompositeKeyThirdValue,
];

const DATE_ORDER_KEYS: &[NoticeKey] = &[
    NoticeKey::FeedStartDate,
    NoticeKey::FeedEndDate,
    NoticeKey::FieldName,
    NoticeKey::CompositeKeyFirstPart,
    NoticeKey::CompositeKeySecondPart,
    NoticeKey::CompositeKeyThirdPart,
    NoticeKey::CompositeKeyFirstValue,
    NoticeKey::CompositeKeySecondValue,
    NoticeKey::CompositeKeyThirdValue,
];

impl NoticeCode {
    /// All known codes, in catalog order.
    pub const fn all() -> &'static [Self] {
        &[Self::E037, Self::E038, Self::W009]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E037 => "E037",
            Self::E038 => "E038",
            Self::W009 => "W009",
        }
    }

    /// Human-readable rule description.
    pub fn title(&self) -> &'static str {
        match self {
            Self::E037 => "Feed start date should be before feed end date",
            Self::E038 => "Dataset should be valid for at least the next 7 days",
            Self::W009 => "Dataset should cover at least the next 30 days of service",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::E037 | Self::E038 => Severity::Error,
            Self::W009 => Severity::Warning,
        }
    }

    /// Field keys every notice with this code must carry.
    pub fn required_keys(&self) -> &'static [NoticeKey] {
        match self {
            Self::E037 => DATE_ORDER_KEYS,
            Self::E038 | Self::W009 => EXPIRY_KEYS,
        }
    }
}

impl fmt::Display for NoticeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoticeCode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownCode(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_code() {
        assert_eq!("E038".parse::<NoticeCode>(), Ok(NoticeCode::E038));
        assert_eq!(" w009 ".parse::<NoticeCode>(), Ok(NoticeCode::W009));
        assert_eq!(
            "E999".parse::<NoticeCode>(),
            Err(ModelError::UnknownCode("E999".to_string()))
        );
    }

    #[test]
    fn test_parse_severity() {
        assert_eq!(Severity::parse("ERROR"), Some(Severity::Error));
        assert_eq!(Severity::parse("warning"), Some(Severity::Warning));
        assert_eq!(Severity::parse("fatal"), None);
    }

    #[test]
    fn test_required_keys_cover_composite_key() {
        for code in NoticeCode::all() {
            let keys = code.required_keys();
            assert_eq!(keys.len(), 9, "{code}");
            assert!(keys.contains(&NoticeKey::FieldName));
            assert!(keys.contains(&NoticeKey::CompositeKeyThirdValue));
        }
    }
}
