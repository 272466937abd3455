// Copyright (c) 2025 - Cowboy AI, Inc.
//! DNS Name Value Object with RFC 1123 Invariants

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// DNS name validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DnsNameError {
    #[error("DNS name is empty")]
    Empty,

    #[error("DNS name exceeds maximum length of 253 characters: {0}")]
    TooLong(usize),

    #[error("DNS name contains an empty label: {0}")]
    EmptyLabel(String),

    #[error("DNS label exceeds maximum length of 63 characters: {0}")]
    LabelTooLong(String),

    #[error("Invalid character in DNS name: {0}")]
    InvalidCharacter(char),

    #[error("DNS label cannot start or end with hyphen: {0}")]
    InvalidLabelFormat(String),

    #[error("Top-level DNS label cannot be all numeric: {0}")]
    NumericLabel(String),
}

/// DNS zone name a tenant's federated and private zones hang from
///
/// Invariants (RFC 1123):
/// - Total length ≤ 253 characters, not counting a trailing root dot
/// - Each label 1-63 characters of alphanumerics and hyphens
/// - Labels cannot start or end with a hyphen
/// - The top-level label is not all numeric
///
/// The name is kept exactly as given, including letter case and a trailing
/// root dot, so derived zone names are built from the caller's values.
///
/// # Examples
///
/// ```rust
/// use cim_tenant_infrastructure::domain::DnsName;
///
/// let root = DnsName::new("Example.com").unwrap();
/// assert_eq!(root.as_str(), "Example.com");
/// assert_eq!(root.prepend("app").unwrap().as_str(), "app.Example.com");
///
/// assert!(DnsName::new("example.com.").is_ok());
/// assert!(DnsName::new("-invalid.com").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DnsName(String);

impl DnsName {
    /// Maximum total length (RFC 1123)
    pub const MAX_LENGTH: usize = 253;

    /// Maximum length for a single label (RFC 1123)
    pub const MAX_LABEL_LENGTH: usize = 63;

    /// Create a new DNS name with validation
    pub fn new(name: impl Into<String>) -> Result<Self, DnsNameError> {
        let name = name.into();

        // A single trailing dot marks a fully-qualified name
        let relative = name.strip_suffix('.').unwrap_or(&name);

        if relative.is_empty() {
            return Err(DnsNameError::Empty);
        }

        if relative.len() > Self::MAX_LENGTH {
            return Err(DnsNameError::TooLong(relative.len()));
        }

        for label in relative.split('.') {
            if label.is_empty() {
                return Err(DnsNameError::EmptyLabel(name.clone()));
            }
            Self::validate_label(label)?;
        }

        if let Some(tld) = relative.rsplit('.').next() {
            if tld.chars().all(|c| c.is_ascii_digit()) {
                return Err(DnsNameError::NumericLabel(tld.to_string()));
            }
        }

        Ok(Self(name))
    }

    fn validate_label(label: &str) -> Result<(), DnsNameError> {
        if label.len() > Self::MAX_LABEL_LENGTH {
            return Err(DnsNameError::LabelTooLong(label.to_string()));
        }

        if let Some(ch) = label
            .chars()
            .find(|ch| !ch.is_ascii_alphanumeric() && *ch != '-')
        {
            return Err(DnsNameError::InvalidCharacter(ch));
        }

        if label.starts_with('-') || label.ends_with('-') {
            return Err(DnsNameError::InvalidLabelFormat(label.to_string()));
        }

        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build the child zone `{label}.{self}`
    pub fn prepend(&self, label: &str) -> Result<Self, DnsNameError> {
        Self::new(format!("{}.{}", label, self.0))
    }
}

impl fmt::Display for DnsName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DnsName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DnsName {
    type Error = DnsNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for DnsName {
    type Error = DnsNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DnsName> for String {
    fn from(name: DnsName) -> Self {
        name.0
    }
}
