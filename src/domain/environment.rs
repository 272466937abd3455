// Copyright (c) 2025 - Cowboy AI, Inc.
//! Deployment Environment Vocabulary

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TenantError;

/// Deployment stage that scopes naming, networking and tagging
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppEnvironment {
    /// Developer workstation
    Local,
    /// Shared development
    Dev,
    /// User acceptance testing
    Uat,
    /// Production
    Prod,
}

impl AppEnvironment {
    /// Every environment, in lifecycle order
    pub const ALL: [AppEnvironment; 4] = [Self::Local, Self::Dev, Self::Uat, Self::Prod];

    /// Canonical value used in names and tags
    pub fn value(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Dev => "dev",
            Self::Uat => "uat",
            Self::Prod => "prod",
        }
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for AppEnvironment {
    type Err = TenantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "dev" => Ok(Self::Dev),
            "uat" => Ok(Self::Uat),
            "prod" => Ok(Self::Prod),
            other => Err(TenantError::invalid(format!(
                "unknown environment: {}",
                other
            ))),
        }
    }
}
