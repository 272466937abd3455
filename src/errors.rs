// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for tenant configuration

use thiserror::Error;

use crate::blueprints::{BlueprintError, BlueprintKind};
use crate::domain::{DnsNameError, InfrastructureType, NetworkError};

/// Errors that can occur while building a tenant configuration
///
/// Every variant is fatal to the configuration pass that raised it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TenantError {
    /// Missing or malformed configuration input
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Infrastructure type exists in the vocabulary but has no implementation
    #[error("{0} is not implemented yet")]
    NotImplemented(InfrastructureType),

    /// Blueprint data was read but never registered for this tenant
    #[error("{0} blueprints are not defined for this tenant")]
    BlueprintsUndefined(BlueprintKind),
}

impl TenantError {
    /// Shorthand for an [`TenantError::InvalidConfiguration`] error
    pub fn invalid(message: impl Into<String>) -> Self {
        TenantError::InvalidConfiguration(message.into())
    }
}

/// Result type for tenant configuration operations
pub type TenantResult<T> = Result<T, TenantError>;

impl From<NetworkError> for TenantError {
    fn from(err: NetworkError) -> Self {
        TenantError::InvalidConfiguration(err.to_string())
    }
}

impl From<DnsNameError> for TenantError {
    fn from(err: DnsNameError) -> Self {
        TenantError::InvalidConfiguration(err.to_string())
    }
}

impl From<BlueprintError> for TenantError {
    fn from(err: BlueprintError) -> Self {
        TenantError::InvalidConfiguration(err.to_string())
    }
}

impl From<serde_json::Error> for TenantError {
    fn from(err: serde_json::Error) -> Self {
        TenantError::InvalidConfiguration(format!("malformed manifest: {}", err))
    }
}
