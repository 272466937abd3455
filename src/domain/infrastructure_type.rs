// Copyright (c) 2025 - Cowboy AI, Inc.
//! Infrastructure Type Contract
//!
//! Closed classification of how a tenant's workload is hosted. The type gates
//! which network fields are mandatory and which blueprint maps are stored.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TenantError;

/// Hosting model for a tenant workload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfrastructureType {
    /// Functions and managed services only, no VPC
    Serverless,
    /// Fargate containers backed by a relational database
    EcsFargateRds,
    /// EC2-backed containers with a relational database
    EcsEc2Rds,
    /// Relational database without a container tier
    RdsOnly,
}

impl InfrastructureType {
    /// Every infrastructure type
    pub const ALL: [InfrastructureType; 4] = [
        Self::Serverless,
        Self::EcsFargateRds,
        Self::EcsEc2Rds,
        Self::RdsOnly,
    ];

    /// Canonical string representation
    pub fn value(&self) -> &'static str {
        match self {
            Self::Serverless => "serverless",
            Self::EcsFargateRds => "ecs_fargate_rds",
            Self::EcsEc2Rds => "ecs_ec2_rds",
            Self::RdsOnly => "rds_only",
        }
    }

    /// Whether tenants of this type own a VPC and therefore need network inputs
    pub fn requires_network(&self) -> bool {
        !matches!(self, Self::Serverless)
    }
}

impl fmt::Display for InfrastructureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for InfrastructureType {
    type Err = TenantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.value() == wanted)
            .ok_or_else(|| TenantError::invalid(format!("unknown infrastructure type: {}", s)))
    }
}
