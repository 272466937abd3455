// Copyright (c) 2025 - Cowboy AI, Inc.
//! Infrastructure Blueprints
//!
//! Typed bundles of sizing and performance parameters for one infrastructure
//! component, keyed by the caller's [`ServiceType`] vocabulary.
//!
//! - [`DatabaseBlueprint`] - RDS capacity and performance
//! - [`EcsFargateBlueprint`] - Fargate task sizing and scaling bounds
//! - [`FunctionBlueprint`] - function memory, storage, timeout and source
//!
//! [`BlueprintSet`] carries the maps handed to tenant blueprint registration.

pub mod database;
pub mod ecs_fargate;
pub mod function;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::domain::ServiceType;

pub use database::{DatabaseBlueprint, RdsCapacity, RdsPerformance};
pub use ecs_fargate::EcsFargateBlueprint;
pub use function::{Architecture, FunctionBlueprint, FunctionPlatform, FunctionSource};

/// Blueprint validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlueprintError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("Invalid RDS instance class: {0} (expected db.*)")]
    InvalidInstanceClass(String),

    #[error("Max allocated storage {max} GiB is below allocated storage {allocated} GiB")]
    StorageCeilingTooLow { allocated: u32, max: u32 },

    #[error("Unsupported Fargate CPU units: {0}")]
    UnsupportedCpu(u32),

    #[error("Unsupported Fargate memory {memory_mib} MiB for {cpu} CPU units")]
    UnsupportedMemory { cpu: u32, memory_mib: u32 },

    #[error("Scaling bounds must satisfy min <= desired <= max (min {min}, desired {desired}, max {max})")]
    InvalidScaling { min: u32, desired: u32, max: u32 },

    #[error("Blueprint for service {service} is invalid: {reason}")]
    InvalidService { service: String, reason: String },
}

/// Which blueprint map a tenant is asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlueprintKind {
    EcsFargate,
    Rds,
}

impl fmt::Display for BlueprintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlueprintKind::EcsFargate => write!(f, "ECS Fargate"),
            BlueprintKind::Rds => write!(f, "RDS"),
        }
    }
}

/// Blueprint maps offered to tenant registration
///
/// Either map may be absent. Keys are unique per map; the ordered map keeps
/// iteration stable between builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlueprintSet<S: ServiceType> {
    pub ecs_fargate: Option<BTreeMap<S, EcsFargateBlueprint>>,
    pub rds: Option<BTreeMap<S, DatabaseBlueprint>>,
}

impl<S: ServiceType> BlueprintSet<S> {
    pub fn new() -> Self {
        Self {
            ecs_fargate: None,
            rds: None,
        }
    }

    /// Replace the whole ECS Fargate map
    pub fn with_ecs_fargate_map(mut self, blueprints: BTreeMap<S, EcsFargateBlueprint>) -> Self {
        self.ecs_fargate = Some(blueprints);
        self
    }

    /// Replace the whole RDS map
    pub fn with_rds_map(mut self, blueprints: BTreeMap<S, DatabaseBlueprint>) -> Self {
        self.rds = Some(blueprints);
        self
    }

    /// Add one ECS Fargate blueprint; a repeated service replaces the earlier entry
    pub fn ecs_fargate(mut self, service: S, blueprint: EcsFargateBlueprint) -> Self {
        self.ecs_fargate
            .get_or_insert_with(BTreeMap::new)
            .insert(service, blueprint);
        self
    }

    /// Add one RDS blueprint; a repeated service replaces the earlier entry
    pub fn rds(mut self, service: S, blueprint: DatabaseBlueprint) -> Self {
        self.rds
            .get_or_insert_with(BTreeMap::new)
            .insert(service, blueprint);
        self
    }

    /// Validate every blueprint in both maps
    pub fn validate(&self) -> Result<(), BlueprintError> {
        let wrap = |service: &S, err: BlueprintError| BlueprintError::InvalidService {
            service: service.value().to_string(),
            reason: err.to_string(),
        };

        for (service, blueprint) in self.ecs_fargate.iter().flatten() {
            blueprint.validate().map_err(|e| wrap(service, e))?;
        }
        for (service, blueprint) in self.rds.iter().flatten() {
            blueprint.validate().map_err(|e| wrap(service, e))?;
        }
        Ok(())
    }

    pub(crate) fn has_ecs_fargate(&self) -> bool {
        self.ecs_fargate.as_ref().is_some_and(|map| !map.is_empty())
    }
}

impl<S: ServiceType> Default for BlueprintSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Ensure a value lies within an inclusive range
pub(crate) fn check_range(field: &'static str, value: u32, min: u32, max: u32) -> Result<(), BlueprintError> {
    if value < min || value > max {
        return Err(BlueprintError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ServiceName;

    fn fargate() -> EcsFargateBlueprint {
        EcsFargateBlueprint::new(512, 1024).unwrap()
    }

    #[test]
    fn test_empty_set() {
        let set = BlueprintSet::<ServiceName>::default();
        assert!(set.ecs_fargate.is_none());
        assert!(set.rds.is_none());
        assert!(!set.has_ecs_fargate());
        assert!(set.validate().is_ok());
    }

    #[test]
    fn test_repeated_service_replaces_entry() {
        let bigger = EcsFargateBlueprint::new(1024, 2048).unwrap();
        let set = BlueprintSet::new()
            .ecs_fargate(ServiceName::new("api"), fargate())
            .ecs_fargate(ServiceName::new("api"), bigger.clone());

        let map = set.ecs_fargate.unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&ServiceName::new("api")), Some(&bigger));
    }

    #[test]
    fn test_validate_names_the_service() {
        let mut broken = fargate();
        broken.desired_count = 10;
        broken.max_capacity = 2;

        let set = BlueprintSet::new().ecs_fargate(ServiceName::new("worker"), broken);
        let err = set.validate().unwrap_err();
        assert!(matches!(
            err,
            BlueprintError::InvalidService { ref service, .. } if service == "worker"
        ));
    }

    #[test]
    fn test_blueprint_kind_display() {
        assert_eq!(BlueprintKind::EcsFargate.to_string(), "ECS Fargate");
        assert_eq!(BlueprintKind::Rds.to_string(), "RDS");
    }
}
