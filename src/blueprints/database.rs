// Copyright (c) 2025 - Cowboy AI, Inc.
//! Relational Database Blueprint

use serde::{Deserialize, Serialize};

use super::{check_range, BlueprintError};

/// Storage and placement sizing for an RDS instance
///
/// # Invariants
/// - Instance class is a `db.*` class
/// - Allocated storage 20-65536 GiB
/// - Storage autoscaling ceiling, when set, is not below allocated storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RdsCapacity {
    pub instance_class: String,
    pub allocated_storage_gib: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_allocated_storage_gib: Option<u32>,
    #[serde(default)]
    pub multi_az: bool,
}

impl RdsCapacity {
    pub const MIN_STORAGE_GIB: u32 = 20;
    pub const MAX_STORAGE_GIB: u32 = 65536;

    pub fn new(instance_class: impl Into<String>, allocated_storage_gib: u32) -> Self {
        Self {
            instance_class: instance_class.into(),
            allocated_storage_gib,
            max_allocated_storage_gib: None,
            multi_az: false,
        }
    }

    /// Enable storage autoscaling up to `max_gib`
    pub fn with_max_allocated_storage(mut self, max_gib: u32) -> Self {
        self.max_allocated_storage_gib = Some(max_gib);
        self
    }

    pub fn with_multi_az(mut self) -> Self {
        self.multi_az = true;
        self
    }

    pub fn validate(&self) -> Result<(), BlueprintError> {
        if self.instance_class.is_empty() {
            return Err(BlueprintError::EmptyField("instance_class"));
        }
        if !self.instance_class.starts_with("db.") {
            return Err(BlueprintError::InvalidInstanceClass(
                self.instance_class.clone(),
            ));
        }

        check_range(
            "allocated_storage_gib",
            self.allocated_storage_gib,
            Self::MIN_STORAGE_GIB,
            Self::MAX_STORAGE_GIB,
        )?;

        if let Some(max) = self.max_allocated_storage_gib {
            if max < self.allocated_storage_gib {
                return Err(BlueprintError::StorageCeilingTooLow {
                    allocated: self.allocated_storage_gib,
                    max,
                });
            }
            check_range(
                "max_allocated_storage_gib",
                max,
                Self::MIN_STORAGE_GIB,
                Self::MAX_STORAGE_GIB,
            )?;
        }

        Ok(())
    }
}

/// I/O performance settings for an RDS instance
///
/// Absent IOPS means general-purpose storage without provisioned IOPS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RdsPerformance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iops: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_throughput_mibps: Option<u32>,
    #[serde(default)]
    pub performance_insights: bool,
}

impl RdsPerformance {
    pub const MIN_IOPS: u32 = 1000;
    pub const MAX_IOPS: u32 = 256_000;
    pub const MIN_THROUGHPUT_MIBPS: u32 = 125;
    pub const MAX_THROUGHPUT_MIBPS: u32 = 4000;

    pub fn with_iops(mut self, iops: u32) -> Self {
        self.iops = Some(iops);
        self
    }

    pub fn with_storage_throughput(mut self, mibps: u32) -> Self {
        self.storage_throughput_mibps = Some(mibps);
        self
    }

    pub fn with_performance_insights(mut self) -> Self {
        self.performance_insights = true;
        self
    }

    pub fn validate(&self) -> Result<(), BlueprintError> {
        if let Some(iops) = self.iops {
            check_range("iops", iops, Self::MIN_IOPS, Self::MAX_IOPS)?;
        }
        if let Some(throughput) = self.storage_throughput_mibps {
            check_range(
                "storage_throughput_mibps",
                throughput,
                Self::MIN_THROUGHPUT_MIBPS,
                Self::MAX_THROUGHPUT_MIBPS,
            )?;
        }
        Ok(())
    }
}

/// Capacity and performance for one database service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseBlueprint {
    pub capacity: RdsCapacity,
    #[serde(default)]
    pub performance: RdsPerformance,
}

impl DatabaseBlueprint {
    /// Create a validated database blueprint
    pub fn new(capacity: RdsCapacity, performance: RdsPerformance) -> Result<Self, BlueprintError> {
        let blueprint = Self {
            capacity,
            performance,
        };
        blueprint.validate()?;
        Ok(blueprint)
    }

    pub fn validate(&self) -> Result<(), BlueprintError> {
        self.capacity.validate()?;
        self.performance.validate()
    }
}
