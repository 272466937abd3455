// Copyright (c) 2025 - Cowboy AI, Inc.
//! ECS Fargate Service Blueprint

use serde::{Deserialize, Serialize};

use super::BlueprintError;

/// Task sizing and scaling bounds for one Fargate service
///
/// # Invariants
/// - `cpu` is a Fargate CPU unit size (256-16384)
/// - `memory_mib` is a supported size for that CPU
/// - `min_capacity <= desired_count <= max_capacity`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcsFargateBlueprint {
    pub cpu: u32,
    pub memory_mib: u32,
    #[serde(default = "default_count")]
    pub desired_count: u32,
    #[serde(default = "default_count")]
    pub min_capacity: u32,
    #[serde(default = "default_count")]
    pub max_capacity: u32,
}

fn default_count() -> u32 {
    1
}

impl EcsFargateBlueprint {
    /// Create a validated single-task blueprint
    pub fn new(cpu: u32, memory_mib: u32) -> Result<Self, BlueprintError> {
        let blueprint = Self {
            cpu,
            memory_mib,
            desired_count: 1,
            min_capacity: 1,
            max_capacity: 1,
        };
        blueprint.validate()?;
        Ok(blueprint)
    }

    /// Set desired task count and autoscaling bounds
    pub fn with_scaling(mut self, min: u32, desired: u32, max: u32) -> Result<Self, BlueprintError> {
        self.min_capacity = min;
        self.desired_count = desired;
        self.max_capacity = max;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), BlueprintError> {
        if !Self::supports_memory(self.cpu, self.memory_mib)? {
            return Err(BlueprintError::UnsupportedMemory {
                cpu: self.cpu,
                memory_mib: self.memory_mib,
            });
        }

        if self.min_capacity > self.desired_count || self.desired_count > self.max_capacity {
            return Err(BlueprintError::InvalidScaling {
                min: self.min_capacity,
                desired: self.desired_count,
                max: self.max_capacity,
            });
        }

        Ok(())
    }

    /// Whether Fargate offers `memory_mib` for `cpu` units
    fn supports_memory(cpu: u32, memory_mib: u32) -> Result<bool, BlueprintError> {
        // (min, max, step) in MiB per CPU size
        let (min, max, step) = match cpu {
            256 => return Ok(matches!(memory_mib, 512 | 1024 | 2048)),
            512 => (1024, 4096, 1024),
            1024 => (2048, 8192, 1024),
            2048 => (4096, 16384, 1024),
            4096 => (8192, 30720, 1024),
            8192 => (16384, 61440, 4096),
            16384 => (32768, 122880, 8192),
            other => return Err(BlueprintError::UnsupportedCpu(other)),
        };

        Ok(memory_mib >= min && memory_mib <= max && (memory_mib - min) % step == 0)
    }
}
