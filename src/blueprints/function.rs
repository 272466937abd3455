// Copyright (c) 2025 - Cowboy AI, Inc.
//! Function Blueprint
//!
//! Sizing and code source for a serverless function. The blueprint is handed
//! to function-provisioning collaborators as is; it does not take part in
//! tenant blueprint routing.

use serde::{Deserialize, Serialize};

use super::{check_range, BlueprintError};

/// How the function code is packaged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionPlatform {
    /// Container image built from a Dockerfile
    Docker,
    /// Zip archive of source code
    Code,
}

/// Instruction set the function runs on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Architecture {
    #[default]
    Arm64,
    X86_64,
}

/// Where the function code comes from
///
/// Exactly one source is always present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionSource {
    /// Local asset directory, relative to the build root
    Asset { relative_path: String },
    /// Existing image in a container registry
    Registry { repository: String },
}

/// Memory, storage, timeout and code source for one function
///
/// # Invariants
/// - Memory 128-10240 MB
/// - Ephemeral storage 512-10240 MB
/// - Timeout 3-900 seconds
/// - Source path or repository not empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionBlueprint {
    pub source: FunctionSource,
    pub platform: FunctionPlatform,
    #[serde(default)]
    pub architecture: Architecture,
    #[serde(default = "FunctionBlueprint::default_memory")]
    pub memory_size_mb: u32,
    #[serde(default = "FunctionBlueprint::default_ephemeral_storage")]
    pub ephemeral_storage_size_mb: u32,
    #[serde(default = "FunctionBlueprint::default_timeout")]
    pub timeout_seconds: u32,
}

impl FunctionBlueprint {
    pub const MIN_MEMORY_MB: u32 = 128;
    pub const MAX_MEMORY_MB: u32 = 10240;
    pub const MIN_EPHEMERAL_STORAGE_MB: u32 = 512;
    pub const MAX_EPHEMERAL_STORAGE_MB: u32 = 10240;
    pub const MIN_TIMEOUT_SECONDS: u32 = 3;
    pub const MAX_TIMEOUT_SECONDS: u32 = 900;

    /// Blueprint with the smallest sizing for the given source
    pub fn new(source: FunctionSource, platform: FunctionPlatform) -> Self {
        Self {
            source,
            platform,
            architecture: Architecture::default(),
            memory_size_mb: Self::default_memory(),
            ephemeral_storage_size_mb: Self::default_ephemeral_storage(),
            timeout_seconds: Self::default_timeout(),
        }
    }

    fn default_memory() -> u32 {
        Self::MIN_MEMORY_MB
    }

    fn default_ephemeral_storage() -> u32 {
        Self::MIN_EPHEMERAL_STORAGE_MB
    }

    fn default_timeout() -> u32 {
        Self::MIN_TIMEOUT_SECONDS
    }

    pub fn with_memory(mut self, memory_size_mb: u32) -> Self {
        self.memory_size_mb = memory_size_mb;
        self
    }

    pub fn with_ephemeral_storage(mut self, ephemeral_storage_size_mb: u32) -> Self {
        self.ephemeral_storage_size_mb = ephemeral_storage_size_mb;
        self
    }

    pub fn with_timeout(mut self, timeout_seconds: u32) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn with_architecture(mut self, architecture: Architecture) -> Self {
        self.architecture = architecture;
        self
    }

    pub fn validate(&self) -> Result<(), BlueprintError> {
        check_range(
            "memory_size_mb",
            self.memory_size_mb,
            Self::MIN_MEMORY_MB,
            Self::MAX_MEMORY_MB,
        )?;
        check_range(
            "ephemeral_storage_size_mb",
            self.ephemeral_storage_size_mb,
            Self::MIN_EPHEMERAL_STORAGE_MB,
            Self::MAX_EPHEMERAL_STORAGE_MB,
        )?;
        check_range(
            "timeout_seconds",
            self.timeout_seconds,
            Self::MIN_TIMEOUT_SECONDS,
            Self::MAX_TIMEOUT_SECONDS,
        )?;

        match &self.source {
            FunctionSource::Asset { relative_path } if relative_path.is_empty() => {
                Err(BlueprintError::EmptyField("relative_path"))
            }
            FunctionSource::Registry { repository } if repository.is_empty() => {
                Err(BlueprintError::EmptyField("repository"))
            }
            _ => Ok(()),
        }
    }

    /// Dockerfile location for image builds from a local asset
    pub fn dockerfile_path(&self) -> Option<String> {
        match (&self.source, self.platform) {
            (FunctionSource::Asset { relative_path }, FunctionPlatform::Docker) => {
                Some(format!("./{}/Dockerfile", relative_path))
            }
            _ => None,
        }
    }
}
