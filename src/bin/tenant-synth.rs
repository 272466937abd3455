// Copyright (c) 2025 - Cowboy AI, Inc.
//! Tenant Synthesizer
//!
//! Reads a tenant manifest, resolves it for one environment and prints the
//! resulting summary as pretty JSON on stdout. Logs go to stderr.
//!
//! Run with: cargo run --bin tenant-synth
//!
//! Environment:
//! - `TENANT_MANIFEST` - path to the manifest JSON (required)
//! - `TENANT_ENVIRONMENT` - local, dev, uat or prod (default: prod)
//! - `TENANT_STACK` - deployment stack prefix (default: platform)

use anyhow::{Context, Result};
use cim_tenant_infrastructure::{AppEnvironment, TenantManifest};
use std::path::PathBuf;
use tracing::{debug, info};

/// Configuration for one synthesis run
#[derive(Debug, Clone)]
struct SynthConfig {
    /// Manifest location
    manifest_path: PathBuf,
    /// Environment to resolve for
    environment: AppEnvironment,
    /// Prefix for the deployment stack id
    stack: String,
}

impl SynthConfig {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        let manifest_path = std::env::var("TENANT_MANIFEST")
            .map(PathBuf::from)
            .context("TENANT_MANIFEST not set. Point it at a tenant manifest JSON file")?;

        let environment = std::env::var("TENANT_ENVIRONMENT")
            .unwrap_or_else(|_| "prod".to_string())
            .parse::<AppEnvironment>()
            .context("TENANT_ENVIRONMENT must be one of local, dev, uat, prod")?;

        let stack = std::env::var("TENANT_STACK").unwrap_or_else(|_| "platform".to_string());

        Ok(Self {
            manifest_path,
            environment,
            stack,
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = SynthConfig::from_env()?;
    info!("Configuration loaded:");
    info!("  - Manifest: {}", config.manifest_path.display());
    info!("  - Environment: {}", config.environment);
    info!("  - Stack: {}", config.stack);

    let json = std::fs::read_to_string(&config.manifest_path).with_context(|| {
        format!("Failed to read manifest {}", config.manifest_path.display())
    })?;

    let manifest = TenantManifest::from_json(&json).context("Failed to parse manifest")?;
    let summary = manifest
        .summarize(config.environment, &config.stack)
        .with_context(|| format!("Failed to resolve tenant {}", manifest.company))?;
    debug!("Resolved summary for stack {}", summary.names.stack_id);

    println!("{}", serde_json::to_string_pretty(&summary)?);
    info!("Synthesized {}-{}-{}", summary.company, summary.product, summary.environment);

    Ok(())
}
