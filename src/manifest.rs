// Copyright (c) 2025 - Cowboy AI, Inc.
//! Tenant Manifest
//!
//! JSON description of one tenant, using string-backed vocabularies
//! ([`ProductName`], [`ServiceName`]). A manifest runs the whole
//! configuration pass: construct, bind an environment, register blueprints.
//!
//! ```json
//! {
//!   "company": "acme",
//!   "product": "app",
//!   "principal_dns": "acme.io",
//!   "infrastructure_type": "ecs_fargate_rds",
//!   "ip_private_ranges": "big_company",
//!   "prefix_list_cidrs": [{ "cidr": "203.0.113.0/24", "description": "office" }],
//!   "blueprints": {
//!     "ecs_fargate": { "api": { "cpu": 512, "memory_mib": 1024 } },
//!     "functions": {
//!       "ingest": { "source": { "asset": { "relative_path": "functions/ingest" } }, "platform": "code" }
//!     }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::blueprints::{BlueprintSet, DatabaseBlueprint, EcsFargateBlueprint, FunctionBlueprint};
use crate::domain::{
    AppEnvironment, InfrastructureType, IpPrivateRanges, PrefixListCidr, ProductName, ServiceName,
};
use crate::errors::TenantResult;
use crate::summary::TenantSummary;
use crate::tenant::{ResolvedTenant, TenantBase};

/// Blueprint maps keyed by service name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlueprintManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecs_fargate: Option<BTreeMap<ServiceName, EcsFargateBlueprint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rds: Option<BTreeMap<ServiceName, DatabaseBlueprint>>,
    /// Functions are provisioned for every infrastructure type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functions: Option<BTreeMap<ServiceName, FunctionBlueprint>>,
}

/// Serialized tenant description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TenantManifest {
    pub company: String,
    pub product: ProductName,
    pub principal_dns: String,
    pub infrastructure_type: InfrastructureType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_private_ranges: Option<IpPrivateRanges>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix_list_cidrs: Option<Vec<PrefixListCidr>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blueprints: Option<BlueprintManifest>,
}

impl TenantManifest {
    /// Parse a manifest; malformed JSON fails with `InvalidConfiguration`
    pub fn from_json(json: &str) -> TenantResult<Self> {
        let manifest: TenantManifest = serde_json::from_str(json)?;
        debug!(
            "Loaded manifest for {}-{} ({})",
            manifest.company,
            manifest.product,
            manifest.infrastructure_type
        );
        Ok(manifest)
    }

    /// Build the configured tenant
    pub fn tenant(&self) -> TenantResult<TenantBase<ProductName>> {
        let mut builder = TenantBase::builder(
            self.company.clone(),
            self.product.clone(),
            self.principal_dns.clone(),
            self.infrastructure_type,
        );

        if let Some(account) = &self.aws_account {
            builder = builder.aws_account(account.clone());
        }
        if let Some(region) = &self.aws_region {
            builder = builder.aws_region(region.clone());
        }
        if let Some(arn) = &self.certificate_arn {
            builder = builder.certificate_arn(arn.clone());
        }
        if let Some(range) = self.ip_private_ranges {
            builder = builder.ip_private_ranges(range);
        }
        if let Some(entries) = &self.prefix_list_cidrs {
            builder = builder.prefix_list_cidrs(entries.clone());
        }

        builder.build()
    }

    /// Blueprint maps as offered to registration
    pub fn blueprint_set(&self) -> BlueprintSet<ServiceName> {
        let blueprints = self.blueprints.clone().unwrap_or_default();
        BlueprintSet {
            ecs_fargate: blueprints.ecs_fargate,
            rds: blueprints.rds,
        }
    }

    /// Function blueprints by name; empty when none are declared
    pub fn function_blueprints(&self) -> BTreeMap<ServiceName, FunctionBlueprint> {
        self.blueprints
            .as_ref()
            .and_then(|blueprints| blueprints.functions.clone())
            .unwrap_or_default()
    }

    /// Run the whole configuration pass for `environment`
    pub fn resolve(
        &self,
        environment: AppEnvironment,
    ) -> TenantResult<ResolvedTenant<ProductName, ServiceName>> {
        self.tenant()?
            .bind(environment)
            .register_blueprints(self.blueprint_set())
    }

    /// Resolve for `environment` and snapshot the result, functions included
    pub fn summarize(&self, environment: AppEnvironment, stack: &str) -> TenantResult<TenantSummary> {
        let resolved = self.resolve(environment)?;
        TenantSummary::new(&resolved, stack)?.with_functions(&resolved, &self.function_blueprints())
    }
}
