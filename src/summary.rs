// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resolved Tenant Summary
//!
//! Serializable snapshot of a resolved tenant: its fields, the mandatory tag
//! set, canonical resource names and the registered blueprints. Function
//! blueprints sit outside tenant registration and are attached with
//! [`TenantSummary::with_functions`]. Provisioning collaborators consume this
//! instead of the typed tenant.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::blueprints::{BlueprintError, DatabaseBlueprint, EcsFargateBlueprint, FunctionBlueprint};
use crate::build::{ResourceNames, TagRulesBuilder};
use crate::domain::{
    AppEnvironment, CidrBlock, DnsName, InfrastructureType, IpPrivateRanges, PrefixListCidr,
    Product, ServiceType,
};
use crate::errors::TenantResult;
use crate::tenant::invariants::require_environment;
use crate::tenant::{ResolvedTenant, TenantProfile};

/// Canonical identifiers for one tenant and environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryNames {
    pub stack_id: String,
    pub hosted_zone_id: String,
    pub private_zone_id: String,
    pub certificate_id: String,
    /// Registry name per ECS Fargate service
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub container_registries: BTreeMap<String, String>,
    /// Function name per function blueprint
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub functions: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantSummary {
    pub company: String,
    pub product: String,
    pub environment: AppEnvironment,
    pub infrastructure_type: InfrastructureType,
    pub principal_dns: DnsName,
    pub federated_dns: DnsName,
    pub private_dns: DnsName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_private_ranges: Option<IpPrivateRanges>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_cidr: Option<CidrBlock>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prefix_list_cidrs: Vec<PrefixListCidr>,
    pub tags: BTreeMap<String, String>,
    pub names: SummaryNames,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub ecs_fargate_blueprints: BTreeMap<String, EcsFargateBlueprint>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub rds_blueprints: BTreeMap<String, DatabaseBlueprint>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub function_blueprints: BTreeMap<String, FunctionBlueprint>,
}

impl TenantSummary {
    /// Snapshot `tenant`, naming its deployment stack after `stack`
    pub fn new<P: Product, S: ServiceType>(
        tenant: &ResolvedTenant<P, S>,
        stack: &str,
    ) -> TenantResult<Self> {
        let environment = require_environment(tenant.environment())?;
        let resource_names = ResourceNames::for_tenant(tenant)?;

        let mut tags: BTreeMap<String, String> = BTreeMap::new();
        TagRulesBuilder::apply(&mut tags, tenant)?;

        let ecs_fargate_blueprints: BTreeMap<String, EcsFargateBlueprint> = tenant
            .ecs_fargate_blueprints()
            .map(|map| {
                map.iter()
                    .map(|(service, blueprint)| (service.value().to_string(), blueprint.clone()))
                    .collect()
            })
            .unwrap_or_default();

        let rds_blueprints = tenant
            .rds_blueprints()
            .map(|map| {
                map.iter()
                    .map(|(service, blueprint)| (service.value().to_string(), blueprint.clone()))
                    .collect()
            })
            .unwrap_or_default();

        let mut container_registries = BTreeMap::new();
        if let Ok(map) = tenant.ecs_fargate_blueprints() {
            for service in map.keys() {
                container_registries.insert(
                    service.value().to_string(),
                    resource_names.container_registry(service)?,
                );
            }
        }

        let names = SummaryNames {
            stack_id: resource_names.stack_id(stack)?,
            hosted_zone_id: resource_names.hosted_zone_id(),
            private_zone_id: resource_names.private_zone_id(),
            certificate_id: resource_names.certificate_id(),
            container_registries,
            functions: BTreeMap::new(),
        };

        Ok(Self {
            company: tenant.company().to_string(),
            product: tenant.product().value().to_string(),
            environment,
            infrastructure_type: tenant.infrastructure_type(),
            principal_dns: tenant.base().principal_dns().clone(),
            federated_dns: tenant.federated_dns().clone(),
            private_dns: tenant.private_dns().clone(),
            aws_account: tenant.aws_account().map(str::to_string),
            aws_region: tenant.aws_region().map(str::to_string),
            certificate_arn: tenant.certificate_arn().map(str::to_string),
            ip_private_ranges: tenant.ip_private_ranges(),
            vpc_cidr: tenant.vpc_cidr(),
            prefix_list_cidrs: tenant.prefix_list_cidrs().map(<[_]>::to_vec).unwrap_or_default(),
            tags,
            names,
            ecs_fargate_blueprints,
            rds_blueprints,
            function_blueprints: BTreeMap::new(),
        })
    }

    /// Attach validated function blueprints and their canonical names
    ///
    /// An invalid blueprint fails with `InvalidConfiguration` naming the
    /// function; the summary is consumed either way.
    pub fn with_functions<T, S>(
        mut self,
        tenant: &T,
        functions: &BTreeMap<S, FunctionBlueprint>,
    ) -> TenantResult<Self>
    where
        T: TenantProfile + ?Sized,
        S: ServiceType,
    {
        let resource_names = ResourceNames::for_tenant(tenant)?;

        for (function, blueprint) in functions {
            blueprint
                .validate()
                .map_err(|err| BlueprintError::InvalidService {
                    service: function.value().to_string(),
                    reason: err.to_string(),
                })?;

            let key = function.value().to_string();
            self.names
                .functions
                .insert(key.clone(), resource_names.function(function.value())?);
            self.function_blueprints.insert(key, blueprint.clone());
        }

        Ok(self)
    }
}
