// Copyright (c) 2025 - Cowboy AI, Inc.
//! Canonical Resource Names
//!
//! Provisioned resources are named after the tenant and its environment:
//! `{company}-{product}-{environment}-{suffix}`. Keeping the patterns here
//! means repeated builds always produce the same identifiers.

use crate::domain::{AppEnvironment, Product, ServiceType};
use crate::errors::{TenantError, TenantResult};
use crate::tenant::invariants::require_environment;
use crate::tenant::TenantProfile;

/// Name derivation for one environment-bound tenant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNames<'a> {
    company: &'a str,
    product: &'a str,
    environment: AppEnvironment,
}

impl<'a> ResourceNames<'a> {
    /// Fails with `InvalidConfiguration` when no environment is set
    pub fn for_tenant<T: TenantProfile + ?Sized>(tenant: &'a T) -> TenantResult<Self> {
        Ok(Self {
            company: tenant.company(),
            product: tenant.product().value(),
            environment: require_environment(tenant.environment())?,
        })
    }

    /// `{company}-{product}-{environment}`
    pub fn prefix(&self) -> String {
        format!("{}-{}-{}", self.company, self.product, self.environment)
    }

    /// `{company}-{product}-{environment}-{suffix}`
    pub fn resource(&self, suffix: &str) -> TenantResult<String> {
        Ok(format!("{}-{}", self.prefix(), Self::segment(suffix)?))
    }

    /// `{company}-{product}-{environment}-{service}-{suffix}`
    pub fn service_resource<S: ServiceType>(&self, service: &S, suffix: &str) -> TenantResult<String> {
        Ok(format!(
            "{}-{}-{}",
            self.prefix(),
            Self::segment(service.value())?,
            Self::segment(suffix)?
        ))
    }

    /// `{stack}-{company}-{product}-{environment}`
    pub fn stack_id(&self, stack: &str) -> TenantResult<String> {
        Ok(format!("{}-{}", Self::segment(stack)?, self.prefix()))
    }

    /// Function name, `{company}-{product}-{environment}-{name}`
    pub fn function(&self, name: &str) -> TenantResult<String> {
        self.resource(name)
    }

    /// Container registry for a service
    pub fn container_registry<S: ServiceType>(&self, service: &S) -> TenantResult<String> {
        self.service_resource(service, "ecr-registry")
    }

    pub fn hosted_zone_id(&self) -> String {
        format!("main-{}-hosted-zone", self.prefix())
    }

    pub fn private_zone_id(&self) -> String {
        format!("main-{}-private-zone", self.prefix())
    }

    pub fn certificate_id(&self) -> String {
        format!("main-{}-certificate", self.prefix())
    }

    fn segment(value: &str) -> TenantResult<&str> {
        if value.is_empty() || value.chars().any(char::is_whitespace) {
            return Err(TenantError::invalid(format!(
                "resource name segment must be non-empty without whitespace: {:?}",
                value
            )));
        }
        Ok(value)
    }
}
