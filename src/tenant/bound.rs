// Copyright (c) 2025 - Cowboy AI, Inc.
//! Environment-Bound Tenant

use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use super::{ResolvedTenant, TenantBase, TenantProfile};
use crate::blueprints::BlueprintSet;
use crate::domain::{AppEnvironment, CidrBlock, InfrastructureType, Product, ServiceType};
use crate::errors::{TenantError, TenantResult};

/// Tenant with its deployment environment fixed
///
/// The VPC CIDR comes from the environment-aware table in
/// [`VpcCidrBuilder`](crate::build::VpcCidrBuilder) and is only present for
/// tenants that own a VPC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundTenant<P: Product> {
    base: TenantBase<P>,
    environment: AppEnvironment,
    vpc_cidr: Option<CidrBlock>,
}

impl<P: Product> BoundTenant<P> {
    pub(super) fn new(base: TenantBase<P>, environment: AppEnvironment, vpc_cidr: Option<CidrBlock>) -> Self {
        Self {
            base,
            environment,
            vpc_cidr,
        }
    }

    /// Bind the configured tenant to another environment
    ///
    /// Derivation restarts from the configured base, so nothing from the
    /// previous binding carries over.
    pub fn rebind(self, environment: AppEnvironment) -> BoundTenant<P> {
        debug!(
            "Rebinding tenant {} from {} to {}",
            self.base.company, self.environment, environment
        );
        self.base.into_bound(environment)
    }

    pub fn local(self) -> BoundTenant<P> {
        self.rebind(AppEnvironment::Local)
    }

    pub fn dev(self) -> BoundTenant<P> {
        self.rebind(AppEnvironment::Dev)
    }

    pub fn uat(self) -> BoundTenant<P> {
        self.rebind(AppEnvironment::Uat)
    }

    pub fn prod(self) -> BoundTenant<P> {
        self.rebind(AppEnvironment::Prod)
    }

    /// Drop the environment and return the configured tenant
    pub fn into_base(self) -> TenantBase<P> {
        self.base
    }

    /// Attach per-service blueprints according to the infrastructure type
    ///
    /// # Routing
    /// - `EcsFargateRds`: both maps are stored
    /// - `EcsEc2Rds`: always fails with [`TenantError::NotImplemented`]
    /// - `RdsOnly`: only the RDS map is stored, any ECS map is ignored
    /// - `Serverless`: nothing is stored
    ///
    /// Stored blueprints are validated; an invalid one fails the whole
    /// registration with [`TenantError::InvalidConfiguration`].
    pub fn register_blueprints<S: ServiceType>(
        self,
        blueprints: BlueprintSet<S>,
    ) -> TenantResult<ResolvedTenant<P, S>> {
        let infrastructure_type = self.base.infrastructure_type;

        let stored = match infrastructure_type {
            InfrastructureType::EcsFargateRds => blueprints,
            InfrastructureType::EcsEc2Rds => {
                return Err(TenantError::NotImplemented(InfrastructureType::EcsEc2Rds));
            }
            InfrastructureType::RdsOnly => {
                if blueprints.has_ecs_fargate() {
                    warn!(
                        "Ignoring ECS Fargate blueprints for rds_only tenant {}",
                        self.base.company
                    );
                }
                BlueprintSet {
                    ecs_fargate: None,
                    rds: blueprints.rds,
                }
            }
            InfrastructureType::Serverless => {
                debug!(
                    "Serverless tenant {} needs no blueprints",
                    self.base.company
                );
                BlueprintSet::new()
            }
        };

        stored.validate()?;

        info!(
            "Registered blueprints for {}-{}-{}: {} ECS Fargate, {} RDS",
            self.base.company,
            self.base.product.value(),
            self.environment,
            stored.ecs_fargate.as_ref().map_or(0, BTreeMap::len),
            stored.rds.as_ref().map_or(0, BTreeMap::len)
        );

        Ok(ResolvedTenant::new(self, stored.ecs_fargate, stored.rds))
    }
}

impl<P: Product> TenantProfile for BoundTenant<P> {
    type Product = P;

    fn base(&self) -> &TenantBase<P> {
        &self.base
    }

    fn environment(&self) -> Option<AppEnvironment> {
        Some(self.environment)
    }

    fn vpc_cidr(&self) -> Option<CidrBlock> {
        self.vpc_cidr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blueprints::{DatabaseBlueprint, EcsFargateBlueprint, RdsCapacity, RdsPerformance};
    use crate::domain::{IpPrivateRanges, PrefixListCidr, ProductName, ServiceName};

    fn tenant(infrastructure_type: InfrastructureType) -> TenantBase<ProductName> {
        TenantBase::builder("acme", ProductName::new("app"), "example.com", infrastructure_type)
            .ip_private_ranges(IpPrivateRanges::SmallCompany)
            .prefix_list_cidr(PrefixListCidr::new("203.0.113.0/24", "office"))
            .build()
            .unwrap()
    }

    fn database() -> DatabaseBlueprint {
        DatabaseBlueprint::new(RdsCapacity::new("db.t4g.small", 20), RdsPerformance::default()).unwrap()
    }

    #[test]
    fn test_rebind_last_call_wins() {
        let bound = tenant(InfrastructureType::RdsOnly).prod().dev();
        assert_eq!(bound.environment(), Some(AppEnvironment::Dev));
        assert_eq!(bound.vpc_cidr().unwrap().to_string(), "192.168.32.0/24");

        let bound = bound.uat();
        assert_eq!(bound.environment(), Some(AppEnvironment::Uat));
        assert_eq!(bound.vpc_cidr().unwrap().to_string(), "192.168.16.0/24");
    }

    #[test]
    fn test_into_base_restores_configuration() {
        let base = tenant(InfrastructureType::EcsFargateRds);
        assert_eq!(base.clone().prod().into_base(), base);
    }

    #[test]
    fn test_ecs_ec2_is_not_implemented() {
        let err = tenant(InfrastructureType::EcsEc2Rds)
            .prod()
            .register_blueprints(BlueprintSet::<ServiceName>::new())
            .unwrap_err();
        assert_eq!(err, TenantError::NotImplemented(InfrastructureType::EcsEc2Rds));
    }

    #[test]
    fn test_invalid_blueprint_fails_registration() {
        let mut broken = database();
        broken.capacity.allocated_storage_gib = 5;

        let err = tenant(InfrastructureType::RdsOnly)
            .dev()
            .register_blueprints(BlueprintSet::new().rds(ServiceName::new("orders"), broken))
            .unwrap_err();
        assert!(matches!(err, TenantError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_ignored_maps_are_not_validated() {
        let mut broken = EcsFargateBlueprint::new(256, 512).unwrap();
        broken.memory_mib = 3;

        let resolved = tenant(InfrastructureType::RdsOnly)
            .dev()
            .register_blueprints(
                BlueprintSet::new()
                    .ecs_fargate(ServiceName::new("api"), broken)
                    .rds(ServiceName::new("api"), database()),
            )
            .unwrap();
        assert!(resolved.rds_blueprints().is_ok());
        assert!(resolved.ecs_fargate_blueprints().is_err());
    }
}
