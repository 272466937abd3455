// Copyright (c) 2025 - Cowboy AI, Inc.
//! Blueprint-Bound Tenant

use std::collections::BTreeMap;

use super::{BoundTenant, TenantBase, TenantProfile};
use crate::blueprints::{BlueprintKind, DatabaseBlueprint, EcsFargateBlueprint};
use crate::domain::{AppEnvironment, CidrBlock, Product, ServiceType};
use crate::errors::{TenantError, TenantResult};

/// Final, read-only tenant state handed to provisioning code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTenant<P: Product, S: ServiceType> {
    bound: BoundTenant<P>,
    ecs_fargate_blueprints: Option<BTreeMap<S, EcsFargateBlueprint>>,
    rds_blueprints: Option<BTreeMap<S, DatabaseBlueprint>>,
}

impl<P: Product, S: ServiceType> ResolvedTenant<P, S> {
    pub(super) fn new(
        bound: BoundTenant<P>,
        ecs_fargate_blueprints: Option<BTreeMap<S, EcsFargateBlueprint>>,
        rds_blueprints: Option<BTreeMap<S, DatabaseBlueprint>>,
    ) -> Self {
        Self {
            bound,
            ecs_fargate_blueprints,
            rds_blueprints,
        }
    }

    /// Environment-bound state the blueprints were registered on
    pub fn bound(&self) -> &BoundTenant<P> {
        &self.bound
    }

    /// ECS Fargate blueprints by service
    ///
    /// Fails with [`TenantError::BlueprintsUndefined`] when none were stored.
    pub fn ecs_fargate_blueprints(&self) -> TenantResult<&BTreeMap<S, EcsFargateBlueprint>> {
        Self::defined(self.ecs_fargate_blueprints.as_ref(), BlueprintKind::EcsFargate)
    }

    /// RDS blueprints by service
    ///
    /// Fails with [`TenantError::BlueprintsUndefined`] when none were stored.
    pub fn rds_blueprints(&self) -> TenantResult<&BTreeMap<S, DatabaseBlueprint>> {
        Self::defined(self.rds_blueprints.as_ref(), BlueprintKind::Rds)
    }

    fn defined<B>(map: Option<&BTreeMap<S, B>>, kind: BlueprintKind) -> TenantResult<&BTreeMap<S, B>> {
        match map {
            Some(map) if !map.is_empty() => Ok(map),
            _ => Err(TenantError::BlueprintsUndefined(kind)),
        }
    }
}

impl<P: Product, S: ServiceType> TenantProfile for ResolvedTenant<P, S> {
    type Product = P;

    fn base(&self) -> &TenantBase<P> {
        self.bound.base()
    }

    fn environment(&self) -> Option<AppEnvironment> {
        self.bound.environment()
    }

    fn vpc_cidr(&self) -> Option<CidrBlock> {
        self.bound.vpc_cidr()
    }
}
