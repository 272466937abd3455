// Copyright (c) 2025 - Cowboy AI, Inc.
//! Tenant Configuration Aggregate
//!
//! A tenant moves through three typed states, each transition producing a
//! new value:
//!
//! ```text
//! TenantBase ──local/dev/uat/prod──▶ BoundTenant ──register_blueprints──▶ ResolvedTenant
//! (configured)                       (environment bound)                  (blueprint bound)
//! ```
//!
//! - [`TenantBase`] holds identity, DNS naming and network posture, validated
//!   eagerly at construction.
//! - [`BoundTenant`] fixes the environment and derives the VPC CIDR. Binding
//!   again always starts from the configured base, so the last binding wins.
//! - [`ResolvedTenant`] carries the blueprint maps routed by infrastructure type.
//!
//! All three expose their read-only fields through [`TenantProfile`].

pub mod base;
pub mod bound;
pub mod invariants;
pub mod resolved;

pub use base::{TenantBase, TenantBaseBuilder};
pub use bound::BoundTenant;
pub use resolved::ResolvedTenant;

use crate::domain::{
    AppEnvironment, CidrBlock, DnsName, InfrastructureType, IpPrivateRanges, PrefixListCidr,
    Product,
};

/// Read-only view of a tenant shared by every lifecycle state
///
/// Downstream provisioning code, tag derivation and resource naming only
/// depend on this trait.
pub trait TenantProfile {
    type Product: Product;

    /// Configured tenant this view is derived from
    fn base(&self) -> &TenantBase<Self::Product>;

    /// Environment fixed by the lifecycle step, if any
    fn environment(&self) -> Option<AppEnvironment>;

    /// VPC block for the bound environment; never set for serverless tenants
    fn vpc_cidr(&self) -> Option<CidrBlock>;

    fn company(&self) -> &str {
        &self.base().company
    }

    fn product(&self) -> &Self::Product {
        &self.base().product
    }

    fn aws_account(&self) -> Option<&str> {
        self.base().aws_account.as_deref()
    }

    fn aws_region(&self) -> Option<&str> {
        self.base().aws_region.as_deref()
    }

    fn certificate_arn(&self) -> Option<&str> {
        self.base().certificate_arn.as_deref()
    }

    /// `{product}.{principal_dns}`
    fn federated_dns(&self) -> &DnsName {
        &self.base().federated_dns
    }

    /// `internal.{federated_dns}`
    fn private_dns(&self) -> &DnsName {
        &self.base().private_dns
    }

    fn infrastructure_type(&self) -> InfrastructureType {
        self.base().infrastructure_type
    }

    fn ip_private_ranges(&self) -> Option<IpPrivateRanges> {
        self.base().ip_private_ranges
    }

    fn prefix_list_cidrs(&self) -> Option<&[PrefixListCidr]> {
        self.base().prefix_list_cidrs.as_deref()
    }
}
