// Copyright (c) 2025 - Cowboy AI, Inc.
//! Tenant configuration for the Composable Information Machine
//!
//! Resolves a tenant description into environment-specific infrastructure
//! inputs: DNS names, a VPC CIDR block, allow-listed prefix lists, mandatory
//! tags, canonical resource names and per-service blueprints.
//!
//! The crate is pure: nothing here performs I/O, and the same inputs always
//! produce the same outputs.
//!
//! # Example
//!
//! ```rust
//! use cim_tenant_infrastructure::{
//!     BlueprintSet, EcsFargateBlueprint, InfrastructureType, IpPrivateRanges, PrefixListCidr,
//!     ProductName, ServiceName, TagRulesBuilder, TenantBase, TenantProfile,
//! };
//!
//! let tenant = TenantBase::builder(
//!     "acme",
//!     ProductName::new("app"),
//!     "acme.io",
//!     InfrastructureType::EcsFargateRds,
//! )
//! .ip_private_ranges(IpPrivateRanges::LargeCompany)
//! .prefix_list_cidr(PrefixListCidr::new("203.0.113.0/24", "office"))
//! .build()?;
//!
//! let resolved = tenant.dev().register_blueprints(
//!     BlueprintSet::new().ecs_fargate(ServiceName::new("api"), EcsFargateBlueprint::new(512, 1024)?),
//! )?;
//!
//! assert_eq!(resolved.vpc_cidr().unwrap().to_string(), "10.2.0.0/16");
//! assert_eq!(resolved.private_dns().as_str(), "internal.app.acme.io");
//! assert_eq!(TagRulesBuilder::build(&resolved)?.get("environment"), Some("dev"));
//! # Ok::<(), cim_tenant_infrastructure::TenantError>(())
//! ```

pub mod blueprints;
pub mod build;
pub mod domain;
pub mod errors;
pub mod manifest;
pub mod summary;
pub mod tenant;

pub use blueprints::{
    BlueprintError, BlueprintKind, BlueprintSet, DatabaseBlueprint, EcsFargateBlueprint,
    FunctionBlueprint,
};
pub use build::{ResourceNames, TagRules, TagRulesBuilder, Taggable, VpcCidrBuilder};
pub use domain::{
    AppEnvironment, CidrBlock, DnsName, InfrastructureType, IpPrivateRanges, PrefixListCidr,
    Product, ProductName, ServiceName, ServiceType,
};
pub use errors::{TenantError, TenantResult};
pub use manifest::{BlueprintManifest, TenantManifest};
pub use summary::TenantSummary;
pub use tenant::{BoundTenant, ResolvedTenant, TenantBase, TenantProfile};
