// Copyright (c) 2025 - Cowboy AI, Inc.
//! Tenant Domain Vocabulary
//!
//! Closed vocabularies and value objects the tenant aggregate is built from.
//!
//! # Vocabularies
//!
//! - [`AppEnvironment`] - deployment stage (local, dev, uat, prod)
//! - [`InfrastructureType`] - hosting model gating network and blueprint rules
//! - [`IpPrivateRanges`] - RFC 1918 range class a tenant VPC is carved from
//! - [`Product`] / [`ServiceType`] - caller-owned vocabularies
//!
//! # Value Objects with Invariants
//!
//! - [`PrefixListCidr`] - allow-listed CIDR entry (no /16 masks)
//! - [`CidrBlock`] - IPv4 block in CIDR notation
//! - [`DnsName`] - RFC 1123 validated DNS name

pub mod environment;
pub mod hostname;
pub mod infrastructure_type;
pub mod network;
pub mod vocabulary;

pub use environment::AppEnvironment;
pub use hostname::{DnsName, DnsNameError};
pub use infrastructure_type::InfrastructureType;
pub use network::{CidrBlock, IpPrivateRanges, NetworkError, PrefixListCidr};
pub use vocabulary::{Product, ProductName, ServiceName, ServiceType};
