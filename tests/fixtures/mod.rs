// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-tenant-infrastructure
//!
//! Deterministic tenants and blueprints shared by the integration tests.
//! Fixtures use closed enum vocabularies, the way callers are expected to.
//!
//! # Design Principles
//! - All test data is fixed; the same fixture always builds the same tenant
//! - Fixtures are the ONLY place that spells out tenant inputs

#![allow(dead_code)]

use cim_tenant_infrastructure::{
    DatabaseBlueprint, EcsFargateBlueprint, InfrastructureType, IpPrivateRanges, PrefixListCidr,
    Product, ServiceType, TenantBase,
};
use cim_tenant_infrastructure::blueprints::{RdsCapacity, RdsPerformance};

pub const COMPANY: &str = "acme";
pub const PRINCIPAL_DNS: &str = "acme.io";
pub const AWS_ACCOUNT: &str = "123456789012";
pub const AWS_REGION: &str = "eu-west-1";
pub const CERTIFICATE_ARN: &str =
    "arn:aws:acm:eu-west-1:123456789012:certificate/00000000-0000-0000-0000-000000000001";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Products {
    App,
    Billing,
}

impl Product for Products {
    fn value(&self) -> &str {
        match self {
            Products::App => "app",
            Products::Billing => "billing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Services {
    Api,
    Worker,
    Orders,
}

impl ServiceType for Services {
    fn value(&self) -> &str {
        match self {
            Services::Api => "api",
            Services::Worker => "worker",
            Services::Orders => "orders",
        }
    }
}

pub fn office_prefix() -> PrefixListCidr {
    PrefixListCidr::new("203.0.113.0/24", "office")
}

pub fn vpn_prefix() -> PrefixListCidr {
    PrefixListCidr::new("198.51.100.7/32", "vpn")
}

/// Network tenant with both allow-listed prefixes
pub fn network_tenant(
    infrastructure_type: InfrastructureType,
    range: IpPrivateRanges,
) -> TenantBase<Products> {
    TenantBase::builder(COMPANY, Products::App, PRINCIPAL_DNS, infrastructure_type)
        .aws_account(AWS_ACCOUNT)
        .aws_region(AWS_REGION)
        .certificate_arn(CERTIFICATE_ARN)
        .ip_private_ranges(range)
        .prefix_list_cidr(office_prefix())
        .prefix_list_cidr(vpn_prefix())
        .build()
        .expect("Invalid network tenant fixture")
}

pub fn rds_only_tenant() -> TenantBase<Products> {
    network_tenant(InfrastructureType::RdsOnly, IpPrivateRanges::LargeCompany)
}

pub fn fargate_tenant() -> TenantBase<Products> {
    network_tenant(InfrastructureType::EcsFargateRds, IpPrivateRanges::BigCompany)
}

pub fn serverless_tenant() -> TenantBase<Products> {
    TenantBase::builder(COMPANY, Products::App, PRINCIPAL_DNS, InfrastructureType::Serverless)
        .aws_region(AWS_REGION)
        .build()
        .expect("Invalid serverless tenant fixture")
}

pub fn api_fargate() -> EcsFargateBlueprint {
    EcsFargateBlueprint::new(512, 1024)
        .and_then(|bp| bp.with_scaling(1, 2, 4))
        .expect("Invalid Fargate fixture")
}

pub fn worker_fargate() -> EcsFargateBlueprint {
    EcsFargateBlueprint::new(1024, 4096).expect("Invalid Fargate fixture")
}

pub fn orders_database() -> DatabaseBlueprint {
    DatabaseBlueprint::new(
        RdsCapacity::new("db.r6g.large", 100)
            .with_max_allocated_storage(500)
            .with_multi_az(),
        RdsPerformance::default(),
    )
    .expect("Invalid database fixture")
}
