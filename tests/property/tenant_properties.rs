// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Tenant Resolution
//!
//! Properties that must hold for every tenant input: resolution is
//! deterministic, the last environment binding wins, serverless tenants never
//! receive a network, and /16 prefix-list entries are always rejected.

use cim_tenant_infrastructure::{
    AppEnvironment, InfrastructureType, IpPrivateRanges, PrefixListCidr, ProductName,
    TagRulesBuilder, TenantBase, TenantProfile, VpcCidrBuilder,
};
use proptest::prelude::*;

// ============================================================================
// Generators
// ============================================================================

fn environment() -> impl Strategy<Value = AppEnvironment> {
    prop::sample::select(AppEnvironment::ALL.to_vec())
}

fn range() -> impl Strategy<Value = IpPrivateRanges> {
    prop::sample::select(IpPrivateRanges::ALL.to_vec())
}

fn network_type() -> impl Strategy<Value = InfrastructureType> {
    prop::sample::select(vec![
        InfrastructureType::EcsFargateRds,
        InfrastructureType::EcsEc2Rds,
        InfrastructureType::RdsOnly,
    ])
}

/// Allow-listed entry that never carries a /16 mask
fn allowed_prefix() -> impl Strategy<Value = PrefixListCidr> {
    (any::<[u8; 4]>(), 17u8..=32, "[a-z ]{0,12}").prop_map(|(octets, mask, description)| {
        let [a, b, c, d] = octets;
        PrefixListCidr::new(format!("{a}.{b}.{c}.{d}/{mask}"), description)
    })
}

fn company() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,15}"
}

fn product() -> impl Strategy<Value = ProductName> {
    "[a-z][a-z0-9]{0,10}".prop_map(ProductName::new)
}

fn network_tenant(
    company: String,
    product: ProductName,
    infrastructure_type: InfrastructureType,
    range: IpPrivateRanges,
    prefixes: Vec<PrefixListCidr>,
) -> TenantBase<ProductName> {
    TenantBase::builder(company, product, "example.com", infrastructure_type)
        .ip_private_ranges(range)
        .prefix_list_cidrs(prefixes)
        .build()
        .expect("generated tenant is valid")
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Same inputs always produce the same bound tenant and tags
    #[test]
    fn prop_resolution_is_deterministic(
        company in company(),
        product in product(),
        infrastructure_type in network_type(),
        range in range(),
        prefixes in prop::collection::vec(allowed_prefix(), 1..5),
        env in environment(),
    ) {
        let first = network_tenant(company.clone(), product.clone(), infrastructure_type, range, prefixes.clone());
        let second = network_tenant(company, product, infrastructure_type, range, prefixes);

        prop_assert_eq!(first.bind(env), second.bind(env));
        prop_assert_eq!(
            TagRulesBuilder::build(&first.bind(env)).unwrap(),
            TagRulesBuilder::build(&second.bind(env)).unwrap()
        );
    }

    /// Any chain of environment calls ends in the last environment's state
    #[test]
    fn prop_last_environment_call_wins(
        range in range(),
        first in environment(),
        chain in prop::collection::vec(environment(), 1..6),
    ) {
        let tenant = network_tenant(
            "acme".to_string(),
            ProductName::new("app"),
            InfrastructureType::RdsOnly,
            range,
            vec![PrefixListCidr::new("203.0.113.0/24", "office")],
        );

        let mut bound = tenant.bind(first);
        for env in &chain {
            bound = bound.rebind(*env);
        }

        let last = *chain.last().expect("chain is non-empty");
        prop_assert_eq!(bound.environment(), Some(last));
        prop_assert_eq!(bound.vpc_cidr(), Some(VpcCidrBuilder::build(range, last)));
        prop_assert_eq!(bound, tenant.bind(last));
    }

    /// Serverless tenants never carry network fields, whatever they were given
    #[test]
    fn prop_serverless_never_gets_network(
        range in prop::option::of(range()),
        prefixes in prop::option::of(prop::collection::vec(allowed_prefix(), 0..3)),
        env in environment(),
    ) {
        let mut builder = TenantBase::builder(
            "acme",
            ProductName::new("app"),
            "example.com",
            InfrastructureType::Serverless,
        );
        if let Some(range) = range {
            builder = builder.ip_private_ranges(range);
        }
        if let Some(prefixes) = prefixes {
            builder = builder.prefix_list_cidrs(prefixes);
        }

        let bound = builder.build().expect("serverless tenant is valid").bind(env);
        prop_assert_eq!(bound.vpc_cidr(), None);
        prop_assert_eq!(bound.ip_private_ranges(), None);
        prop_assert!(bound.prefix_list_cidrs().is_none());
    }

    /// A single /16 entry anywhere in the list rejects the tenant
    #[test]
    fn prop_reserved_mask_always_rejected(
        infrastructure_type in network_type(),
        prefixes in prop::collection::vec(allowed_prefix(), 0..4),
        position in any::<prop::sample::Index>(),
        octets in any::<[u8; 2]>(),
    ) {
        let mut prefixes = prefixes;
        let at = position.index(prefixes.len() + 1);
        prefixes.insert(at, PrefixListCidr::new(format!("10.{}.{}.0/16", octets[0], octets[1]), "vpc"));

        let result = TenantBase::builder("acme", ProductName::new("app"), "example.com", infrastructure_type)
            .ip_private_ranges(IpPrivateRanges::LargeCompany)
            .prefix_list_cidrs(prefixes)
            .build();
        prop_assert!(result.is_err());
    }

    /// Entries without a /16 mask always pass validation
    #[test]
    fn prop_allowed_prefixes_validate(prefix in allowed_prefix()) {
        prop_assert!(prefix.validate_cidr().is_ok());
    }
}
