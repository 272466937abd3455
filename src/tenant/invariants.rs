// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Tenant Invariants
//!
//! All business rules the tenant aggregate enforces at construction time,
//! plus the environment precondition shared by tag and name derivation.
//! Every function is pure and deterministic.

use crate::domain::{AppEnvironment, InfrastructureType, IpPrivateRanges, PrefixListCidr};
use crate::errors::{TenantError, TenantResult};

/// Validate the company identifier
///
/// # Rules
/// - Must not be empty
/// - Must not contain whitespace (it is embedded in resource names)
pub fn validate_company(company: &str) -> TenantResult<()> {
    if company.is_empty() {
        return Err(TenantError::invalid("company must not be empty"));
    }
    if company.chars().any(char::is_whitespace) {
        return Err(TenantError::invalid(format!(
            "company must not contain whitespace: {:?}",
            company
        )));
    }
    Ok(())
}

/// Validate the private IP range is present when the tenant owns a VPC
pub fn validate_ip_private_ranges(
    infrastructure_type: InfrastructureType,
    ip_private_ranges: Option<IpPrivateRanges>,
) -> TenantResult<()> {
    if infrastructure_type.requires_network() && ip_private_ranges.is_none() {
        return Err(TenantError::invalid(format!(
            "ip_private_ranges must be defined for {} infrastructure type",
            infrastructure_type
        )));
    }
    Ok(())
}

/// Validate the prefix list when the tenant owns a VPC
///
/// # Rules
/// - Must be present and non-empty
/// - Every entry must pass [`PrefixListCidr::validate_cidr`]
pub fn validate_prefix_list_cidrs(
    infrastructure_type: InfrastructureType,
    prefix_list_cidrs: Option<&[PrefixListCidr]>,
) -> TenantResult<()> {
    if !infrastructure_type.requires_network() {
        return Ok(());
    }

    match prefix_list_cidrs {
        Some(entries) if !entries.is_empty() => {
            entries.iter().try_for_each(PrefixListCidr::validate_cidr)
        }
        _ => Err(TenantError::invalid(format!(
            "prefix_list_cidrs must be defined for {} infrastructure type",
            infrastructure_type
        ))),
    }
}

/// Require that a lifecycle method has fixed the environment
pub fn require_environment(environment: Option<AppEnvironment>) -> TenantResult<AppEnvironment> {
    environment.ok_or_else(|| {
        TenantError::invalid("environment is not set; call local(), dev(), uat() or prod() first")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_company() {
        assert!(validate_company("acme").is_ok());
        assert!(validate_company("").is_err());
        assert!(validate_company("acme corp").is_err());
    }

    #[test]
    fn test_serverless_needs_no_network() {
        assert!(validate_ip_private_ranges(InfrastructureType::Serverless, None).is_ok());
        assert!(validate_prefix_list_cidrs(InfrastructureType::Serverless, None).is_ok());
    }

    #[test]
    fn test_network_types_need_ranges() {
        let err = validate_ip_private_ranges(InfrastructureType::RdsOnly, None).unwrap_err();
        assert_eq!(
            err,
            TenantError::InvalidConfiguration(
                "ip_private_ranges must be defined for rds_only infrastructure type".to_string()
            )
        );
        assert!(validate_ip_private_ranges(
            InfrastructureType::EcsFargateRds,
            Some(IpPrivateRanges::SmallCompany)
        )
        .is_ok());
    }

    #[test]
    fn test_network_types_need_prefix_list() {
        let infra = InfrastructureType::EcsFargateRds;
        let valid = [PrefixListCidr::new("10.0.0.0/24", "office")];
        let reserved = [
            PrefixListCidr::new("10.0.0.0/24", "office"),
            PrefixListCidr::new("10.9.0.0/16", "vpc-sized"),
        ];

        assert!(validate_prefix_list_cidrs(infra, Some(&valid[..])).is_ok());
        assert!(validate_prefix_list_cidrs(infra, Some(&reserved[..])).is_err());
        assert!(validate_prefix_list_cidrs(infra, Some(&[][..])).is_err());
        assert!(validate_prefix_list_cidrs(infra, None).is_err());
    }

    #[test]
    fn test_require_environment() {
        assert_eq!(require_environment(Some(AppEnvironment::Uat)), Ok(AppEnvironment::Uat));
        assert!(matches!(
            require_environment(None),
            Err(TenantError::InvalidConfiguration(_))
        ));
    }
}
