// Copyright (c) 2025 - Cowboy AI, Inc.
//! Configured Tenant

use tracing::{debug, info};

use super::invariants::{validate_company, validate_ip_private_ranges, validate_prefix_list_cidrs};
use super::{BoundTenant, TenantProfile};
use crate::build::VpcCidrBuilder;
use crate::domain::{
    AppEnvironment, CidrBlock, DnsName, InfrastructureType, IpPrivateRanges, PrefixListCidr,
    Product,
};
use crate::errors::TenantResult;

/// Tenant identity, DNS naming and network posture
///
/// # Invariants
/// - Company is non-empty and has no whitespace
/// - `federated_dns` is `{product}.{principal_dns}` and `private_dns` is
///   `internal.{federated_dns}`; neither can be set directly
/// - Non-serverless tenants have a private IP range and a non-empty prefix
///   list whose entries avoid the /16 mask
/// - Serverless tenants never carry network fields
///
/// The environment and VPC CIDR are not part of this state; see
/// [`TenantBase::bind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantBase<P: Product> {
    pub(super) company: String,
    pub(super) product: P,
    pub(super) aws_account: Option<String>,
    pub(super) aws_region: Option<String>,
    pub(super) principal_dns: DnsName,
    pub(super) federated_dns: DnsName,
    pub(super) private_dns: DnsName,
    pub(super) certificate_arn: Option<String>,
    pub(super) infrastructure_type: InfrastructureType,
    pub(super) ip_private_ranges: Option<IpPrivateRanges>,
    pub(super) prefix_list_cidrs: Option<Vec<PrefixListCidr>>,
}

impl<P: Product> TenantBase<P> {
    /// Start describing a tenant
    pub fn builder(
        company: impl Into<String>,
        product: P,
        principal_dns: impl Into<String>,
        infrastructure_type: InfrastructureType,
    ) -> TenantBaseBuilder<P> {
        TenantBaseBuilder::new(company.into(), product, principal_dns.into(), infrastructure_type)
    }

    /// DNS root the federated zone is delegated from
    pub fn principal_dns(&self) -> &DnsName {
        &self.principal_dns
    }

    /// Fix the deployment environment and derive environment-scoped values
    ///
    /// The configured tenant is left untouched; every call derives a fresh
    /// [`BoundTenant`] from it.
    pub fn bind(&self, environment: AppEnvironment) -> BoundTenant<P> {
        self.clone().into_bound(environment)
    }

    pub fn local(&self) -> BoundTenant<P> {
        self.bind(AppEnvironment::Local)
    }

    pub fn dev(&self) -> BoundTenant<P> {
        self.bind(AppEnvironment::Dev)
    }

    pub fn uat(&self) -> BoundTenant<P> {
        self.bind(AppEnvironment::Uat)
    }

    pub fn prod(&self) -> BoundTenant<P> {
        self.bind(AppEnvironment::Prod)
    }

    pub(super) fn into_bound(self, environment: AppEnvironment) -> BoundTenant<P> {
        let vpc_cidr = match (self.infrastructure_type.requires_network(), self.ip_private_ranges) {
            (true, Some(range)) => Some(VpcCidrBuilder::build(range, environment)),
            _ => None,
        };

        info!(
            "Bound tenant {}-{} to {} (vpc cidr: {})",
            self.company,
            self.product.value(),
            environment,
            vpc_cidr.map_or_else(|| "none".to_string(), |cidr| cidr.to_string())
        );

        BoundTenant::new(self, environment, vpc_cidr)
    }
}

impl<P: Product> TenantProfile for TenantBase<P> {
    type Product = P;

    fn base(&self) -> &TenantBase<P> {
        self
    }

    fn environment(&self) -> Option<AppEnvironment> {
        None
    }

    fn vpc_cidr(&self) -> Option<CidrBlock> {
        None
    }
}

/// Builder for [`TenantBase`] with eager validation in [`TenantBaseBuilder::build`]
#[derive(Debug, Clone)]
pub struct TenantBaseBuilder<P: Product> {
    company: String,
    product: P,
    principal_dns: String,
    infrastructure_type: InfrastructureType,
    aws_account: Option<String>,
    aws_region: Option<String>,
    certificate_arn: Option<String>,
    ip_private_ranges: Option<IpPrivateRanges>,
    prefix_list_cidrs: Option<Vec<PrefixListCidr>>,
}

impl<P: Product> TenantBaseBuilder<P> {
    fn new(
        company: String,
        product: P,
        principal_dns: String,
        infrastructure_type: InfrastructureType,
    ) -> Self {
        Self {
            company,
            product,
            principal_dns,
            infrastructure_type,
            aws_account: None,
            aws_region: None,
            certificate_arn: None,
            ip_private_ranges: None,
            prefix_list_cidrs: None,
        }
    }

    pub fn aws_account(mut self, account: impl Into<String>) -> Self {
        self.aws_account = Some(account.into());
        self
    }

    pub fn aws_region(mut self, region: impl Into<String>) -> Self {
        self.aws_region = Some(region.into());
        self
    }

    pub fn certificate_arn(mut self, arn: impl Into<String>) -> Self {
        self.certificate_arn = Some(arn.into());
        self
    }

    pub fn ip_private_ranges(mut self, range: IpPrivateRanges) -> Self {
        self.ip_private_ranges = Some(range);
        self
    }

    /// Append one allow-listed block
    pub fn prefix_list_cidr(mut self, entry: PrefixListCidr) -> Self {
        self.prefix_list_cidrs.get_or_insert_with(Vec::new).push(entry);
        self
    }

    /// Replace the whole allow list, preserving its order
    pub fn prefix_list_cidrs(mut self, entries: Vec<PrefixListCidr>) -> Self {
        self.prefix_list_cidrs = Some(entries);
        self
    }

    /// Validate inputs and derive the DNS names
    pub fn build(self) -> TenantResult<TenantBase<P>> {
        validate_company(&self.company)?;
        validate_ip_private_ranges(self.infrastructure_type, self.ip_private_ranges)?;
        validate_prefix_list_cidrs(self.infrastructure_type, self.prefix_list_cidrs.as_deref())?;

        let principal_dns = DnsName::new(self.principal_dns)?;
        let federated_dns = principal_dns.prepend(self.product.value())?;
        let private_dns = federated_dns.prepend("internal")?;

        let (ip_private_ranges, prefix_list_cidrs) = if self.infrastructure_type.requires_network() {
            (self.ip_private_ranges, self.prefix_list_cidrs)
        } else {
            if self.ip_private_ranges.is_some() || self.prefix_list_cidrs.is_some() {
                debug!(
                    "Dropping network inputs for serverless tenant {}",
                    self.company
                );
            }
            (None, None)
        };

        debug!(
            "Configured tenant {} ({}) at {}",
            self.company, self.infrastructure_type, federated_dns
        );

        Ok(TenantBase {
            company: self.company,
            product: self.product,
            aws_account: self.aws_account,
            aws_region: self.aws_region,
            principal_dns,
            federated_dns,
            private_dns,
            certificate_arn: self.certificate_arn,
            infrastructure_type: self.infrastructure_type,
            ip_private_ranges,
            prefix_list_cidrs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductName;
    use crate::errors::TenantError;

    fn rds_builder() -> TenantBaseBuilder<ProductName> {
        TenantBase::builder(
            "acme",
            ProductName::new("app"),
            "example.com",
            InfrastructureType::RdsOnly,
        )
    }

    #[test]
    fn test_dns_derivation() {
        let tenant = TenantBase::builder(
            "acme",
            ProductName::new("api"),
            "acme.io",
            InfrastructureType::Serverless,
        )
        .build()
        .unwrap();

        assert_eq!(tenant.principal_dns().as_str(), "acme.io");
        assert_eq!(tenant.federated_dns().as_str(), "api.acme.io");
        assert_eq!(tenant.private_dns().as_str(), "internal.api.acme.io");
    }

    #[test]
    fn test_serverless_drops_network_inputs() {
        let tenant = TenantBase::builder(
            "acme",
            ProductName::new("app"),
            "example.com",
            InfrastructureType::Serverless,
        )
        .ip_private_ranges(IpPrivateRanges::LargeCompany)
        .prefix_list_cidr(PrefixListCidr::new("10.0.0.0/16", "ignored"))
        .build()
        .unwrap();

        assert_eq!(tenant.ip_private_ranges(), None);
        assert_eq!(tenant.prefix_list_cidrs(), None);
        assert_eq!(tenant.prod().vpc_cidr(), None);
    }

    #[test]
    fn test_network_tenant_requires_ranges() {
        let err = rds_builder()
            .prefix_list_cidr(PrefixListCidr::new("10.0.0.0/24", "office"))
            .build()
            .unwrap_err();
        assert!(matches!(err, TenantError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_network_tenant_requires_prefix_list() {
        let err = rds_builder()
            .ip_private_ranges(IpPrivateRanges::LargeCompany)
            .build()
            .unwrap_err();
        assert!(matches!(err, TenantError::InvalidConfiguration(_)));

        let err = rds_builder()
            .ip_private_ranges(IpPrivateRanges::LargeCompany)
            .prefix_list_cidrs(Vec::new())
            .build()
            .unwrap_err();
        assert!(matches!(err, TenantError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_prefix_list_order_is_kept() {
        let tenant = rds_builder()
            .ip_private_ranges(IpPrivateRanges::BigCompany)
            .prefix_list_cidr(PrefixListCidr::new("203.0.113.0/24", "office"))
            .prefix_list_cidr(PrefixListCidr::new("198.51.100.7/32", "vpn"))
            .build()
            .unwrap();

        let descriptions: Vec<_> = tenant
            .prefix_list_cidrs()
            .unwrap()
            .iter()
            .map(PrefixListCidr::description)
            .collect();
        assert_eq!(descriptions, vec!["office", "vpn"]);
    }

    #[test]
    fn test_invalid_identity() {
        assert!(TenantBase::builder(
            "",
            ProductName::new("app"),
            "example.com",
            InfrastructureType::Serverless
        )
        .build()
        .is_err());

        assert!(TenantBase::builder(
            "acme",
            ProductName::new("my app"),
            "example.com",
            InfrastructureType::Serverless
        )
        .build()
        .is_err());

        assert!(TenantBase::builder(
            "acme",
            ProductName::new("app"),
            "example..com",
            InfrastructureType::Serverless
        )
        .build()
        .is_err());
    }

    #[test]
    fn test_configured_tenant_has_no_environment() {
        let tenant = TenantBase::builder(
            "acme",
            ProductName::new("app"),
            "example.com",
            InfrastructureType::Serverless,
        )
        .build()
        .unwrap();

        assert_eq!(tenant.environment(), None);
        assert_eq!(tenant.vpc_cidr(), None);
    }
}
