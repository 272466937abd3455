// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Value Objects with Validation Invariants

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;
use thiserror::Error;

use crate::errors::{TenantError, TenantResult};

/// Network validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Invalid IPv4 address format: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid CIDR notation: {0}")]
    InvalidCidr(String),

    #[error("Invalid prefix length: {0} (must be 0-32)")]
    InvalidPrefixLength(u8),

    #[error("CIDR must not be /16, the mask is reserved for the tenant VPC: {0}")]
    ReservedVpcMask(String),

    #[error("Unknown private IP range: {0}")]
    UnknownRange(String),
}

/// Private IPv4 range classes defined by RFC 1918
///
/// - `LargeCompany`: 10.x, VPC blocks of /16 (65536 addresses)
/// - `BigCompany`: 172.16.x, VPC blocks of /20 (4096 addresses)
/// - `SmallCompany`: 192.168.x, VPC blocks of /24 (256 addresses)
///
/// Parsing and deserialization accept either the class name (`big_company`)
/// or its octet prefix (`172.16`); serialization writes the class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IpPrivateRanges {
    LargeCompany,
    BigCompany,
    SmallCompany,
}

impl IpPrivateRanges {
    /// Every range class
    pub const ALL: [IpPrivateRanges; 3] = [Self::LargeCompany, Self::BigCompany, Self::SmallCompany];

    /// Leading octets shared by every block of the range
    pub fn value(&self) -> &'static str {
        match self {
            Self::LargeCompany => "10",
            Self::BigCompany => "172.16",
            Self::SmallCompany => "192.168",
        }
    }

    /// Prefix length of a tenant VPC carved from this range
    pub fn vpc_prefix_length(&self) -> u8 {
        match self {
            Self::LargeCompany => 16,
            Self::BigCompany => 20,
            Self::SmallCompany => 24,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::LargeCompany => "large_company",
            Self::BigCompany => "big_company",
            Self::SmallCompany => "small_company",
        }
    }
}

impl fmt::Display for IpPrivateRanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for IpPrivateRanges {
    type Err = TenantError;

    /// Accepts either the class name (`big_company`) or its octet prefix (`172.16`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|range| range.name() == wanted || range.value() == wanted)
            .ok_or_else(|| NetworkError::UnknownRange(s.to_string()).into())
    }
}

impl TryFrom<String> for IpPrivateRanges {
    type Error = TenantError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<IpPrivateRanges> for String {
    fn from(range: IpPrivateRanges) -> Self {
        range.name().to_string()
    }
}

/// One allow-listed CIDR block with a human description
///
/// Validation is syntactic only: the literal is rejected when it carries a
/// `/16` mask. No subnet containment against the tenant VPC is computed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrefixListCidr {
    cidr: String,
    description: String,
}

impl PrefixListCidr {
    pub fn new(cidr: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            cidr: cidr.into(),
            description: description.into(),
        }
    }

    pub fn cidr(&self) -> &str {
        &self.cidr
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Reject literals that use the /16 mask reserved for the tenant VPC
    pub fn validate_cidr(&self) -> TenantResult<()> {
        if self.cidr.contains("/16") {
            return Err(NetworkError::ReservedVpcMask(self.cidr.clone()).into());
        }
        Ok(())
    }
}

/// IPv4 network block in CIDR notation
///
/// Invariants:
/// - Valid dotted-quad address
/// - Prefix length 0-32
///
/// # Examples
///
/// ```rust
/// use cim_tenant_infrastructure::domain::CidrBlock;
///
/// let block = CidrBlock::new("10.2.0.0/16").unwrap();
/// assert_eq!(block.prefix_length(), 16);
/// assert_eq!(block.to_string(), "10.2.0.0/16");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CidrBlock {
    address: Ipv4Addr,
    prefix_length: u8,
}

impl CidrBlock {
    /// Parse a `a.b.c.d/n` literal
    pub fn new(cidr: impl AsRef<str>) -> Result<Self, NetworkError> {
        let cidr = cidr.as_ref();
        let (addr_str, prefix_str) = cidr
            .split_once('/')
            .ok_or_else(|| NetworkError::InvalidCidr(cidr.to_string()))?;

        let address = Ipv4Addr::from_str(addr_str)
            .map_err(|_| NetworkError::InvalidIpAddress(addr_str.to_string()))?;

        let prefix_length = prefix_str
            .parse::<u8>()
            .map_err(|_| NetworkError::InvalidCidr(cidr.to_string()))?;

        Self::from_parts(address, prefix_length)
    }

    /// Create from separate address and prefix
    pub fn from_parts(address: Ipv4Addr, prefix_length: u8) -> Result<Self, NetworkError> {
        if prefix_length > 32 {
            return Err(NetworkError::InvalidPrefixLength(prefix_length));
        }
        Ok(Self {
            address,
            prefix_length,
        })
    }

    /// Construct from parts already known to be in range
    pub(crate) fn from_trusted(address: Ipv4Addr, prefix_length: u8) -> Self {
        debug_assert!(prefix_length <= 32);
        Self {
            address,
            prefix_length,
        }
    }

    pub fn address(&self) -> Ipv4Addr {
        self.address
    }

    pub fn prefix_length(&self) -> u8 {
        self.prefix_length
    }

    /// Number of addresses covered by the block
    pub fn size(&self) -> u64 {
        1u64 << (32 - u32::from(self.prefix_length))
    }

    /// Whether two blocks share at least one address
    pub fn overlaps(&self, other: &CidrBlock) -> bool {
        let mask = Self::mask(self.prefix_length.min(other.prefix_length));
        u32::from(self.address) & mask == u32::from(other.address) & mask
    }

    /// Get as CIDR notation string
    pub fn as_cidr(&self) -> String {
        format!("{}/{}", self.address, self.prefix_length)
    }

    fn mask(prefix_length: u8) -> u32 {
        match prefix_length {
            0 => 0,
            n => u32::MAX << (32 - u32::from(n)),
        }
    }
}

impl fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_cidr())
    }
}

impl FromStr for CidrBlock {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CidrBlock {
    type Error = NetworkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CidrBlock> for String {
    fn from(block: CidrBlock) -> Self {
        block.as_cidr()
    }
}
