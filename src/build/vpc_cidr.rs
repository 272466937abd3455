// Copyright (c) 2025 - Cowboy AI, Inc.
//! VPC CIDR Derivation
//!
//! | Range class    | prod           | uat             | dev / local     |
//! |----------------|----------------|-----------------|-----------------|
//! | `LargeCompany` | 10.0.0.0/16    | 10.1.0.0/16     | 10.2.0.0/16     |
//! | `BigCompany`   | 172.16.0.0/20  | 172.16.16.0/20  | 172.16.32.0/20  |
//! | `SmallCompany` | 192.168.0.0/24 | 192.168.16.0/24 | 192.168.32.0/24 |
//!
//! Each environment takes its own slot within the range class, so blocks of
//! different deployed environments never overlap. Local shares the dev slot.

use std::net::Ipv4Addr;

use crate::domain::{AppEnvironment, CidrBlock, IpPrivateRanges};
use crate::errors::TenantResult;

/// Maps a private range class and environment to the tenant VPC block
pub struct VpcCidrBuilder;

impl VpcCidrBuilder {
    /// Derive the VPC block for `range` in `environment`
    pub fn build(range: IpPrivateRanges, environment: AppEnvironment) -> CidrBlock {
        let slot = Self::slot(environment);

        let address = match range {
            IpPrivateRanges::LargeCompany => Ipv4Addr::new(10, slot, 0, 0),
            IpPrivateRanges::BigCompany => Ipv4Addr::new(172, 16, slot * 16, 0),
            IpPrivateRanges::SmallCompany => Ipv4Addr::new(192, 168, slot * 16, 0),
        };

        CidrBlock::from_trusted(address, range.vpc_prefix_length())
    }

    /// Derive the VPC block from a range literal (class name or octet prefix)
    ///
    /// Unknown literals fail with `InvalidConfiguration`.
    pub fn build_from_literal(range: &str, environment: AppEnvironment) -> TenantResult<CidrBlock> {
        Ok(Self::build(range.parse()?, environment))
    }

    fn slot(environment: AppEnvironment) -> u8 {
        match environment {
            AppEnvironment::Prod => 0,
            AppEnvironment::Uat => 1,
            AppEnvironment::Dev | AppEnvironment::Local => 2,
        }
    }
}
