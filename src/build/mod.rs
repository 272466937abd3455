// Copyright (c) 2025 - Cowboy AI, Inc.
//! Derivations from a tenant and its environment
//!
//! - [`VpcCidrBuilder`] - environment-aware VPC block
//! - [`TagRulesBuilder`] - mandatory resource tags
//! - [`ResourceNames`] - canonical resource identifiers

pub mod naming;
pub mod tag_rules;
pub mod vpc_cidr;

pub use naming::ResourceNames;
pub use tag_rules::{TagRules, TagRulesBuilder, Taggable};
pub use vpc_cidr::VpcCidrBuilder;
