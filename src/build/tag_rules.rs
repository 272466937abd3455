// Copyright (c) 2025 - Cowboy AI, Inc.
//! Mandatory Resource Tags
//!
//! Every provisioned resource carries `company`, `product` and `environment`
//! tags taken from the tenant. Deriving the set is pure; applying it goes
//! through the [`Taggable`] seam implemented by the provisioning layer.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::domain::Product;
use crate::errors::TenantResult;
use crate::tenant::invariants::require_environment;
use crate::tenant::TenantProfile;

/// Provisioning target that accepts key/value tags
pub trait Taggable {
    fn add_tag(&mut self, key: &str, value: &str);
}

impl Taggable for BTreeMap<String, String> {
    fn add_tag(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }
}

/// Derived mandatory tag set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagRules(BTreeMap<&'static str, String>);

impl TagRules {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tags in key order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }
}

/// Derives and applies the mandatory tag set
pub struct TagRulesBuilder;

impl TagRulesBuilder {
    pub const COMPANY: &'static str = "company";
    pub const PRODUCT: &'static str = "product";
    pub const ENVIRONMENT: &'static str = "environment";

    /// Derive the tag set for an environment-bound tenant
    ///
    /// Fails with `InvalidConfiguration` when no environment is set.
    pub fn build<T: TenantProfile + ?Sized>(tenant: &T) -> TenantResult<TagRules> {
        let environment = require_environment(tenant.environment())?;

        let tags = BTreeMap::from([
            (Self::COMPANY, tenant.company().to_string()),
            (Self::PRODUCT, tenant.product().value().to_string()),
            (Self::ENVIRONMENT, environment.value().to_string()),
        ]);

        Ok(TagRules(tags))
    }

    /// Derive the tag set and add every tag to `target`
    pub fn apply<T, G>(target: &mut G, tenant: &T) -> TenantResult<TagRules>
    where
        T: TenantProfile + ?Sized,
        G: Taggable + ?Sized,
    {
        let rules = Self::build(tenant)?;
        for (key, value) in rules.iter() {
            target.add_tag(key, value);
        }
        debug!("Applied {} tags for tenant {}", rules.len(), tenant.company());
        Ok(rules)
    }
}
