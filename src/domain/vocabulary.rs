// Copyright (c) 2025 - Cowboy AI, Inc.
//! Caller-Defined Vocabularies
//!
//! Tenants are parameterized by two vocabularies the caller owns: the product
//! being deployed and the service types blueprints are keyed by. Callers
//! usually implement these traits on their own closed enums:
//!
//! ```rust
//! use cim_tenant_infrastructure::domain::{Product, ServiceType};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Products {
//!     App,
//! }
//!
//! impl Product for Products {
//!     fn value(&self) -> &str {
//!         "app"
//!     }
//! }
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
//! enum Services {
//!     Api,
//!     Worker,
//! }
//!
//! impl ServiceType for Services {
//!     fn value(&self) -> &str {
//!         match self {
//!             Services::Api => "api",
//!             Services::Worker => "worker",
//!         }
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product vocabulary; the value is embedded in DNS names, tags and resource names
pub trait Product: Clone + Eq + fmt::Debug {
    fn value(&self) -> &str;
}

/// Service-type vocabulary blueprint maps are keyed by
///
/// `Ord` keeps blueprint maps in a stable order across builds.
pub trait ServiceType: Clone + Ord + fmt::Debug {
    fn value(&self) -> &str;
}

/// String-backed product, used when tenants are described by a manifest
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductName(String);

impl ProductName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl Product for ProductName {
    fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// String-backed service type, used when tenants are described by a manifest
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceName(String);

impl ServiceName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl ServiceType for ServiceName {
    fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
