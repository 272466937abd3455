// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! This module contains property-based tests using proptest to verify
//! properties of tenant configuration that hold for all valid inputs.

mod tenant_properties;
