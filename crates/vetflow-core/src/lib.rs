// ABOUTME: Core types and constants for the VetFlow veterinary nutrition calculator
// ABOUTME: Foundation crate with error handling, domain models, and veterinary constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VetFlow

#![deny(unsafe_code)]

//! # `VetFlow` Core
//!
//! Foundation crate providing shared types and constants for the `VetFlow`
//! nutrition calculator. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Veterinary energy constants and input validation bounds
//! - **models**: Animal profile, nutritional objective, product, and energy result types

/// Unified error handling system with standard error codes
pub mod errors;

/// Veterinary constants and validation bounds organized by domain
pub mod constants;

/// Core data models (`AnimalProfile`, `Product`, `EnergyResult`, etc.)
pub mod models;
