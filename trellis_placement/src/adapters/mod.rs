// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with other Trellis crates.
//!
//! Each adapter is gated behind a feature flag to keep the resolver lightweight and `no_std` by default.
//!
//! ## Available Adapters
//!
//! - [`form`] (`form_adapter` feature): Integration with [`trellis_form`]. Implements the
//!   resolver's node, row lookup, and request contracts for `FormTree`, including the
//!   canvas-side handling of palette and row-member drops.

#[cfg(feature = "form_adapter")]
pub mod form;
