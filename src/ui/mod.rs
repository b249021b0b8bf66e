// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`toast`] - Presentation sites, the toast card and its overlay
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod toast;
