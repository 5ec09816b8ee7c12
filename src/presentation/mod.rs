//! Presentation layer for visual styling and color mapping.
//!
//! This module contains presentation logic separated from sequencing logic:
//! - Theme color lookup with fallback
//! - Accent colors for outbound link kinds

pub mod color_mapping;
