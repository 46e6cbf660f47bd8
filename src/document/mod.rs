//! Offer document rendering.
//!
//! This module turns computed metrics into a human-readable compensation
//! offer document. All display rounding happens here; the calculation
//! layer hands over exact values.

mod currency;
mod offer;

pub use currency::{format_currency, format_signed_currency};
pub use offer::{LEGAL_DISCLAIMER, render_offer_document};
