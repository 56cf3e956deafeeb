//! # Rate Tables
//!
//! Every constant the quote engine and the door registry use. The defaults
//! are the published shop rates; a TOML file can override any subset.
//!
//! ## File Format
//!
//! ```toml
//! [pricing]
//! footprint_per_sqft = 37.5
//! garage_door = 2200.0
//!
//! [placement]
//! edge_margin_ft = 1.0
//! ```
//!
//! Keys that are left out keep their default value.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::config::QuoteConfig;
//!
//! let config = QuoteConfig::from_toml_str("[pricing]\nwalk_door = 950.0\n").unwrap();
//! assert_eq!(config.pricing.walk_door, 950.0);
//! assert_eq!(config.pricing.garage_door, 2000.0);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{QuoteCoreResult, QuoteError};

/// Full configuration: prices plus door placement rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    pub pricing: PriceSchedule,
    pub placement: PlacementRules,
}

impl QuoteConfig {
    /// Parse a TOML document. Missing tables and keys fall back to defaults.
    pub fn from_toml_str(source: &str) -> QuoteCoreResult<Self> {
        toml::from_str(source).map_err(|e| QuoteError::config_error("<inline>", e.to_string()))
    }

    /// Load a TOML rate file from disk.
    pub fn load(path: &Path) -> QuoteCoreResult<Self> {
        let source = fs::read_to_string(path)
            .map_err(|e| QuoteError::config_error(path.display().to_string(), e.to_string()))?;
        let config: QuoteConfig = toml::from_str(&source)
            .map_err(|e| QuoteError::config_error(path.display().to_string(), e.to_string()))?;
        info!(path = %path.display(), "loaded rate table");
        Ok(config)
    }

    /// Render as TOML, e.g. to seed a rate file with the current defaults.
    pub fn to_toml_string(&self) -> QuoteCoreResult<String> {
        toml::to_string_pretty(self).map_err(|e| QuoteError::serialization(e.to_string()))
    }
}

/// Prices, in dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceSchedule {
    /// Concrete slab and metal building, per square foot of footprint
    pub footprint_per_sqft: f64,

    /// Sidewall height included in the footprint price (ft)
    pub included_sidewall_ft: f64,

    /// Per square foot of wall above `included_sidewall_ft`, around the perimeter
    pub extra_height_per_sqft: f64,

    /// Per walk door
    pub walk_door: f64,

    /// Per garage door
    pub garage_door: f64,

    /// Spray foam, per square foot of envelope
    pub spray_foam_per_sqft: f64,

    /// Applied to the whole quote for premium color
    pub premium_color_multiplier: f64,
}

impl Default for PriceSchedule {
    fn default() -> Self {
        PriceSchedule {
            footprint_per_sqft: 35.0,
            included_sidewall_ft: 12.0,
            extra_height_per_sqft: 6.0,
            walk_door: 800.0,
            garage_door: 2000.0,
            spray_foam_per_sqft: 2.0,
            premium_color_multiplier: 1.15,
        }
    }
}

/// Door placement rules, in feet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementRules {
    /// Wall required above a garage door opening
    pub garage_header_clearance_ft: f64,

    /// Distance a door moves per nudge
    pub move_step_ft: f64,

    /// Minimum gap between a door edge and the wall corner
    pub edge_margin_ft: f64,
}

impl Default for PlacementRules {
    fn default() -> Self {
        PlacementRules {
            garage_header_clearance_ft: 2.0,
            move_step_ft: 0.5,
            edge_margin_ft: 0.5,
        }
    }
}
