//! # Building Data Structures
//!
//! The form state for a quote: building dimensions and options, plus the
//! customer's contact details.
//!
//! Dimensions are stored already normalized. Every write goes through
//! [`normalize_dimension`], so a `BuildingSpec` never holds a sidewall under
//! 8 ft, a length under 20 ft or a width under 12 ft.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::building::{BuildingSpec, ColorGrade, Dimension, RoofPitch};
//!
//! let mut spec = BuildingSpec::default();
//! spec.set_dimension(Dimension::Length, "36");
//! spec.set_dimension(Dimension::Width, "6"); // clamped
//! spec.set_color(ColorGrade::Premium);
//! spec.set_roof_pitch(RoofPitch::FourTwelve);
//!
//! assert_eq!(spec.length_ft(), 36.0);
//! assert_eq!(spec.width_ft(), 12.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::doors::WallSide;
use crate::validation::{clamp_dimension, normalize_dimension, pitch_ratio};

/// The three numeric form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    SidewallHeight,
    Length,
    Width,
}

impl Dimension {
    /// All dimension fields, in form order
    pub const ALL: [Dimension; 3] = [Dimension::SidewallHeight, Dimension::Length, Dimension::Width];

    /// Smallest value the field accepts, in feet
    pub fn minimum_ft(&self) -> f64 {
        match self {
            Dimension::SidewallHeight => 8.0,
            Dimension::Length => 20.0,
            Dimension::Width => 12.0,
        }
    }

    /// Stable key used in logs and the CLI
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::SidewallHeight => "sidewall_height",
            Dimension::Length => "length",
            Dimension::Width => "width",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> Option<Self> {
        match s.to_lowercase().replace([' ', '-'], "_").as_str() {
            "sidewall_height" | "sidewall" | "height" | "eave" => Some(Dimension::SidewallHeight),
            "length" | "len" => Some(Dimension::Length),
            "width" => Some(Dimension::Width),
            _ => None,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Dimension::SidewallHeight => "Sidewall Height",
            Dimension::Length => "Length",
            Dimension::Width => "Width",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Panel color grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorGrade {
    #[default]
    Normal,
    /// Premium finish, priced as a multiplier on the whole quote
    Premium,
}

impl ColorGrade {
    /// All color grades for UI selection
    pub const ALL: [ColorGrade; 2] = [ColorGrade::Normal, ColorGrade::Premium];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" | "standard" => Some(ColorGrade::Normal),
            "premium" => Some(ColorGrade::Premium),
            _ => None,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ColorGrade::Normal => "Normal",
            ColorGrade::Premium => "Premium (+15%)",
        }
    }
}

impl std::fmt::Display for ColorGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Roof pitch, rise over a 12 ft run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoofPitch {
    #[serde(rename = "1/12")]
    OneTwelve,
    #[serde(rename = "2/12")]
    TwoTwelve,
    #[default]
    #[serde(rename = "3/12")]
    ThreeTwelve,
    #[serde(rename = "4/12")]
    FourTwelve,
}

impl RoofPitch {
    /// All offered pitches, shallowest first
    pub const ALL: [RoofPitch; 4] = [
        RoofPitch::OneTwelve,
        RoofPitch::TwoTwelve,
        RoofPitch::ThreeTwelve,
        RoofPitch::FourTwelve,
    ];

    /// The "N/12" label
    pub fn label(&self) -> &'static str {
        match self {
            RoofPitch::OneTwelve => "1/12",
            RoofPitch::TwoTwelve => "2/12",
            RoofPitch::ThreeTwelve => "3/12",
            RoofPitch::FourTwelve => "4/12",
        }
    }

    /// Rise per foot of run
    pub fn ratio(&self) -> f64 {
        pitch_ratio(self.label())
    }

    /// Parse "3/12", "3:12" or a bare "3"
    pub fn from_str_flexible(s: &str) -> Option<Self> {
        let rise = s.trim().split(['/', ':']).next()?.trim();
        match rise {
            "1" => Some(RoofPitch::OneTwelve),
            "2" => Some(RoofPitch::TwoTwelve),
            "3" => Some(RoofPitch::ThreeTwelve),
            "4" => Some(RoofPitch::FourTwelve),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoofPitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Building dimensions and options.
///
/// ## JSON Example
///
/// ```json
/// {
///   "sidewall_height_ft": 10.0,
///   "length_ft": 30.0,
///   "width_ft": 40.0,
///   "color": "normal",
///   "roof_pitch": "3/12",
///   "spray_foam": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingSpec {
    sidewall_height_ft: f64,
    length_ft: f64,
    width_ft: f64,
    color: ColorGrade,
    roof_pitch: RoofPitch,
    spray_foam: bool,
}

impl BuildingSpec {
    /// Build a spec from raw dimension input, normalizing each field.
    pub fn new(sidewall_height: &str, length: &str, width: &str) -> Self {
        let mut spec = BuildingSpec::default();
        spec.set_dimension(Dimension::SidewallHeight, sidewall_height);
        spec.set_dimension(Dimension::Length, length);
        spec.set_dimension(Dimension::Width, width);
        spec
    }

    /// Set a dimension from raw form input. Returns the value actually stored.
    pub fn set_dimension(&mut self, field: Dimension, raw: &str) -> f64 {
        let value = normalize_dimension(field, raw);
        match field {
            Dimension::SidewallHeight => self.sidewall_height_ft = value,
            Dimension::Length => self.length_ft = value,
            Dimension::Width => self.width_ft = value,
        }
        value
    }

    /// Current value of a dimension, in feet
    pub fn dimension(&self, field: Dimension) -> f64 {
        match field {
            Dimension::SidewallHeight => self.sidewall_height_ft,
            Dimension::Length => self.length_ft,
            Dimension::Width => self.width_ft,
        }
    }

    pub fn set_color(&mut self, color: ColorGrade) {
        self.color = color;
    }

    pub fn set_roof_pitch(&mut self, pitch: RoofPitch) {
        self.roof_pitch = pitch;
    }

    pub fn set_spray_foam(&mut self, enabled: bool) {
        self.spray_foam = enabled;
    }

    pub fn sidewall_height_ft(&self) -> f64 {
        self.sidewall_height_ft
    }

    pub fn length_ft(&self) -> f64 {
        self.length_ft
    }

    pub fn width_ft(&self) -> f64 {
        self.width_ft
    }

    pub fn color(&self) -> ColorGrade {
        self.color
    }

    pub fn roof_pitch(&self) -> RoofPitch {
        self.roof_pitch
    }

    pub fn spray_foam(&self) -> bool {
        self.spray_foam
    }

    /// Copy with every dimension re-clamped to its minimum.
    ///
    /// Setters already clamp; this covers specs that arrived through
    /// deserialization.
    pub fn clamped(&self) -> Self {
        BuildingSpec {
            sidewall_height_ft: clamp_dimension(Dimension::SidewallHeight, self.sidewall_height_ft),
            length_ft: clamp_dimension(Dimension::Length, self.length_ft),
            width_ft: clamp_dimension(Dimension::Width, self.width_ft),
            ..self.clone()
        }
    }

    /// Length of the wall a door sits in.
    ///
    /// Left and right walls run the building length; front and back run the width.
    pub fn wall_span_ft(&self, side: WallSide) -> f64 {
        match side {
            WallSide::Left | WallSide::Right => clamp_dimension(Dimension::Length, self.length_ft),
            WallSide::Front | WallSide::Back => clamp_dimension(Dimension::Width, self.width_ft),
        }
    }

    /// Footprint area in square feet
    pub fn footprint_sqft(&self) -> f64 {
        self.length_ft * self.width_ft
    }

    /// Outside perimeter in feet
    pub fn perimeter_ft(&self) -> f64 {
        2.0 * (self.length_ft + self.width_ft)
    }
}

impl Default for BuildingSpec {
    fn default() -> Self {
        BuildingSpec {
            sidewall_height_ft: 10.0,
            length_ft: 30.0,
            width_ft: 40.0,
            color: ColorGrade::Normal,
            roof_pitch: RoofPitch::ThreeTwelve,
            spray_foam: false,
        }
    }
}

/// Customer contact details carried on the quote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub email: String,
}

impl CustomerInfo {
    /// True when no contact field has been filled in
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.phone.is_empty() && self.address.is_empty() && self.email.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_form() {
        let spec = BuildingSpec::default();
        assert_eq!(spec.sidewall_height_ft(), 10.0);
        assert_eq!(spec.length_ft(), 30.0);
        assert_eq!(spec.width_ft(), 40.0);
        assert_eq!(spec.color(), ColorGrade::Normal);
        assert_eq!(spec.roof_pitch(), RoofPitch::ThreeTwelve);
        assert!(!spec.spray_foam());
    }

    #[test]
    fn test_set_dimension_clamps() {
        let mut spec = BuildingSpec::default();
        assert_eq!(spec.set_dimension(Dimension::SidewallHeight, "6"), 8.0);
        assert_eq!(spec.set_dimension(Dimension::Length, ""), 20.0);
        assert_eq!(spec.set_dimension(Dimension::Width, "-30"), 12.0);
        assert_eq!(spec.dimension(Dimension::Width), 12.0);
    }

    #[test]
    fn test_wall_span_by_side() {
        let spec = BuildingSpec::new("10", "50", "24");
        assert_eq!(spec.wall_span_ft(WallSide::Left), 50.0);
        assert_eq!(spec.wall_span_ft(WallSide::Right), 50.0);
        assert_eq!(spec.wall_span_ft(WallSide::Front), 24.0);
        assert_eq!(spec.wall_span_ft(WallSide::Back), 24.0);
    }

    #[test]
    fn test_clamped_repairs_deserialized_spec() {
        let json = r#"{
            "sidewall_height_ft": 3.0,
            "length_ft": 10.0,
            "width_ft": 40.0,
            "color": "premium",
            "roof_pitch": "4/12",
            "spray_foam": true
        }"#;
        let spec: BuildingSpec = serde_json::from_str(json).unwrap();
        let clamped = spec.clamped();
        assert_eq!(clamped.sidewall_height_ft(), 8.0);
        assert_eq!(clamped.length_ft(), 20.0);
        assert_eq!(clamped.width_ft(), 40.0);
        assert_eq!(clamped.color(), ColorGrade::Premium);
        assert!(clamped.spray_foam());
    }

    #[test]
    fn test_roof_pitch_parsing() {
        assert_eq!(RoofPitch::from_str_flexible("3/12"), Some(RoofPitch::ThreeTwelve));
        assert_eq!(RoofPitch::from_str_flexible("1:12"), Some(RoofPitch::OneTwelve));
        assert_eq!(RoofPitch::from_str_flexible("4"), Some(RoofPitch::FourTwelve));
        assert_eq!(RoofPitch::from_str_flexible("6/12"), None);
        assert!((RoofPitch::TwoTwelve.ratio() - 2.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_pitch_serialization() {
        let json = serde_json::to_string(&RoofPitch::OneTwelve).unwrap();
        assert_eq!(json, "\"1/12\"");
        let roundtrip: RoofPitch = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, RoofPitch::OneTwelve);
    }

    #[test]
    fn test_color_and_dimension_parsing() {
        assert_eq!(ColorGrade::from_str_flexible("Premium"), Some(ColorGrade::Premium));
        assert_eq!(ColorGrade::from_str_flexible("chrome"), None);
        assert_eq!(Dimension::from_str_flexible("sidewall-height"), Some(Dimension::SidewallHeight));
        assert_eq!(Dimension::from_str_flexible("Width"), Some(Dimension::Width));
    }

    #[test]
    fn test_customer_info_empty() {
        let mut customer = CustomerInfo::default();
        assert!(customer.is_empty());
        customer.phone = "555-0100".to_string();
        assert!(!customer.is_empty());
    }
}
