//! # Quote Engine
//!
//! Prices a building from its spec and door list. The engine is a pure
//! function and never fails: dimensions are re-clamped on the way in and
//! every surcharge degrades to zero when its inputs are unreadable.
//!
//! ## Pricing Order
//!
//! 1. Footprint: length × width × rate
//! 2. Extra height: perimeter × (sidewall − included height) × rate, tall walls only
//! 3. Doors: flat price per walk door and per garage door
//! 4. Spray foam: roof slopes + four walls + one gable end, per square foot
//! 5. Premium color: multiplier on everything above
//!
//! ## Example
//!
//! ```rust
//! use quote_core::building::BuildingSpec;
//! use quote_core::config::PriceSchedule;
//! use quote_core::doors::DoorRegistry;
//! use quote_core::quote::calculate;
//!
//! let spec = BuildingSpec::new("10", "30", "40");
//! let result = calculate(&spec, &DoorRegistry::new(), &PriceSchedule::default());
//!
//! assert_eq!(result.formatted_total(), "42,000.00");
//! assert_eq!(result.note, "Includes concrete and metal building.");
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::building::{BuildingSpec, ColorGrade};
use crate::config::PriceSchedule;
use crate::doors::{DoorKind, DoorRegistry};

/// Opening sentence of every quote note
pub const BASE_NOTE: &str = "Includes concrete and metal building.";

/// Note clause for the spray foam add-on
pub const SPRAY_FOAM_CLAUSE: &str = "spray foam (1\" closed cell on whole building)";

/// Spray foam surface takeoff, in square feet.
///
/// Wall area is not reduced for door openings and only one gable end is
/// counted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoamTakeoff {
    /// Ridge height above the eave (ft)
    pub roof_rise_ft: f64,
    /// Slant length of one roof slope, eave to ridge (ft)
    pub roof_half_span_ft: f64,
    /// Both roof slopes
    pub roof_sqft: f64,
    /// Four sidewalls at full height
    pub wall_sqft: f64,
    /// One triangular gable end
    pub gable_sqft: f64,
    pub total_sqft: f64,
}

impl FoamTakeoff {
    /// Measure the foam envelope of a (clamped) building.
    pub fn measure(spec: &BuildingSpec) -> Self {
        let width = spec.width_ft();
        let length = spec.length_ft();
        let height = spec.sidewall_height_ft();
        let half_width = width / 2.0;

        let roof_rise_ft = half_width * spec.roof_pitch().ratio();
        let roof_half_span_ft = saturate((half_width.powi(2) + roof_rise_ft.powi(2)).sqrt());
        let roof_sqft = saturate(roof_half_span_ft * 2.0 * length);
        let wall_sqft = saturate(2.0 * (width * height + length * height));
        let gable_sqft = saturate(width * roof_rise_ft);

        FoamTakeoff {
            roof_rise_ft,
            roof_half_span_ft,
            roof_sqft,
            wall_sqft,
            gable_sqft,
            total_sqft: saturate(roof_sqft + wall_sqft + gable_sqft),
        }
    }
}

/// Line items behind a quote total, in dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    pub footprint_sqft: f64,
    /// Concrete and metal building
    pub base: f64,
    /// Zero unless the sidewall is over the included height
    pub extra_height: f64,
    pub walk_door_count: usize,
    pub walk_doors: f64,
    pub garage_door_count: usize,
    pub garage_doors: f64,
    /// Present only when spray foam is selected
    pub spray_foam: Option<FoamTakeoff>,
    pub spray_foam_cost: f64,
    /// Sum of all additive items
    pub subtotal: f64,
    /// Added by the premium color multiplier (zero for normal color)
    pub premium_color: f64,
}

/// A priced quote.
///
/// ## JSON Example
///
/// ```json
/// {
///   "total": 42000.0,
///   "note": "Includes concrete and metal building.",
///   "breakdown": { "footprint_sqft": 1200.0, "base": 42000.0, "...": "..." }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// Total in dollars, rounded to cents
    pub total: f64,
    /// Customer-facing description of what the price includes
    pub note: String,
    pub breakdown: QuoteBreakdown,
}

impl QuoteResult {
    /// Total with thousands separators and two decimals, e.g. "43,680.00"
    pub fn formatted_total(&self) -> String {
        format_currency(self.total)
    }
}

impl std::fmt::Display for QuoteResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.formatted_total())
    }
}

/// Price a building.
pub fn calculate(spec: &BuildingSpec, doors: &DoorRegistry, pricing: &PriceSchedule) -> QuoteResult {
    let spec = spec.clamped();
    let length = spec.length_ft();
    let width = spec.width_ft();
    let sidewall = spec.sidewall_height_ft();

    // Every figure is saturated so huge (but finite) inputs still serialize.
    let footprint_sqft = saturate(length * width);
    let base = saturate(footprint_sqft * pricing.footprint_per_sqft);

    let extra_height = if sidewall > pricing.included_sidewall_ft {
        saturate(spec.perimeter_ft() * (sidewall - pricing.included_sidewall_ft) * pricing.extra_height_per_sqft)
    } else {
        0.0
    };

    let walk_door_count = doors.count(DoorKind::Walk);
    let garage_door_count = doors.count(DoorKind::Garage);
    let walk_doors = walk_door_count as f64 * pricing.walk_door;
    let garage_doors = garage_door_count as f64 * pricing.garage_door;

    let spray_foam = spec.spray_foam().then(|| FoamTakeoff::measure(&spec));
    let spray_foam_cost = spray_foam
        .map(|takeoff| saturate(takeoff.total_sqft * pricing.spray_foam_per_sqft))
        .unwrap_or(0.0);

    let subtotal = saturate(base + extra_height + walk_doors + garage_doors + spray_foam_cost);
    let total = match spec.color() {
        ColorGrade::Premium => saturate(subtotal * pricing.premium_color_multiplier),
        ColorGrade::Normal => subtotal,
    };

    let note = build_note(doors, spec.spray_foam());
    let total = round_to_cents(total);
    info!(total, doors = doors.len(), spray_foam = spec.spray_foam(), "quote calculated");

    QuoteResult {
        total,
        note,
        breakdown: QuoteBreakdown {
            footprint_sqft,
            base,
            extra_height,
            walk_door_count,
            walk_doors,
            garage_door_count,
            garage_doors,
            spray_foam,
            spray_foam_cost,
            subtotal,
            premium_color: total - round_to_cents(subtotal),
        },
    }
}

/// Describe what the quote includes.
///
/// `"Includes concrete and metal building."`, then one sentence listing the
/// add-ons joined with "and": door counts with their distinct sizes, and
/// spray foam.
pub fn build_note(doors: &DoorRegistry, spray_foam: bool) -> String {
    let mut addons = Vec::new();

    for kind in [DoorKind::Walk, DoorKind::Garage] {
        let count = doors.count(kind);
        if count > 0 {
            addons.push(format!(
                "{} {} door{} ({})",
                count,
                kind.noun(),
                if count > 1 { "s" } else { "" },
                doors.distinct_sizes(kind).join(", ")
            ));
        }
    }

    if spray_foam {
        addons.push(SPRAY_FOAM_CLAUSE.to_string());
    }

    if addons.is_empty() {
        BASE_NOTE.to_string()
    } else {
        format!("{} Includes {}.", BASE_NOTE, addons.join(" and "))
    }
}

/// Format dollars as "1,234,567.89"
pub fn format_currency(amount: f64) -> String {
    let fixed = fixed_cents(amount);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, cents) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}.{}", sign, grouped, cents)
}

/// Two-decimal form of `amount`, rounded half away from zero on its
/// shortest decimal representation rather than its binary value, so a
/// total that reads as 10422.335 shows as 10422.34.
fn fixed_cents(amount: f64) -> String {
    let amount = saturate(amount);
    let shortest = format!("{}", amount.abs());
    let (whole, frac) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(frac.bytes().chain(std::iter::repeat(b'0')).take(2))
        .collect();
    if frac.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let (whole, cents) = digits.split_at(digits.len() - 2);
    let sign = if amount < 0.0 && digits.iter().any(|d| *d != b'0') { "-" } else { "" };
    format!(
        "{}{}.{}",
        sign,
        String::from_utf8_lossy(whole),
        String::from_utf8_lossy(cents)
    )
}

fn round_to_cents(amount: f64) -> f64 {
    fixed_cents(amount).parse().unwrap_or(amount)
}

/// Keep absurdly large buildings representable: overflow pins to the
/// largest finite value and NaN reads as zero.
fn saturate(amount: f64) -> f64 {
    if amount.is_nan() {
        0.0
    } else {
        amount.clamp(f64::MIN, f64::MAX)
    }
}
