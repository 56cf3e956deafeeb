//! # Quote Summary
//!
//! The finished quote handed to collaborators outside the core (PDF export,
//! e-mail delivery). A summary is a frozen copy: later edits to the session
//! do not change it.
//!
//! ## Structure
//!
//! ```text
//! QuoteSummary
//! ├── generated_at: when the quote was priced (UTC)
//! ├── customer: CustomerInfo
//! ├── building: BuildingSpec
//! ├── doors: Vec<Door> (front, back, left, right)
//! └── quote: QuoteResult (total, note, breakdown)
//! ```

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::building::{BuildingSpec, CustomerInfo};
use crate::doors::{Door, DoorRegistry};
use crate::errors::{QuoteCoreResult, QuoteError};
use crate::quote::{format_currency, QuoteResult};

/// Snapshot of a priced session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSummary {
    pub generated_at: DateTime<Utc>,
    pub customer: CustomerInfo,
    pub building: BuildingSpec,
    pub doors: Vec<Door>,
    pub quote: QuoteResult,
}

impl QuoteSummary {
    pub fn new(customer: &CustomerInfo, building: &BuildingSpec, doors: &DoorRegistry, quote: QuoteResult) -> Self {
        QuoteSummary {
            generated_at: Utc::now(),
            customer: customer.clone(),
            building: building.clone(),
            doors: doors.iter().cloned().collect(),
            quote,
        }
    }

    /// Pretty JSON for machine consumers
    pub fn to_json(&self) -> QuoteCoreResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| QuoteError::serialization(e.to_string()))
    }

    /// Plain-text rendering, the same content a printed quote carries.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let b = &self.building;

        // Writing to a String cannot fail
        let _ = writeln!(out, "Shop Quote - {}", self.generated_at.format("%Y-%m-%d"));
        if !self.customer.is_empty() {
            let _ = writeln!(out);
            for (label, value) in [
                ("Name", &self.customer.name),
                ("Phone", &self.customer.phone),
                ("Address", &self.customer.address),
                ("Email", &self.customer.email),
            ] {
                if !value.is_empty() {
                    let _ = writeln!(out, "  {:<9}{}", format!("{}:", label), value);
                }
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Building:");
        let _ = writeln!(
            out,
            "  {} ft x {} ft, {} ft sidewalls",
            b.length_ft(),
            b.width_ft(),
            b.sidewall_height_ft()
        );
        let _ = writeln!(out, "  Roof pitch {}, {} color", b.roof_pitch(), b.color());
        let _ = writeln!(out, "  Spray foam: {}", if b.spray_foam() { "yes" } else { "no" });

        if !self.doors.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Doors:");
            for door in &self.doors {
                let _ = writeln!(
                    out,
                    "  #{:<3} {:<6} {:<7} {:<6} offset {:+.1} ft",
                    door.id,
                    door.side.display_name(),
                    door.kind.noun(),
                    door.size,
                    door.offset_ft
                );
            }
        }

        let breakdown = &self.quote.breakdown;
        let _ = writeln!(out);
        let _ = writeln!(out, "Pricing:");
        let mut line = |label: &str, amount: f64| {
            let _ = writeln!(out, "  {:<22}${:>14}", label, format_currency(amount));
        };
        line("Concrete and building", breakdown.base);
        if breakdown.extra_height > 0.0 {
            line("Extra sidewall height", breakdown.extra_height);
        }
        if breakdown.walk_door_count > 0 {
            line(&format!("Walk doors ({})", breakdown.walk_door_count), breakdown.walk_doors);
        }
        if breakdown.garage_door_count > 0 {
            line(&format!("Garage doors ({})", breakdown.garage_door_count), breakdown.garage_doors);
        }
        if let Some(takeoff) = breakdown.spray_foam {
            line(&format!("Spray foam ({:.0} sq ft)", takeoff.total_sqft), breakdown.spray_foam_cost);
        }
        if breakdown.premium_color != 0.0 {
            line("Premium color", breakdown.premium_color);
        }
        line("TOTAL", self.quote.total);

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.quote.note);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::building::Dimension;
    use crate::doors::{DoorKind, WallSide};
    use crate::session::QuoteSession;

    fn sample_session() -> QuoteSession {
        let mut session = QuoteSession::default();
        session.set_dimension(Dimension::SidewallHeight, "14");
        session.customer_mut().name = "Pat Rivera".to_string();
        session.customer_mut().phone = "555-0142".to_string();
        session.add_door(WallSide::Left, DoorKind::Walk, "3x7").unwrap();
        session.add_door(WallSide::Front, DoorKind::Garage, "10x10").unwrap();
        session
    }

    #[test]
    fn test_summary_is_frozen() {
        let mut session = sample_session();
        let summary = session.summary();
        session.remove_door(WallSide::Left, 1);
        assert_eq!(summary.doors.len(), 2);
        assert_eq!(session.doors().len(), 1);
    }

    #[test]
    fn test_summary_door_order() {
        let summary = sample_session().summary();
        let sides: Vec<WallSide> = summary.doors.iter().map(|d| d.side).collect();
        assert_eq!(sides, vec![WallSide::Front, WallSide::Left]);
    }

    #[test]
    fn test_text_rendering() {
        let text = sample_session().summary().to_text();
        assert!(text.contains("Pat Rivera"));
        assert!(text.contains("555-0142"));
        assert!(!text.contains("Email:"));
        assert!(text.contains("30 ft x 40 ft, 14 ft sidewalls"));
        assert!(text.contains("Extra sidewall height"));
        assert!(text.contains("46,480.00"));
        assert!(text.contains("Includes 1 walk door (3x7) and 1 garage door (10x10)."));
    }

    #[test]
    fn test_json_roundtrip() {
        let summary = sample_session().summary();
        let json = summary.to_json().unwrap();
        assert!(json.contains("\"generated_at\""));
        let roundtrip: QuoteSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.quote.total, summary.quote.total);
        assert_eq!(roundtrip.doors, summary.doors);
    }
}
