//! # Quote Session
//!
//! The single owner of everything a customer has entered: building spec,
//! contact details and doors, plus the rate tables they are priced with.
//! Front ends hold one `QuoteSession` and drive it through the typed
//! setters below; nothing is global.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::building::Dimension;
//! use quote_core::doors::{DoorKind, WallSide};
//! use quote_core::session::QuoteSession;
//!
//! let mut session = QuoteSession::default();
//! session.set_dimension(Dimension::SidewallHeight, "14");
//! session.add_door(WallSide::Front, DoorKind::Garage, "12x12").unwrap();
//!
//! let quote = session.quote();
//! assert_eq!(quote.formatted_total(), "45,680.00");
//! ```

use crate::building::{BuildingSpec, ColorGrade, CustomerInfo, Dimension, RoofPitch};
use crate::config::QuoteConfig;
use crate::doors::{Door, DoorId, DoorKind, DoorRegistry, MoveDirection, WallSide};
use crate::errors::QuoteCoreResult;
use crate::quote::{calculate, QuoteResult};
use crate::summary::QuoteSummary;

/// In-memory quoting session.
#[derive(Debug, Clone, Default)]
pub struct QuoteSession {
    config: QuoteConfig,
    building: BuildingSpec,
    customer: CustomerInfo,
    doors: DoorRegistry,
    /// Message from the last rejected door, shown until the next add or quote request
    error: Option<String>,
}

impl QuoteSession {
    /// Start a session with the given rate tables and default building.
    pub fn new(config: QuoteConfig) -> Self {
        QuoteSession {
            config,
            ..Default::default()
        }
    }

    /// Set a dimension from raw input. Returns the normalized value.
    pub fn set_dimension(&mut self, field: Dimension, raw: &str) -> f64 {
        self.building.set_dimension(field, raw)
    }

    pub fn set_color(&mut self, color: ColorGrade) {
        self.building.set_color(color);
    }

    pub fn set_roof_pitch(&mut self, pitch: RoofPitch) {
        self.building.set_roof_pitch(pitch);
    }

    pub fn set_spray_foam(&mut self, enabled: bool) {
        self.building.set_spray_foam(enabled);
    }

    pub fn set_customer(&mut self, customer: CustomerInfo) {
        self.customer = customer;
    }

    pub fn customer_mut(&mut self) -> &mut CustomerInfo {
        &mut self.customer
    }

    /// Add a door at the center of a wall.
    ///
    /// Garage doors must leave header clearance under the current sidewall
    /// height. On rejection the error message is also kept for display.
    pub fn add_door(&mut self, side: WallSide, kind: DoorKind, size: &str) -> QuoteCoreResult<DoorId> {
        self.error = None;
        let result = self.doors.add_door(
            side,
            kind,
            size,
            self.building.sidewall_height_ft(),
            &self.config.placement,
        );
        if let Err(e) = &result {
            self.error = Some(e.to_string());
        }
        result
    }

    /// Nudge a door one step along its wall. `None` if the door is not on `side`.
    pub fn move_door(&mut self, side: WallSide, id: DoorId, direction: MoveDirection) -> Option<f64> {
        let span = self.building.wall_span_ft(side);
        self.doors.move_door(side, id, direction, span, &self.config.placement)
    }

    /// Nudge a door several steps at once. `None` if the door is not on `side`.
    pub fn move_door_by(&mut self, side: WallSide, id: DoorId, direction: MoveDirection, steps: u32) -> Option<f64> {
        let span = self.building.wall_span_ft(side);
        self.doors.move_door_by(side, id, direction, steps, span, &self.config.placement)
    }

    /// Remove a door and hand it back. Unknown ids leave the session unchanged.
    pub fn remove_door(&mut self, side: WallSide, id: DoorId) -> Option<Door> {
        self.doors.remove_door(side, id)
    }

    /// Price the current session.
    pub fn quote(&self) -> QuoteResult {
        calculate(&self.building, &self.doors, &self.config.pricing)
    }

    /// Price the session as a user request: clears any pending error first.
    pub fn request_quote(&mut self) -> QuoteResult {
        self.error = None;
        self.quote()
    }

    /// Snapshot for PDF/e-mail collaborators, priced now.
    pub fn summary(&self) -> QuoteSummary {
        QuoteSummary::new(&self.customer, &self.building, &self.doors, self.quote())
    }

    /// Last door rejection message, if still pending
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn building(&self) -> &BuildingSpec {
        &self.building
    }

    pub fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    pub fn doors(&self) -> &DoorRegistry {
        &self.doors
    }

    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PriceSchedule;

    fn session_30x40() -> QuoteSession {
        let mut session = QuoteSession::default();
        session.set_dimension(Dimension::Length, "30");
        session.set_dimension(Dimension::Width, "40");
        session.set_dimension(Dimension::SidewallHeight, "10");
        session
    }

    #[test]
    fn test_base_quote() {
        let session = session_30x40();
        let quote = session.quote();
        assert_eq!(quote.formatted_total(), "42,000.00");
        assert_eq!(quote.note, "Includes concrete and metal building.");
    }

    #[test]
    fn test_tall_sidewall_quote() {
        let mut session = session_30x40();
        session.set_dimension(Dimension::SidewallHeight, "14");
        assert_eq!(session.quote().formatted_total(), "43,680.00");
    }

    #[test]
    fn test_garage_door_depends_on_sidewall() {
        let mut session = session_30x40();
        let err = session.add_door(WallSide::Front, DoorKind::Garage, "10x10").unwrap_err();
        assert_eq!(err.error_code(), "INFEASIBLE_DOOR_PLACEMENT");
        assert_eq!(
            session.error(),
            Some("Cannot add 10x10 garage door: sidewall must be at least 2' taller than door height.")
        );
        assert!(session.doors().is_empty());

        session.set_dimension(Dimension::SidewallHeight, "12");
        assert!(session.add_door(WallSide::Front, DoorKind::Garage, "10x10").is_ok());
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_request_quote_clears_error() {
        let mut session = session_30x40();
        assert!(session.add_door(WallSide::Back, DoorKind::Garage, "14x14").is_err());
        assert!(session.error().is_some());
        session.request_quote();
        assert!(session.error().is_none());
    }

    #[test]
    fn test_doors_and_premium() {
        let mut session = session_30x40();
        session.set_dimension(Dimension::SidewallHeight, "12");
        session.add_door(WallSide::Front, DoorKind::Walk, "3x7").unwrap();
        session.add_door(WallSide::Right, DoorKind::Garage, "10x10").unwrap();
        assert_eq!(session.quote().total, 44800.0);

        session.set_color(ColorGrade::Premium);
        assert_eq!(session.quote().formatted_total(), "51,520.00");
    }

    #[test]
    fn test_move_uses_wall_for_side() {
        let mut session = session_30x40();
        let front = session.add_door(WallSide::Front, DoorKind::Walk, "3x7").unwrap();
        let left = session.add_door(WallSide::Left, DoorKind::Walk, "3x7").unwrap();

        // Front wall spans the 40 ft width: limit 20 - 1.5 - 0.5 = 18
        for _ in 0..100 {
            session.move_door(WallSide::Front, front, MoveDirection::Right);
        }
        // Left wall spans the 30 ft length: limit 15 - 1.5 - 0.5 = 13
        for _ in 0..100 {
            session.move_door(WallSide::Left, left, MoveDirection::Right);
        }
        assert_eq!(session.doors().get(WallSide::Front, front).unwrap().offset_ft, 18.0);
        assert_eq!(session.doors().get(WallSide::Left, left).unwrap().offset_ft, 13.0);
    }

    #[test]
    fn test_remove_then_add_gets_fresh_id() {
        let mut session = session_30x40();
        let first = session.add_door(WallSide::Front, DoorKind::Walk, "3x7").unwrap();
        assert_eq!(session.remove_door(WallSide::Front, first).map(|d| d.id), Some(first));
        assert!(session.remove_door(WallSide::Front, first).is_none());
        let second = session.add_door(WallSide::Front, DoorKind::Walk, "3x7").unwrap();
        assert!(second > first);
        assert_eq!(session.doors().len(), 1);
    }

    #[test]
    fn test_custom_config() {
        let mut config = QuoteConfig::default();
        config.pricing = PriceSchedule {
            walk_door: 1000.0,
            ..PriceSchedule::default()
        };
        config.placement.garage_header_clearance_ft = 3.0;

        let mut session = QuoteSession::new(config);
        session.set_dimension(Dimension::SidewallHeight, "12");
        assert!(session.add_door(WallSide::Front, DoorKind::Garage, "10x10").is_err());
        session.add_door(WallSide::Front, DoorKind::Walk, "3x7").unwrap();
        assert_eq!(session.quote().breakdown.walk_doors, 1000.0);
    }

    #[test]
    fn test_rejection_reports_configured_clearance() {
        let mut config = QuoteConfig::default();
        config.placement.garage_header_clearance_ft = 4.0;

        let mut session = QuoteSession::new(config);
        session.set_dimension(Dimension::SidewallHeight, "13");
        assert!(session.add_door(WallSide::Front, DoorKind::Garage, "10x10").is_err());
        assert_eq!(
            session.error(),
            Some("Cannot add 10x10 garage door: sidewall must be at least 4' taller than door height.")
        );
    }

    #[test]
    fn test_move_door_by_uses_wall_for_side() {
        let mut session = session_30x40();
        let left = session.add_door(WallSide::Left, DoorKind::Walk, "3x7").unwrap();
        assert_eq!(session.move_door_by(WallSide::Left, left, MoveDirection::Right, 4), Some(2.0));
        assert_eq!(session.move_door_by(WallSide::Left, left, MoveDirection::Right, 1_000_000), Some(13.0));
        assert_eq!(session.move_door_by(WallSide::Front, left, MoveDirection::Right, 3), None);
    }
}
