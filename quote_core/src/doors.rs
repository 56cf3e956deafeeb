//! # Door Registry
//!
//! Doors placed on the four walls of the building, in the order they were
//! added. The registry owns the door id counter: ids start at 1, only ever
//! increase, and are never handed out twice, even after a removal.
//!
//! Door positions are offsets of the door center from the middle of its
//! wall. New doors start centered; nudging a door keeps it inside the wall
//! with an edge margin at each corner. Doors on the same wall are allowed
//! to overlap.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::config::PlacementRules;
//! use quote_core::doors::{DoorKind, DoorRegistry, MoveDirection, WallSide};
//!
//! let rules = PlacementRules::default();
//! let mut doors = DoorRegistry::new();
//!
//! let id = doors.add_door(WallSide::Front, DoorKind::Garage, "10x10", 14.0, &rules).unwrap();
//! doors.move_door(WallSide::Front, id, MoveDirection::Right, 40.0, &rules);
//! assert_eq!(doors.get(WallSide::Front, id).unwrap().offset_ft, 0.5);
//!
//! // Too tall for a 10 ft sidewall
//! assert!(doors.add_door(WallSide::Back, DoorKind::Garage, "10x10", 10.0, &rules).is_err());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::PlacementRules;
use crate::errors::{QuoteCoreResult, QuoteError};
use crate::validation::{can_add_garage_door, parse_lenient_f64};

/// Door identifier, unique for the life of a registry
pub type DoorId = u64;

/// Wall of the building. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallSide {
    Front,
    Back,
    Left,
    Right,
}

impl WallSide {
    /// All walls, in display order
    pub const ALL: [WallSide; 4] = [WallSide::Front, WallSide::Back, WallSide::Left, WallSide::Right];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "front" | "f" => Some(WallSide::Front),
            "back" | "rear" | "b" => Some(WallSide::Back),
            "left" | "l" => Some(WallSide::Left),
            "right" | "r" => Some(WallSide::Right),
            _ => None,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            WallSide::Front => "Front",
            WallSide::Back => "Back",
            WallSide::Left => "Left",
            WallSide::Right => "Right",
        }
    }
}

impl std::fmt::Display for WallSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Door type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorKind {
    /// Man door
    Walk,
    /// Overhead door, needs header clearance
    Garage,
}

impl DoorKind {
    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "walk" | "man" | "entry" => Some(DoorKind::Walk),
            "garage" | "overhead" | "roll-up" | "rollup" => Some(DoorKind::Garage),
            _ => None,
        }
    }

    /// Lowercase noun used in quote notes
    pub fn noun(&self) -> &'static str {
        match self {
            DoorKind::Walk => "walk",
            DoorKind::Garage => "garage",
        }
    }
}

impl std::fmt::Display for DoorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.noun())
    }
}

/// Nudge direction, as seen facing the wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Left,
    Right,
}

impl MoveDirection {
    fn sign(&self) -> f64 {
        match self {
            MoveDirection::Left => -1.0,
            MoveDirection::Right => 1.0,
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" | "<" => Some(MoveDirection::Left),
            "right" | "r" | ">" => Some(MoveDirection::Right),
            _ => None,
        }
    }
}

/// Opening size read from a "WxH" label, in feet.
///
/// Unreadable parts read as 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoorSize {
    pub width_ft: f64,
    pub height_ft: f64,
}

impl DoorSize {
    pub fn parse(label: &str) -> Self {
        let mut parts = label.split('x');
        let width_ft = parts.next().and_then(parse_lenient_f64).unwrap_or(0.0);
        let height_ft = parts.next().and_then(parse_lenient_f64).unwrap_or(0.0);
        DoorSize { width_ft, height_ft }
    }
}

/// A placed door.
///
/// ## JSON Example
///
/// ```json
/// { "id": 3, "kind": "garage", "size": "10x10", "side": "front", "offset_ft": -4.5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Door {
    pub id: DoorId,
    pub kind: DoorKind,
    /// Size label as entered, e.g. "3x7"
    pub size: String,
    pub side: WallSide,
    /// Door center relative to the wall midpoint (ft); negative is left
    pub offset_ft: f64,
}

impl Door {
    /// Parsed opening size
    pub fn dimensions(&self) -> DoorSize {
        DoorSize::parse(&self.size)
    }
}

/// Doors on each wall plus the id counter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoorRegistry {
    sides: BTreeMap<WallSide, Vec<Door>>,
    /// Last id handed out (0 = none yet)
    last_id: DoorId,
}

impl DoorRegistry {
    pub fn new() -> Self {
        DoorRegistry::default()
    }

    /// Add a door, centered on its wall.
    ///
    /// Garage doors are checked for header clearance against
    /// `sidewall_height_ft`. A rejected door leaves the registry untouched,
    /// including the id counter.
    pub fn add_door(
        &mut self,
        side: WallSide,
        kind: DoorKind,
        size: &str,
        sidewall_height_ft: f64,
        rules: &PlacementRules,
    ) -> QuoteCoreResult<DoorId> {
        if kind == DoorKind::Garage {
            let door_height_ft = DoorSize::parse(size).height_ft;
            if !can_add_garage_door(sidewall_height_ft, door_height_ft, rules.garage_header_clearance_ft) {
                let clearance_ft = rules.garage_header_clearance_ft;
                info!(size, door_height_ft, sidewall_height_ft, clearance_ft, "garage door rejected: insufficient header clearance");
                return Err(QuoteError::infeasible_door(size, door_height_ft, sidewall_height_ft, clearance_ft));
            }
        }

        self.last_id += 1;
        let id = self.last_id;
        self.sides.entry(side).or_default().push(Door {
            id,
            kind,
            size: size.to_string(),
            side,
            offset_ft: 0.0,
        });
        info!(id, side = side.display_name(), kind = kind.noun(), size, "door added");
        Ok(id)
    }

    /// Nudge a door one step and keep it inside its wall.
    ///
    /// The center is clamped to
    /// `[-span/2 + width/2 + margin, span/2 - width/2 - margin]`. If the door
    /// is too wide for that band it sits at the lower bound. Returns the new
    /// offset, or `None` if no door with `id` is on `side`.
    pub fn move_door(
        &mut self,
        side: WallSide,
        id: DoorId,
        direction: MoveDirection,
        wall_span_ft: f64,
        rules: &PlacementRules,
    ) -> Option<f64> {
        self.move_door_by(side, id, direction, 1, wall_span_ft, rules)
    }

    /// Nudge a door `steps` times in one go.
    ///
    /// Lands where `steps` calls to [`move_door`](Self::move_door) would,
    /// without looping. Zero steps leaves the door where it is.
    pub fn move_door_by(
        &mut self,
        side: WallSide,
        id: DoorId,
        direction: MoveDirection,
        steps: u32,
        wall_span_ft: f64,
        rules: &PlacementRules,
    ) -> Option<f64> {
        let door = self.sides.get_mut(&side)?.iter_mut().find(|d| d.id == id)?;
        if steps == 0 {
            return Some(door.offset_ft);
        }

        let half_span = wall_span_ft / 2.0;
        let half_door = door.dimensions().width_ft / 2.0;
        let lower = -half_span + half_door + rules.edge_margin_ft;
        let upper = half_span - half_door - rules.edge_margin_ft;
        let step = direction.sign() * rules.move_step_ft;

        // The first step pulls a door back into the band if the wall shrank
        // under it; from there the travel is monotone and one clamp suffices.
        let first = lower.max(upper.min(door.offset_ft + step));
        let moved = first + step * f64::from(steps - 1);
        door.offset_ft = lower.max(upper.min(moved));
        debug!(id, side = side.display_name(), steps, offset_ft = door.offset_ft, "door moved");
        Some(door.offset_ft)
    }

    /// Remove a door. Unknown ids are ignored.
    pub fn remove_door(&mut self, side: WallSide, id: DoorId) -> Option<Door> {
        let doors = self.sides.get_mut(&side)?;
        let index = doors.iter().position(|d| d.id == id)?;
        let door = doors.remove(index);
        info!(id, side = side.display_name(), "door removed");
        Some(door)
    }

    /// Look up a door by side and id
    pub fn get(&self, side: WallSide, id: DoorId) -> Option<&Door> {
        self.on_side(side).iter().find(|d| d.id == id)
    }

    /// Doors on one wall, in insertion order
    pub fn on_side(&self, side: WallSide) -> &[Door] {
        self.sides.get(&side).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every door: front, back, left, right, insertion order within a wall
    pub fn iter(&self) -> impl Iterator<Item = &Door> {
        WallSide::ALL.into_iter().flat_map(move |side| self.on_side(side).iter())
    }

    /// Number of doors of one kind across all walls
    pub fn count(&self, kind: DoorKind) -> usize {
        self.iter().filter(|d| d.kind == kind).count()
    }

    /// Distinct size labels of one kind, in the order first seen
    pub fn distinct_sizes(&self, kind: DoorKind) -> Vec<&str> {
        let mut sizes: Vec<&str> = Vec::new();
        for door in self.iter().filter(|d| d.kind == kind) {
            if !sizes.contains(&door.size.as_str()) {
                sizes.push(&door.size);
            }
        }
        sizes
    }

    pub fn len(&self) -> usize {
        self.sides.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> PlacementRules {
        PlacementRules::default()
    }

    #[test]
    fn test_garage_clearance_on_add() {
        let mut doors = DoorRegistry::new();
        let err = doors
            .add_door(WallSide::Front, DoorKind::Garage, "10x10", 10.0, &rules())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot add 10x10 garage door: sidewall must be at least 2' taller than door height."
        );
        assert!(doors.is_empty());

        let id = doors
            .add_door(WallSide::Front, DoorKind::Garage, "10x10", 12.0, &rules())
            .unwrap();
        assert_eq!(id, 1);
        assert_eq!(doors.on_side(WallSide::Front).len(), 1);
    }

    #[test]
    fn test_configured_clearance_in_rejection() {
        let rules = PlacementRules {
            garage_header_clearance_ft: 4.0,
            ..PlacementRules::default()
        };
        let mut doors = DoorRegistry::new();
        let err = doors
            .add_door(WallSide::Front, DoorKind::Garage, "10x10", 13.0, &rules)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot add 10x10 garage door: sidewall must be at least 4' taller than door height."
        );
        assert!(doors.add_door(WallSide::Front, DoorKind::Garage, "10x10", 14.0, &rules).is_ok());
    }

    #[test]
    fn test_walk_doors_skip_height_check() {
        let mut doors = DoorRegistry::new();
        assert!(doors.add_door(WallSide::Left, DoorKind::Walk, "3x7", 8.0, &rules()).is_ok());
        assert!(doors.add_door(WallSide::Left, DoorKind::Walk, "4x9", 8.0, &rules()).is_ok());
    }

    #[test]
    fn test_rejected_add_does_not_consume_id() {
        let mut doors = DoorRegistry::new();
        assert!(doors.add_door(WallSide::Back, DoorKind::Garage, "12x14", 10.0, &rules()).is_err());
        let id = doors.add_door(WallSide::Back, DoorKind::Walk, "3x7", 10.0, &rules()).unwrap();
        assert_eq!(id, 1);
    }

    #[test]
    fn test_ids_increase_and_are_never_reused() {
        let mut doors = DoorRegistry::new();
        let mut seen = Vec::new();
        for side in WallSide::ALL {
            let id = doors.add_door(side, DoorKind::Walk, "3x7", 10.0, &rules()).unwrap();
            seen.push(id);
        }
        doors.remove_door(WallSide::Right, seen[3]).unwrap();
        doors.remove_door(WallSide::Front, seen[0]).unwrap();
        let next = doors.add_door(WallSide::Front, DoorKind::Walk, "3x7", 10.0, &rules()).unwrap();
        seen.push(next);

        assert!(seen.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(next, 5);
    }

    #[test]
    fn test_new_doors_are_centered() {
        let mut doors = DoorRegistry::new();
        let id = doors.add_door(WallSide::Right, DoorKind::Walk, "3x7", 10.0, &rules()).unwrap();
        let door = doors.get(WallSide::Right, id).unwrap();
        assert_eq!(door.offset_ft, 0.0);
        assert_eq!(door.side, WallSide::Right);
    }

    #[test]
    fn test_move_steps_half_foot() {
        let mut doors = DoorRegistry::new();
        let id = doors.add_door(WallSide::Front, DoorKind::Walk, "3x7", 10.0, &rules()).unwrap();
        assert_eq!(doors.move_door(WallSide::Front, id, MoveDirection::Left, 40.0, &rules()), Some(-0.5));
        assert_eq!(doors.move_door(WallSide::Front, id, MoveDirection::Left, 40.0, &rules()), Some(-1.0));
        assert_eq!(doors.move_door(WallSide::Front, id, MoveDirection::Right, 40.0, &rules()), Some(-0.5));
    }

    #[test]
    fn test_move_clamps_at_corner() {
        let mut doors = DoorRegistry::new();
        // 10 ft door on a 12 ft wall: band is [-0.5, 0.5]
        let id = doors.add_door(WallSide::Front, DoorKind::Garage, "10x8", 12.0, &rules()).unwrap();
        for _ in 0..5 {
            doors.move_door(WallSide::Front, id, MoveDirection::Right, 12.0, &rules());
        }
        assert_eq!(doors.get(WallSide::Front, id).unwrap().offset_ft, 0.5);
        for _ in 0..5 {
            doors.move_door(WallSide::Front, id, MoveDirection::Left, 12.0, &rules());
        }
        assert_eq!(doors.get(WallSide::Front, id).unwrap().offset_ft, -0.5);
    }

    #[test]
    fn test_move_never_leaves_wall() {
        let mut doors = DoorRegistry::new();
        let span = 30.0;
        let id = doors.add_door(WallSide::Left, DoorKind::Walk, "3x7", 10.0, &rules()).unwrap();
        let band = span / 2.0 - 1.5 - 0.5;

        // Deterministic pseudo-random walk
        let mut state: u32 = 12345;
        for _ in 0..500 {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12345);
            let direction = if (state >> 16) & 1 == 0 { MoveDirection::Left } else { MoveDirection::Right };
            let offset = doors.move_door(WallSide::Left, id, direction, span, &rules()).unwrap();
            assert!(offset >= -band && offset <= band, "offset {} outside ±{}", offset, band);
        }
    }

    #[test]
    fn test_multi_step_move_matches_single_steps() {
        let mut stepped = DoorRegistry::new();
        let id = stepped.add_door(WallSide::Front, DoorKind::Walk, "3x7", 10.0, &rules()).unwrap();
        let mut jumped = stepped.clone();

        // Park the door at 18 on a 40 ft wall, then work on a 12 ft wall (band ±4)
        let cases = [
            (MoveDirection::Right, 40, 40.0),
            (MoveDirection::Left, 3, 12.0),
            (MoveDirection::Left, 20, 12.0),
            (MoveDirection::Right, 5, 12.0),
            (MoveDirection::Right, 0, 12.0),
        ];
        for (direction, steps, span) in cases {
            let mut expected = stepped.get(WallSide::Front, id).unwrap().offset_ft;
            for _ in 0..steps {
                expected = stepped.move_door(WallSide::Front, id, direction, span, &rules()).unwrap();
            }
            let offset = jumped.move_door_by(WallSide::Front, id, direction, steps, span, &rules());
            assert_eq!(offset, Some(expected), "{:?} x{} on {} ft", direction, steps, span);
        }
        assert_eq!(jumped.get(WallSide::Front, id).unwrap().offset_ft, -1.5);
    }

    #[test]
    fn test_huge_step_count_is_clamped_at_once() {
        let mut doors = DoorRegistry::new();
        let id = doors.add_door(WallSide::Front, DoorKind::Walk, "3x7", 10.0, &rules()).unwrap();
        let offset = doors.move_door_by(WallSide::Front, id, MoveDirection::Left, u32::MAX, 40.0, &rules());
        assert_eq!(offset, Some(-18.0));

        let wide = doors.add_door(WallSide::Back, DoorKind::Walk, "14x7", 10.0, &rules()).unwrap();
        let offset = doors.move_door_by(WallSide::Back, wide, MoveDirection::Right, u32::MAX, 12.0, &rules());
        assert_eq!(offset, Some(1.5));
    }

    #[test]
    fn test_door_wider_than_wall_sits_at_lower_bound() {
        let mut doors = DoorRegistry::new();
        let id = doors.add_door(WallSide::Back, DoorKind::Walk, "14x7", 10.0, &rules()).unwrap();
        // span 12: lower = -6 + 7 + 0.5 = 1.5, upper = 6 - 7 - 0.5 = -1.5
        let offset = doors.move_door(WallSide::Back, id, MoveDirection::Left, 12.0, &rules());
        assert_eq!(offset, Some(1.5));
    }

    #[test]
    fn test_move_leaves_other_doors_alone() {
        let mut doors = DoorRegistry::new();
        let a = doors.add_door(WallSide::Front, DoorKind::Walk, "3x7", 10.0, &rules()).unwrap();
        let b = doors.add_door(WallSide::Front, DoorKind::Walk, "3x7", 10.0, &rules()).unwrap();
        doors.move_door(WallSide::Front, a, MoveDirection::Right, 40.0, &rules());
        assert_eq!(doors.get(WallSide::Front, a).unwrap().offset_ft, 0.5);
        assert_eq!(doors.get(WallSide::Front, b).unwrap().offset_ft, 0.0);
    }

    #[test]
    fn test_move_and_remove_unknown_are_noops() {
        let mut doors = DoorRegistry::new();
        let id = doors.add_door(WallSide::Front, DoorKind::Walk, "3x7", 10.0, &rules()).unwrap();
        let before = doors.clone();
        assert_eq!(doors.move_door(WallSide::Back, id, MoveDirection::Left, 40.0, &rules()), None);
        assert_eq!(doors.move_door(WallSide::Front, 99, MoveDirection::Left, 40.0, &rules()), None);
        assert!(doors.remove_door(WallSide::Left, id).is_none());
        assert!(doors.remove_door(WallSide::Front, 99).is_none());
        assert_eq!(doors, before);
    }

    #[test]
    fn test_iteration_order_and_distinct_sizes() {
        let mut doors = DoorRegistry::new();
        doors.add_door(WallSide::Right, DoorKind::Walk, "4x7", 10.0, &rules()).unwrap();
        doors.add_door(WallSide::Front, DoorKind::Walk, "3x7", 10.0, &rules()).unwrap();
        doors.add_door(WallSide::Back, DoorKind::Walk, "3x7", 10.0, &rules()).unwrap();
        doors.add_door(WallSide::Front, DoorKind::Garage, "8x8", 10.0, &rules()).unwrap();

        let order: Vec<WallSide> = doors.iter().map(|d| d.side).collect();
        assert_eq!(order, vec![WallSide::Front, WallSide::Front, WallSide::Back, WallSide::Right]);
        assert_eq!(doors.distinct_sizes(DoorKind::Walk), vec!["3x7", "4x7"]);
        assert_eq!(doors.count(DoorKind::Walk), 3);
        assert_eq!(doors.count(DoorKind::Garage), 1);
        assert_eq!(doors.len(), 4);
    }

    #[test]
    fn test_door_size_parsing() {
        assert_eq!(DoorSize::parse("10x12"), DoorSize { width_ft: 10.0, height_ft: 12.0 });
        assert_eq!(DoorSize::parse("3x6.8"), DoorSize { width_ft: 3.0, height_ft: 6.8 });
        assert_eq!(DoorSize::parse("wide"), DoorSize { width_ft: 0.0, height_ft: 0.0 });
    }

    #[test]
    fn test_registry_serialization() {
        let mut doors = DoorRegistry::new();
        doors.add_door(WallSide::Front, DoorKind::Garage, "10x10", 14.0, &rules()).unwrap();
        let json = serde_json::to_string(&doors).unwrap();
        assert!(json.contains("\"front\""));
        let roundtrip: DoorRegistry = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, doors);
    }
}
