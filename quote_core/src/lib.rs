//! # quote_core - Metal Shop Building Quote Engine
//!
//! `quote_core` prices metal shop buildings: concrete slab and metal shell,
//! taller sidewalls, walk and garage doors, spray foam insulation and a
//! premium color option. All types are JSON-serializable so a finished
//! quote can be handed to whatever renders, prints or mails it.
//!
//! ## Design Philosophy
//!
//! - **Lenient input**: dimensions are clamped to their minimums, never rejected
//! - **One hard rule**: garage doors need header clearance under the sidewall
//! - **Pure pricing**: the quote is recomputed from the session on every request
//! - **Owned state**: one [`QuoteSession`] per customer, no globals
//!
//! ## Quick Start
//!
//! ```rust
//! use quote_core::building::Dimension;
//! use quote_core::doors::{DoorKind, WallSide};
//! use quote_core::session::QuoteSession;
//!
//! let mut session = QuoteSession::default();
//! session.set_dimension(Dimension::Length, "30");
//! session.set_dimension(Dimension::Width, "40");
//! session.add_door(WallSide::Front, DoorKind::Walk, "3x7").unwrap();
//!
//! let quote = session.quote();
//! assert_eq!(quote.formatted_total(), "42,800.00");
//! ```
//!
//! ## Modules
//!
//! - [`building`] - Building dimensions, options and customer details
//! - [`doors`] - Door registry and placement rules
//! - [`validation`] - Input normalization and feasibility checks
//! - [`quote`] - Quote engine
//! - [`session`] - Session controller tying it together
//! - [`summary`] - Finished-quote snapshot for export
//! - [`config`] - Rate tables
//! - [`errors`] - Structured error types

pub mod building;
pub mod config;
pub mod doors;
pub mod errors;
pub mod quote;
pub mod session;
pub mod summary;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use building::{BuildingSpec, ColorGrade, CustomerInfo, Dimension, RoofPitch};
pub use config::{PlacementRules, PriceSchedule, QuoteConfig};
pub use doors::{Door, DoorId, DoorKind, DoorRegistry, MoveDirection, WallSide};
pub use errors::{QuoteCoreResult, QuoteError};
pub use quote::{calculate, QuoteResult};
pub use session::QuoteSession;
pub use summary::QuoteSummary;
