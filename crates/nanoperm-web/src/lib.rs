//! nanoperm-web — Interactive calculator UI for the nanoperm model.
//! Provides:
//!   - a slider page for all eight inputs and the factor weights
//!   - JSON API endpoints for evaluation and the size-window curve

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
