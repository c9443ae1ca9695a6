//! Selection, coverage and filtering of the largo catalog.
//!
//! - `filter`: pure coverage and visibility rules
//! - `state`: `CuratorState`, the cursor and toggle bookkeeping over the
//!   filtered view

pub mod filter;
pub mod state;

pub use state::{CuratorState, Direction, InputResult};
