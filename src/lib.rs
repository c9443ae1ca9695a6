//! largo-curator: pick a set of largos that covers the slimes you want.
//!
//! The catalog is loaded once, then the user toggles largos in a raw-mode
//! terminal list. Every toggle recomputes which slime types are covered and
//! hides largos that would add at most one new type. The final choice is
//! exported as a flat "culture" list.
//!
//! # Modules
//! - `catalog`: JSON catalog types and loading
//! - `curator`: coverage filter and cursor/selection state
//! - `render`: frame rendering to ANSI text
//! - `input`: raw key decoding and command dispatch
//! - `export`: culture list writer
//! - `session`: raw-mode event loop
//! - `config`, `logging`, `theme`: ambient setup

pub mod catalog;
pub mod config;
pub mod curator;
pub mod export;
pub mod input;
pub mod logging;
pub mod render;
pub mod session;
pub mod theme;

pub use catalog::{Catalog, CatalogError, Food, Largo, Slime};
pub use config::Config;
pub use curator::{CuratorState, Direction, InputResult};
pub use render::Renderer;
