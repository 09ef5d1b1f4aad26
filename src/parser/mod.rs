//! Parser modules for appassets input files.
//!
//! The colour pipeline reads a single YAML palette. Parsing fully
//! materializes and validates the palette so emitters never see a
//! malformed entry.
//!
//! # Usage
//!
//! ```ignore
//! use appassets::parser::load_palette;
//!
//! let palette = load_palette(Path::new("colors.yaml"))?;
//!
//! for (name, definition) in palette.iter() {
//!     println!("Found: {} ({:?})", name, definition.resolve_default());
//! }
//! ```

pub mod palette;

pub use palette::{load_palette, parse_palette};
