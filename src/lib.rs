//! Library exports for the CoffeeNote personal center mockup renderer.
//!
//! Exposes the drawing primitives, the mockup composition and the
//! configuration types so tests and tools (e.g. the schema dumper) can reuse
//! them without going through the binary.

pub mod config;
pub mod draw;
pub mod mockup;
pub mod util;

pub use config::Config;
