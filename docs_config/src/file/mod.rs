//! Reading configuration layers from files.
//!
//! A layer file may name a parent with `extends = "<path>"`. The parent is
//! loaded first, so a branch file that extends the shared base yields two
//! layers, base then branch, and [`crate::resolve`] applies them in that
//! order.

mod error;
mod extends;
mod loader;
mod parser;
mod path;

pub use loader::load_layer_file;
pub use path::canonicalise;

#[cfg(test)]
mod tests;
