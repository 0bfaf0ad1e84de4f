//! Sprite area files.
//!
//! A sprite area is a small header followed by sprites packed back to back, each starting with
//! its own size. There is no directory: the only way to find a sprite is to walk the ones
//! before it.
//!
//! ```text
//! in memory              in a file
//! size                   -
//! sprite_count           sprite_count
//! first                  first
//! used                   used
//! sprite 0 ...           sprite 0 ...
//! ```
//!
//! Offsets in a file are written as if the missing size word were still there, so `first` is 16
//! in both.
pub mod constants;
pub mod error;
pub mod file_type;
mod parser;
mod records;
mod save;
mod types;
mod utils;
mod writer;

#[cfg(test)]
mod test_utils;

pub use records::Records;
pub use save::{save_sprite_area, save_sprite_area_with};
pub use types::*;
pub use utils::read_bytes;
