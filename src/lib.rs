pub mod chunks;
pub mod cli;
pub mod color;
mod crc;
pub mod decoder;
pub mod icons;
pub mod resize;
pub mod solid;

pub use color::{Rgb, DEFAULT_COLOR};
pub use crc::{calculate_crc, chunk_crc};
pub use icons::{icon_file_name, manifest_fragment, ICON_SIZES};
pub use resize::{resize_logo, SOURCE_LOGO};
pub use solid::{create_png, IconSpec};

pub const SIGNATURE: [u8; 8] = *b"\x89PNG\x0d\x0a\x1a\x0a";
