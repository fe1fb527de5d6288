//! Doodle generation module.

pub mod prompt;
mod provider;
pub mod providers;
mod svg;
mod types;

pub use provider::DoodleProvider;
pub use svg::extract_svg;
pub use types::{Doodle, DoodleMetadata, DoodleRequest, DATA_URL_PREFIX, SVG_MIME_TYPE};
