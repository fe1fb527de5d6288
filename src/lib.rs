#![warn(missing_docs)]
//! Doodleboard - playful SVG workshop doodles via the OpenAI chat API.
//!
//! An eight-tile "Crazy 8s" board: describe a trend per tile, generate a
//! chunky flat-color SVG doodle for each one, and drag or download the
//! results into a whiteboard. The crate bundles the generation core, the web
//! server with its embedded browser client, and a native board controller
//! for scripted use.
//!
//! # Quick Start - one doodle
//!
//! ```no_run
//! use doodleboard::{DoodleProvider, DoodleRequest, OpenAiDoodleProvider};
//!
//! #[tokio::main]
//! async fn main() -> doodleboard::Result<()> {
//!     let provider = OpenAiDoodleProvider::builder().build()?;
//!     let request = DoodleRequest::new("AI co-pilots in every workflow");
//!     let doodle = provider.generate(&request).await?;
//!     doodle.save("copilots.svg")?;
//!     Ok(())
//! }
//! ```
//!
//! # Quick Start - the board server
//!
//! ```no_run
//! use doodleboard::server::{self, AppState};
//!
//! #[tokio::main]
//! async fn main() -> doodleboard::Result<()> {
//!     server::serve(AppState::from_env(), 3000).await
//! }
//! ```

pub mod api;
pub mod board;
pub mod doodle;
mod error;
pub mod server;
pub mod web;

// Re-export error types at crate root
pub use error::{DoodleError, Result};

// Re-export commonly used doodle types
pub use doodle::providers::{OpenAiDoodleProvider, OpenAiDoodleProviderBuilder};
pub use doodle::{Doodle, DoodleMetadata, DoodleProvider, DoodleRequest};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::board::{Board, BoardStatus, DoodleClient, Tile, TileStatus};
    pub use crate::doodle::providers::OpenAiDoodleProvider;
    pub use crate::doodle::{Doodle, DoodleProvider, DoodleRequest};
    pub use crate::error::{DoodleError, Result};
}
