//! The tile board: the browser controller's semantics as library types.
//!
//! A [`Board`] owns a fixed collection of [`Tile`]s; the batch driver borrows
//! the board exclusively and generates tile by tile, so at most one request
//! is ever in flight. Tiles reach the generator through a [`DoodleClient`],
//! either over HTTP against a running server or in-process against a
//! provider.

use crate::api::{ErrorResponse, GenerateRequest, GenerateResponse};
use crate::doodle::prompt;
use crate::doodle::{Doodle, DoodleProvider, DoodleRequest};
use crate::error::{DoodleError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Number of tiles on a default board.
pub const NUM_TILES: usize = 8;

/// User-facing status of a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileStatus {
    /// Nothing has happened yet.
    #[default]
    Idle,
    /// Generation was requested with both title and prompt empty.
    MissingInput,
    /// A generation request is in flight.
    Generating,
    /// The last generation succeeded.
    Done,
    /// The last generation failed.
    Failed,
    /// The image URL was copied to the clipboard.
    Copied,
    /// The clipboard rejected the image URL.
    CopyFailed,
}

impl TileStatus {
    /// The status line shown for this state.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::MissingInput => "Add at least a title or a prompt first.",
            Self::Generating => "Generating image…",
            Self::Done => "Done! Drag/download this into Miro.",
            Self::Failed => "Error generating image. Try again.",
            Self::Copied => "Image URL copied!",
            Self::CopyFailed => "Could not copy URL.",
        }
    }

    /// True when the status renders in the error style.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed | Self::CopyFailed)
    }
}

/// Status of the whole board during batch generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardStatus {
    /// No batch has run yet.
    #[default]
    Idle,
    /// The batch driver is walking the tiles.
    GeneratingAll,
    /// The last batch visited every tile.
    Finished,
}

impl BoardStatus {
    /// The board-wide status line shown for this state.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::GeneratingAll => "Generating all tiles…",
            Self::Finished => "Finished generating all tiles.",
        }
    }
}

/// The path a tile uses to reach the generator.
#[async_trait]
pub trait DoodleClient: Send + Sync {
    /// Requests an image for the composed prompt, returning an image URL.
    async fn request_image(&self, prompt: &str) -> Result<String>;
}

/// Client that POSTs to a running doodle server, the way the browser does.
pub struct HttpDoodleClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpDoodleClient {
    /// Creates a client for the server at `base_url`, e.g.
    /// `http://localhost:3000`.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/api/generate", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl DoodleClient for HttpDoodleClient {
    async fn request_image(&self, prompt: &str) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&GenerateRequest {
                prompt: prompt.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| format!("Request failed with {}", status.as_u16()));
            return Err(DoodleError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response.json().await?;
        Ok(body.image_url)
    }
}

/// Client that calls a provider in-process, skipping HTTP.
pub struct LocalDoodleClient {
    provider: Arc<dyn DoodleProvider>,
}

impl LocalDoodleClient {
    /// Wraps the given provider.
    pub fn new(provider: Arc<dyn DoodleProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl DoodleClient for LocalDoodleClient {
    async fn request_image(&self, prompt: &str) -> Result<String> {
        let doodle = self.provider.generate(&DoodleRequest::new(prompt)).await?;
        Ok(doodle.to_data_url())
    }
}

/// Clipboard capability for [`Tile::copy_url`].
pub trait Clipboard {
    /// Places `text` on the clipboard.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// One tile on the board: inputs, last result, and user-facing status.
#[derive(Debug, Clone, Default)]
pub struct Tile {
    /// Zero-based position on the board.
    pub index: usize,
    /// Short trend title.
    pub title: String,
    /// Free-form prompt text.
    pub prompt: String,
    /// Image URL from the last successful generation.
    pub image_url: Option<String>,
    /// Current user-facing status.
    pub status: TileStatus,
}

impl Tile {
    /// Creates an empty tile at the given board position.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    /// The prompt actually sent to the generator: the prompt text when
    /// present, otherwise a default sentence built from the title. `None`
    /// when both fields are blank.
    pub fn composed_prompt(&self) -> Option<String> {
        let title = self.title.trim();
        let prompt = self.prompt.trim();

        if title.is_empty() && prompt.is_empty() {
            return None;
        }
        if prompt.is_empty() {
            Some(prompt::fallback_prompt(title))
        } else {
            Some(prompt.to_string())
        }
    }

    /// Runs one generation for this tile.
    ///
    /// Errors never escape: a failure lands in [`Tile::status`], and an image
    /// from an earlier run survives a failed regeneration. Blank inputs make
    /// no request at all.
    pub async fn generate(&mut self, client: &dyn DoodleClient) {
        let Some(prompt) = self.composed_prompt() else {
            self.status = TileStatus::MissingInput;
            return;
        };

        self.status = TileStatus::Generating;
        match client.request_image(&prompt).await {
            Ok(url) => {
                self.image_url = Some(url);
                self.status = TileStatus::Done;
            }
            Err(err) => {
                tracing::warn!(tile = self.index, error = %err, "tile generation failed");
                self.status = TileStatus::Failed;
            }
        }
    }

    /// File stem used for downloads: the title when set, `trend-N` otherwise.
    /// Path separators in titles are flattened.
    pub fn download_stem(&self) -> String {
        if self.title.is_empty() {
            return format!("trend-{}", self.index + 1);
        }
        self.title.replace(['/', '\\'], "-")
    }

    /// Writes the tile's doodle into `dir` as an `.svg` file.
    ///
    /// Returns `Ok(None)` when the tile has no image yet. The image URL must
    /// be a data URL; a plain link carries no offline bytes to write.
    pub fn download(&self, dir: impl AsRef<Path>) -> Result<Option<PathBuf>> {
        let Some(url) = self.image_url.as_deref() else {
            return Ok(None);
        };

        let doodle = Doodle::from_data_url(url)?;
        let path = dir.as_ref().join(format!("{}.svg", self.download_stem()));
        doodle.save(&path)?;
        Ok(Some(path))
    }

    /// Copies the tile's image URL to `clipboard`, updating the status.
    ///
    /// A tile without an image, or a caller without a clipboard, is a no-op,
    /// like the browser client when `navigator.clipboard` is unavailable.
    pub fn copy_url(&mut self, clipboard: Option<&mut dyn Clipboard>) {
        let (Some(url), Some(clipboard)) = (self.image_url.as_deref(), clipboard) else {
            return;
        };

        self.status = match clipboard.write_text(url) {
            Ok(()) => TileStatus::Copied,
            Err(_) => TileStatus::CopyFailed,
        };
    }
}

/// A fixed collection of tiles plus the board-wide batch status.
#[derive(Debug, Clone)]
pub struct Board {
    /// Tiles in display order. Created once, mutated in place, never removed.
    pub tiles: Vec<Tile>,
    /// Batch-generation status for the whole board.
    pub status: BoardStatus,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(NUM_TILES)
    }
}

impl Board {
    /// Creates a board with `count` empty tiles.
    pub fn new(count: usize) -> Self {
        Self {
            tiles: (0..count).map(Tile::new).collect(),
            status: BoardStatus::Idle,
        }
    }

    /// Creates a board with one titled tile per entry.
    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tiles = titles
            .into_iter()
            .enumerate()
            .map(|(index, title)| {
                let mut tile = Tile::new(index);
                tile.title = title.into();
                tile
            })
            .collect();

        Self {
            tiles,
            status: BoardStatus::Idle,
        }
    }

    /// Generates every tile strictly in order, one request in flight at a
    /// time. A tile that fails or has blank inputs does not stop the rest.
    ///
    /// The exclusive borrow is the concurrency guarantee: no other generation
    /// can touch the board while the batch runs.
    pub async fn generate_all(&mut self, client: &dyn DoodleClient) {
        self.status = BoardStatus::GeneratingAll;
        for tile in &mut self.tiles {
            tile.generate(client).await;
        }
        self.status = BoardStatus::Finished;
    }
}
