//! Doodle generation providers.

pub mod mock;
mod openai;

pub use mock::MockDoodleProvider;
pub use openai::{OpenAiDoodleProvider, OpenAiDoodleProviderBuilder};
