//! Mock doodle provider for tests.

use crate::doodle::provider::DoodleProvider;
use crate::doodle::types::{Doodle, DoodleMetadata, DoodleRequest};
use crate::error::{DoodleError, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Scripted [`DoodleProvider`] that records every call.
///
/// Results are served in order; when the script runs out, the last entry
/// repeats. With no script at all it answers with a minimal fragment.
#[derive(Default)]
pub struct MockDoodleProvider {
    script: Mutex<Vec<Result<String>>>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl MockDoodleProvider {
    /// Creates a mock that always answers with the given SVG fragment.
    pub fn returning_svg(svg: impl Into<String>) -> Self {
        let mock = Self::default();
        mock.script.lock().unwrap().push(Ok(svg.into()));
        mock
    }

    /// Creates a mock that always answers with the given error.
    pub fn returning_error(err: DoodleError) -> Self {
        let mock = Self::default();
        mock.script.lock().unwrap().push(Err(err));
        mock
    }

    /// Queues one more scripted result, served after the ones before it.
    pub fn push(&self, result: Result<String>) {
        self.script.lock().unwrap().push(result);
    }

    /// Number of `generate` calls observed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl DoodleProvider for MockDoodleProvider {
    async fn generate(&self, request: &DoodleRequest) -> Result<Doodle> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(request.prompt.clone());

        let script = self.script.lock().unwrap();
        let result = match script.get(call.min(script.len().saturating_sub(1))) {
            Some(Ok(svg)) => Ok(svg.clone()),
            Some(Err(err)) => Err(clone_error(err)),
            None => Ok("<svg width=\"400\" height=\"300\"></svg>".to_string()),
        };

        result.map(|svg| {
            Doodle::new(
                svg,
                DoodleMetadata {
                    model: Some("mock".into()),
                    duration_ms: Some(0),
                },
            )
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

// DoodleError is not Clone (reqwest/io sources are not); the mock only ever
// scripts the cloneable variants.
fn clone_error(err: &DoodleError) -> DoodleError {
    match err {
        DoodleError::Auth(msg) => DoodleError::Auth(msg.clone()),
        DoodleError::Api { status, message } => DoodleError::Api {
            status: *status,
            message: message.clone(),
        },
        DoodleError::InvalidRequest(msg) => DoodleError::InvalidRequest(msg.clone()),
        DoodleError::MissingSvg => DoodleError::MissingSvg,
        DoodleError::Decode(msg) => DoodleError::Decode(msg.clone()),
        other => DoodleError::Decode(format!("unsupported scripted error: {other}")),
    }
}
