//! Transcribe audio use case

use std::sync::Arc;

use thiserror::Error;

use crate::domain::audio::SpooledAudio;

use super::ports::{AudioFetcher, FetchError, Transcriber, TranscriptionError};

/// Errors from the transcribe worker
#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("Audio fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to spool audio to disk: {0}")]
    Spool(#[from] std::io::Error),

    #[error("Transcription failed: {0}")]
    Transcription(#[from] TranscriptionError),
}

/// Transcription worker: fetch the audio resource, spool it to a scoped
/// temporary file, and submit it to the speech-to-text provider.
///
/// Failures are logged here and re-raised; the HTTP adapter converts them
/// into the client-visible error shape.
pub struct TranscribeAudioUseCase {
    fetcher: Arc<dyn AudioFetcher>,
    transcriber: Arc<dyn Transcriber>,
}

impl TranscribeAudioUseCase {
    pub fn new(fetcher: Arc<dyn AudioFetcher>, transcriber: Arc<dyn Transcriber>) -> Self {
        Self {
            fetcher,
            transcriber,
        }
    }

    /// Execute the transcription workflow for one audio URL.
    pub async fn execute(&self, audio_url: &str) -> Result<String, TranscribeError> {
        let result = self.run(audio_url).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, audio_url, "transcription worker failed");
        }
        result
    }

    async fn run(&self, audio_url: &str) -> Result<String, TranscribeError> {
        let fetched = self.fetcher.fetch(audio_url).await?;
        tracing::debug!(
            bytes = fetched.size_bytes(),
            mime = %fetched.mime_type,
            "fetched audio"
        );

        // Temp file is deleted when `spooled` drops, on every path out.
        let spooled = SpooledAudio::spool(&fetched)?;
        let text = self.transcriber.transcribe(&spooled).await?;

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::audio::{AudioMimeType, FetchedAudio};
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::Mutex;

    struct StubFetcher;

    #[async_trait]
    impl AudioFetcher for StubFetcher {
        async fn fetch(&self, _url: &str) -> Result<FetchedAudio, FetchError> {
            Ok(FetchedAudio::new(vec![0u8; 64], AudioMimeType::Webm))
        }
    }

    struct FailingFetcher;

    #[async_trait]
    impl AudioFetcher for FailingFetcher {
        async fn fetch(&self, _url: &str) -> Result<FetchedAudio, FetchError> {
            Err(FetchError::Status(404))
        }
    }

    /// Records the temp file path it was handed, so tests can check the
    /// file is gone after the use case returns.
    struct RecordingTranscriber {
        seen_path: Mutex<Option<PathBuf>>,
        result: Result<String, TranscriptionError>,
    }

    impl RecordingTranscriber {
        fn ok(text: &str) -> Self {
            Self {
                seen_path: Mutex::new(None),
                result: Ok(text.to_string()),
            }
        }

        fn failing(err: TranscriptionError) -> Self {
            Self {
                seen_path: Mutex::new(None),
                result: Err(err),
            }
        }

        fn seen_path(&self) -> Option<PathBuf> {
            self.seen_path.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transcriber for RecordingTranscriber {
        async fn transcribe(&self, audio: &SpooledAudio) -> Result<String, TranscriptionError> {
            assert!(audio.path().exists(), "spooled file must exist during call");
            *self.seen_path.lock().unwrap() = Some(audio.path().to_path_buf());
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn execute_returns_provider_text() {
        let transcriber = Arc::new(RecordingTranscriber::ok("hello world"));
        let use_case = TranscribeAudioUseCase::new(Arc::new(StubFetcher), transcriber);

        let text = use_case
            .execute("https://example.com/a.webm")
            .await
            .unwrap();
        assert_eq!(text, "hello world");
    }

    #[tokio::test]
    async fn temp_file_removed_after_success() {
        let transcriber = Arc::new(RecordingTranscriber::ok("ok"));
        let use_case = TranscribeAudioUseCase::new(Arc::new(StubFetcher), transcriber.clone());

        use_case
            .execute("https://example.com/a.webm")
            .await
            .unwrap();

        let path = transcriber.seen_path().expect("transcriber was called");
        assert!(!path.exists(), "temp file must be deleted after success");
    }

    #[tokio::test]
    async fn temp_file_removed_after_provider_failure() {
        let transcriber = Arc::new(RecordingTranscriber::failing(
            TranscriptionError::ApiError("boom".into()),
        ));
        let use_case = TranscribeAudioUseCase::new(Arc::new(StubFetcher), transcriber.clone());

        let err = use_case
            .execute("https://example.com/a.webm")
            .await
            .unwrap_err();
        assert!(matches!(err, TranscribeError::Transcription(_)));

        let path = transcriber.seen_path().expect("transcriber was called");
        assert!(!path.exists(), "temp file must be deleted after failure");
    }

    #[tokio::test]
    async fn fetch_failure_propagates() {
        let transcriber = Arc::new(RecordingTranscriber::ok("unused"));
        let use_case = TranscribeAudioUseCase::new(Arc::new(FailingFetcher), transcriber.clone());

        let err = use_case
            .execute("https://example.com/missing.webm")
            .await
            .unwrap_err();
        assert!(matches!(err, TranscribeError::Fetch(FetchError::Status(404))));
        assert!(transcriber.seen_path().is_none(), "provider never called");
    }
}
