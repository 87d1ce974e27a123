use std::sync::atomic::{AtomicUsize, Ordering};

use triptych::application::ports::{AnalysisError, ChatBackend, PageFetcher, SpeechBackend};

/// Speech backend double that records how often it was reached.
pub struct CountingSpeech {
    transcript: String,
    fail_with_quota: bool,
    calls: AtomicUsize,
}

impl CountingSpeech {
    pub fn returning(transcript: &str) -> Self {
        Self {
            transcript: transcript.to_string(),
            fail_with_quota: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn quota_exhausted() -> Self {
        Self {
            transcript: String::new(),
            fail_with_quota: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl SpeechBackend for CountingSpeech {
    async fn transcribe(&self, _audio: &[u8], _mime_type: &str) -> Result<String, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_with_quota {
            return Err(AnalysisError::QuotaExceeded(
                "status 429: insufficient_quota".to_string(),
            ));
        }
        Ok(self.transcript.clone())
    }
}

/// Chat backend double with per-operation call counters.
pub struct CountingChat {
    describe_calls: AtomicUsize,
    transcript_calls: AtomicUsize,
    document_calls: AtomicUsize,
}

impl CountingChat {
    pub fn new() -> Self {
        Self {
            describe_calls: AtomicUsize::new(0),
            transcript_calls: AtomicUsize::new(0),
            document_calls: AtomicUsize::new(0),
        }
    }

    pub fn describe_calls(&self) -> usize {
        self.describe_calls.load(Ordering::SeqCst)
    }

    pub fn transcript_calls(&self) -> usize {
        self.transcript_calls.load(Ordering::SeqCst)
    }

    pub fn document_calls(&self) -> usize {
        self.document_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.describe_calls() + self.transcript_calls() + self.document_calls()
    }
}

#[async_trait::async_trait]
impl ChatBackend for CountingChat {
    async fn describe_image(&self, _image_base64: &str) -> Result<String, AnalysisError> {
        self.describe_calls.fetch_add(1, Ordering::SeqCst);
        Ok("a mock description".to_string())
    }

    async fn summarize_transcript(&self, _transcript: &str) -> Result<String, AnalysisError> {
        self.transcript_calls.fetch_add(1, Ordering::SeqCst);
        Ok("- mock summary".to_string())
    }

    async fn summarize_document(&self, _text: &str) -> Result<String, AnalysisError> {
        self.document_calls.fetch_add(1, Ordering::SeqCst);
        Ok("- mock summary".to_string())
    }
}

/// Page fetcher double: serves a fixed body or fails every request.
pub struct CountingFetcher {
    body: Option<String>,
    calls: AtomicUsize,
}

impl CountingFetcher {
    pub fn returning(body: &str) -> Self {
        Self {
            body: Some(body.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            body: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl PageFetcher for CountingFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.body {
            Some(body) => Ok(body.clone()),
            None => Err(AnalysisError::FetchFailed("status 503".to_string())),
        }
    }
}
