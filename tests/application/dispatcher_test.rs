use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use triptych::application::ports::{AnalysisError, ChatBackend, SpeechBackend};
use triptych::application::services::AnalysisDispatcher;
use triptych::domain::{AnalysisPayload, AnalysisRequest};

use crate::helpers::{CountingChat, CountingSpeech};

fn dispatcher(speech: &Arc<CountingSpeech>, chat: &Arc<CountingChat>) -> AnalysisDispatcher {
    AnalysisDispatcher::new(
        Arc::clone(speech) as Arc<dyn SpeechBackend>,
        Arc::clone(chat) as Arc<dyn ChatBackend>,
    )
}

#[tokio::test]
async fn given_audio_request_then_transcript_is_diarized_and_summarized() {
    let speech = Arc::new(CountingSpeech::returning("Good morning. Nice to meet you."));
    let chat = Arc::new(CountingChat::new());

    let audio = STANDARD.encode(b"raw audio");
    let result = dispatcher(&speech, &chat)
        .transcribe_conversation(&audio, "audio/webm")
        .await
        .unwrap();

    assert_eq!(result.transcript, "Good morning. Nice to meet you.");
    assert_eq!(
        result.diarized,
        "Speaker 1: Good morning.\nSpeaker 2: Nice to meet you."
    );
    assert_eq!(result.summary, "- mock summary");
    assert_eq!(speech.calls(), 1);
    assert_eq!(chat.transcript_calls(), 1);
}

#[tokio::test]
async fn given_empty_transcript_then_no_summary_call_is_made() {
    let speech = Arc::new(CountingSpeech::returning(""));
    let chat = Arc::new(CountingChat::new());

    let audio = STANDARD.encode(b"silence");
    let result = dispatcher(&speech, &chat)
        .transcribe_conversation(&audio, "audio/webm")
        .await
        .unwrap();

    assert!(result.transcript.is_empty());
    assert!(result.diarized.is_empty());
    assert!(result.summary.is_empty());
    assert_eq!(chat.total_calls(), 0);
}

#[tokio::test]
async fn given_malformed_base64_then_fails_before_any_backend_call() {
    let speech = Arc::new(CountingSpeech::returning("never reached"));
    let chat = Arc::new(CountingChat::new());

    let outcome = dispatcher(&speech, &chat)
        .transcribe_conversation("%%% definitely not base64 %%%", "audio/webm")
        .await;

    assert!(matches!(outcome, Err(AnalysisError::MalformedInput(_))));
    assert_eq!(speech.calls(), 0);
    assert_eq!(chat.total_calls(), 0);
}

#[tokio::test]
async fn given_quota_exhausted_speech_backend_then_outcome_is_quota_exceeded() {
    let speech = Arc::new(CountingSpeech::quota_exhausted());
    let chat = Arc::new(CountingChat::new());

    let audio = STANDARD.encode(b"audio");
    let outcome = dispatcher(&speech, &chat)
        .transcribe_conversation(&audio, "audio/mpeg")
        .await;

    assert!(matches!(outcome, Err(AnalysisError::QuotaExceeded(_))));
    assert_eq!(chat.total_calls(), 0);
}

#[tokio::test]
async fn given_vision_request_when_dispatching_then_returns_description_payload() {
    let speech = Arc::new(CountingSpeech::returning(""));
    let chat = Arc::new(CountingChat::new());

    let payload = dispatcher(&speech, &chat)
        .dispatch(AnalysisRequest::Vision {
            image: "aW1hZ2U=".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(
        payload,
        AnalysisPayload::Description("a mock description".to_string())
    );
    assert_eq!(chat.describe_calls(), 1);
}

#[tokio::test]
async fn given_text_request_when_dispatching_then_returns_summary_payload() {
    let speech = Arc::new(CountingSpeech::returning(""));
    let chat = Arc::new(CountingChat::new());

    let payload = dispatcher(&speech, &chat)
        .dispatch(AnalysisRequest::Text {
            text: "A short document.".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(
        payload,
        AnalysisPayload::Summary("- mock summary".to_string())
    );
    assert_eq!(chat.document_calls(), 1);
}
