use std::sync::Arc;

use triptych::application::ports::AnalysisError;
use triptych::domain::{DocumentSource, SourceKind, DOCX_MIME};
use triptych::infrastructure::text_processing::DocumentExtractor;

use crate::helpers::CountingFetcher;

fn extractor_with(fetcher: Arc<CountingFetcher>) -> DocumentExtractor {
    DocumentExtractor::new(fetcher, 30)
}

fn plain_file(content: &str) -> DocumentSource {
    DocumentSource::File {
        bytes: content.as_bytes().to_vec(),
        mime_type: "text/plain".to_string(),
    }
}

#[tokio::test]
async fn given_short_plain_text_then_text_is_unchanged_and_untruncated() {
    let extractor = extractor_with(Arc::new(CountingFetcher::returning("")));

    let extracted = extractor
        .extract(plain_file("just a note"))
        .await
        .unwrap();

    assert_eq!(extracted.source_kind, SourceKind::PlainText);
    assert_eq!(extracted.text, "just a note");
    assert!(!extracted.truncated);
}

#[tokio::test]
async fn given_plain_text_at_exactly_the_ceiling_then_not_truncated() {
    let extractor = extractor_with(Arc::new(CountingFetcher::returning("")));
    let content = "x".repeat(12_000);

    let extracted = extractor.extract(plain_file(&content)).await.unwrap();

    assert_eq!(extracted.text.chars().count(), 12_000);
    assert!(!extracted.truncated);
}

#[tokio::test]
async fn given_plain_text_over_the_ceiling_then_hard_cut_at_twelve_thousand() {
    let extractor = extractor_with(Arc::new(CountingFetcher::returning("")));
    let content = "y".repeat(12_001);

    let extracted = extractor.extract(plain_file(&content)).await.unwrap();

    assert_eq!(extracted.text.chars().count(), 12_000);
    assert!(extracted.truncated);
}

#[tokio::test]
async fn given_invalid_utf8_plain_text_then_fails_as_malformed() {
    let extractor = extractor_with(Arc::new(CountingFetcher::returning("")));
    let source = DocumentSource::File {
        bytes: vec![0xff, 0xfe, 0x80],
        mime_type: "text/plain".to_string(),
    };

    let outcome = extractor.extract(source).await;

    assert!(matches!(outcome, Err(AnalysisError::MalformedInput(_))));
}

#[tokio::test]
async fn given_unsupported_mime_then_rejected_with_zero_network_calls() {
    let fetcher = Arc::new(CountingFetcher::returning(""));
    let extractor = extractor_with(Arc::clone(&fetcher));
    let source = DocumentSource::File {
        bytes: b"pixels".to_vec(),
        mime_type: "image/png".to_string(),
    };

    let outcome = extractor.extract(source).await;

    assert!(matches!(outcome, Err(AnalysisError::UnsupportedFormat(_))));
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn given_corrupt_pdf_bytes_then_fails_as_malformed() {
    let extractor = extractor_with(Arc::new(CountingFetcher::returning("")));
    let source = DocumentSource::File {
        bytes: b"not a pdf at all".to_vec(),
        mime_type: "application/pdf".to_string(),
    };

    let outcome = extractor.extract(source).await;

    assert!(matches!(outcome, Err(AnalysisError::MalformedInput(_))));
}

#[tokio::test]
async fn given_url_then_page_is_fetched_stripped_and_labeled() {
    let fetcher = Arc::new(CountingFetcher::returning(
        "<html><script>var a;</script><body><p>An article body.</p></body></html>",
    ));
    let extractor = extractor_with(Arc::clone(&fetcher));

    let extracted = extractor
        .extract(DocumentSource::RemoteUrl("https://example.com".to_string()))
        .await
        .unwrap();

    assert_eq!(extracted.source_kind, SourceKind::RemoteUrl);
    assert_eq!(extracted.text, "An article body.");
    assert!(!extracted.truncated);
    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test]
async fn given_url_page_over_the_ceiling_then_hard_cut_at_sixteen_thousand() {
    let body = "z".repeat(20_000);
    let extractor = extractor_with(Arc::new(CountingFetcher::returning(&body)));

    let extracted = extractor
        .extract(DocumentSource::RemoteUrl("https://example.com".to_string()))
        .await
        .unwrap();

    assert_eq!(extracted.text.chars().count(), 16_000);
    assert!(extracted.truncated);
}

#[tokio::test]
async fn given_unreachable_url_then_fails_as_fetch_failed() {
    let extractor = extractor_with(Arc::new(CountingFetcher::failing()));

    let outcome = extractor
        .extract(DocumentSource::RemoteUrl(
            "https://down.example.com".to_string(),
        ))
        .await;

    assert!(matches!(outcome, Err(AnalysisError::FetchFailed(_))));
}

#[tokio::test]
async fn given_docx_file_then_body_text_is_extracted() {
    let extractor = extractor_with(Arc::new(CountingFetcher::returning("")));
    let docx = crate::infrastructure::docx_adapter_test::build_docx(
        "<w:document><w:body><w:p><w:r><w:t>Quarterly report</w:t></w:r></w:p>\
         <w:p><w:r><w:t>for review</w:t></w:r></w:p></w:body></w:document>",
    );

    let extracted = extractor
        .extract(DocumentSource::File {
            bytes: docx,
            mime_type: DOCX_MIME.to_string(),
        })
        .await
        .unwrap();

    assert_eq!(extracted.source_kind, SourceKind::Docx);
    assert_eq!(extracted.text, "Quarterly report for review");
}
