use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

use brevis::application::ports::{TextExtractor, TextExtractorError};
use brevis::infrastructure::pdf::LopdfExtractor;

/// Builds a minimal PDF with one page per entry; an empty entry
/// produces a page with no text content.
fn build_pdf(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let operations = if text.is_empty() {
            vec![]
        } else {
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 36.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ]
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

#[tokio::test]
async fn given_two_page_pdf_when_extracting_then_page_count_and_text_match() {
    let extractor = LopdfExtractor::new();
    let pdf = build_pdf(&["Hello", "World"]);

    let extraction = extractor.extract(&pdf).await.unwrap();

    assert_eq!(extraction.page_count, 2);
    assert!(extraction.text.contains("Hello"));
    assert!(extraction.text.contains("World"));
}

#[tokio::test]
async fn given_pdf_with_textless_page_when_extracting_then_page_still_counted() {
    let extractor = LopdfExtractor::new();
    let pdf = build_pdf(&["Hello", "", "World"]);

    let extraction = extractor.extract(&pdf).await.unwrap();

    assert_eq!(extraction.page_count, 3);
    assert!(extraction.text.contains("Hello"));
    assert!(extraction.text.contains("World"));
}

#[tokio::test]
async fn given_single_textless_page_when_extracting_then_succeeds_with_empty_text() {
    let extractor = LopdfExtractor::new();
    let pdf = build_pdf(&[""]);

    let extraction = extractor.extract(&pdf).await.unwrap();

    assert_eq!(extraction.page_count, 1);
    assert!(extraction.text.trim().is_empty());
}

#[tokio::test]
async fn given_corrupt_bytes_when_extracting_then_returns_parse_failed() {
    let extractor = LopdfExtractor::new();
    let garbage = b"not a pdf at all";

    let result = extractor.extract(garbage).await;

    assert!(matches!(result, Err(TextExtractorError::ParseFailed(_))));
}
