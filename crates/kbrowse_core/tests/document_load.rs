use kbrowse_core::{flatten, load_document_file, load_document_str, DocumentError};
use std::io::Write;

const DOC: &str = r#"[
    {
        "title": "Billing",
        "slug": "billing",
        "subcategories": [
            {
                "title": "Refunds",
                "slug": "refunds",
                "articles": [
                    {"id": 1, "title": "one", "content": "first body", "tags": ["refund"]},
                    {"id": 2, "title": "two", "content": "second body"}
                ]
            },
            {
                "title": "Invoices",
                "slug": "invoices",
                "articles": [
                    {"id": 3, "title": "three", "content": "third body"}
                ]
            }
        ]
    }
]"#;

#[test]
fn load_from_file_round_trips_the_tree() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
    file.write_all(DOC.as_bytes()).expect("fixture should be written");

    let kb = load_document_file(file.path()).expect("document should load");
    assert_eq!(kb.article_count(), 3);

    let flat = flatten(&kb);
    assert_eq!(flat.len(), 3);
    assert!(flat
        .iter()
        .all(|entry| entry.category_slug == "billing"));
    assert_eq!(flat[2].subcategory_slug, "invoices");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let missing = dir.path().join("nope.json");
    assert!(matches!(
        load_document_file(&missing),
        Err(DocumentError::Io(_))
    ));
}

#[test]
fn malformed_document_reports_parse_error_with_source() {
    let err = load_document_str("[{\"title\": 3}]").expect_err("schema mismatch must fail");
    assert!(matches!(err, DocumentError::Parse(_)));
    assert!(std::error::Error::source(&err).is_some());
    assert!(err.to_string().contains("failed to parse"));
}

#[test]
fn duplicate_subcategory_slug_is_invalid() {
    let doc = r#"[
        {
            "title": "A", "slug": "a",
            "subcategories": [
                {"title": "S1", "slug": "s", "articles": []},
                {"title": "S2", "slug": "s", "articles": []}
            ]
        }
    ]"#;
    let err = load_document_str(doc).expect_err("duplicate slug must fail");
    assert!(matches!(err, DocumentError::Invalid(_)));
    assert!(err.to_string().contains("duplicate subcategory slug"));
}
