use pdf_booklet::*;

#[test]
fn test_default_options_are_valid() {
    let options = BookletOptions::default();
    assert!(options.validate().is_ok());
    assert_eq!(options.paper_size, PaperSize::A4);
    assert_eq!(options.orientation, Orientation::Portrait);
    assert_eq!(options.intermediate_suffix, "_tmp");
    assert_eq!(options.output_suffix, "_booklet");
}

#[test]
fn test_sheet_size_a4_portrait() {
    let (w, h) = BookletOptions::default().sheet_size_pt();
    assert!((w - 595.2756).abs() < 0.01);
    assert!((h - 841.8898).abs() < 0.01);
}

#[test]
fn test_validation_rejects_bad_paper() {
    let options = BookletOptions {
        paper_size: PaperSize::Custom {
            width_mm: 0.0,
            height_mm: 297.0,
        },
        ..Default::default()
    };
    match options.validate() {
        Err(BookletError::Config(msg)) => assert!(msg.contains("Paper dimensions")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_blank_marker() {
    let options = BookletOptions {
        marker_text: "   ".to_string(),
        ..Default::default()
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_validation_rejects_suffixes() {
    let same = BookletOptions {
        intermediate_suffix: "_x".to_string(),
        output_suffix: "_x".to_string(),
        ..Default::default()
    };
    assert!(same.validate().is_err());

    let empty = BookletOptions {
        output_suffix: String::new(),
        ..Default::default()
    };
    assert!(empty.validate().is_err());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_options_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("options.json");

    let options = BookletOptions {
        paper_size: PaperSize::Letter,
        orientation: Orientation::Landscape,
        marker_text: "spacer".to_string(),
        ..Default::default()
    };
    options.save(&path).await.unwrap();

    let loaded = BookletOptions::load(&path).await.unwrap();
    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_options_load_fills_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("options.json");
    std::fs::write(&path, r#"{ "paper_size": "A5" }"#).unwrap();

    let loaded = BookletOptions::load(&path).await.unwrap();
    assert_eq!(loaded.paper_size, PaperSize::A5);
    assert_eq!(loaded.output_suffix, "_booklet");
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_options_load_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("options.json");
    std::fs::write(&path, "not json").unwrap();

    match BookletOptions::load(&path).await {
        Err(BookletError::Config(msg)) => assert!(msg.contains("Failed to parse config")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}
