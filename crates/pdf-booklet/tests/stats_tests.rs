mod common;

use common::*;
use pdf_booklet::*;

#[test]
fn test_stats_empty_document() {
    let doc = create_test_pdf(0);
    let stats = calculate_statistics(&doc, &BookletOptions::default()).unwrap();

    assert_eq!(stats.source_pages, 0);
    assert_eq!(stats.output_sheets, 0);
    assert_eq!(stats.output_pages, 0);
    assert_eq!(stats.blank_pages_added, 0);
    assert_eq!(stats.page_size, None);
    assert_eq!(stats.scale, None);
    assert!(!stats.mixed_page_sizes);
}

#[test]
fn test_stats_exact_multiple() {
    let doc = create_test_pdf(8);
    let stats = calculate_statistics(&doc, &BookletOptions::default()).unwrap();

    assert_eq!(stats.source_pages, 8);
    assert_eq!(stats.output_sheets, 2);
    assert_eq!(stats.output_pages, 4);
    assert_eq!(stats.blank_pages_added, 0);
    assert_eq!(stats.page_size, Some(PageSize::new(612.0, 792.0)));
}

#[test]
fn test_stats_padding_same_for_both_modes() {
    let doc = create_test_pdf(9);
    for mode in [BookletMode::SheetWise, BookletMode::Continuous] {
        let stats = calculate_statistics(&doc, &BookletOptions::with_mode(mode)).unwrap();
        assert_eq!(stats.output_sheets, 3);
        assert_eq!(stats.output_pages, 6);
        assert_eq!(stats.blank_pages_added, 3);
    }
}

#[test]
fn test_stats_scale() {
    let doc = create_test_pdf(4);

    let stats = calculate_statistics(&doc, &BookletOptions::default()).unwrap();
    let expected = default_scale(PageSize::new(612.0, 792.0), 0.0);
    assert_eq!(stats.scale, Some(expected));

    let options = BookletOptions {
        scale: Some(0.6),
        ..Default::default()
    };
    let stats = calculate_statistics(&doc, &options).unwrap();
    assert_eq!(stats.scale, Some(0.6));
}

#[test]
fn test_stats_mixed_page_sizes() {
    let doc = create_sized_pdf(&[(612, 792), (612, 792), (595, 842)]);
    let stats = calculate_statistics(&doc, &BookletOptions::default()).unwrap();
    assert!(stats.mixed_page_sizes);

    let doc = create_test_pdf(3);
    let stats = calculate_statistics(&doc, &BookletOptions::default()).unwrap();
    assert!(!stats.mixed_page_sizes);
}

#[test]
fn test_stats_margin_too_large() {
    let doc = create_test_pdf(4);
    let options = BookletOptions {
        inner_margin_pt: 396.0,
        ..Default::default()
    };
    let result = calculate_statistics(&doc, &options);
    assert!(matches!(result, Err(BookletError::Geometry(_))));
}
