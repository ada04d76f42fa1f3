mod common;

use common::mocks::RejectingSink;
use common::{get_product_entities, Flaky};
use entity_report_rs::core::{DynamicRow, ReportPage};
use entity_report_rs::report::EntityReportGenerator;
use entity_report_rs::ReportError;

#[test]
fn accessor_failures_carry_the_friendly_entity_name() {
    let err = EntityReportGenerator::default()
        .generate_csv_content(&[Flaky { id: 1 }])
        .unwrap_err();

    match err {
        ReportError::PropertyAccess { entity, source } => {
            assert_eq!(entity, "Flaky");
            assert_eq!(source.to_string(), "payload getter failed");
        }
        other => panic!("expected a property access error, got {other}"),
    }
}

#[test]
fn the_error_display_includes_type_and_cause() {
    let err = EntityReportGenerator::default()
        .generate_csv_content(&[Flaky { id: 1 }])
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "error converting entities of type Flaky: payload getter failed"
    );
}

#[test]
fn duplicate_sanitized_sheet_names_are_rejected_by_the_encoder() {
    // distinct raw names that collapse to the same sheet name; rejecting
    // the duplicate is the encoder's job, not the generator's
    let pages = vec![
        ReportPage::new("my page", get_product_entities()),
        ReportPage::new("my_page", get_product_entities()),
    ];

    let err = EntityReportGenerator::default()
        .generate_excel_content(&pages)
        .unwrap_err();

    assert!(matches!(err, ReportError::Encoding(_)));
}

#[test]
fn names_that_sanitize_to_nothing_are_rejected_by_the_encoder() {
    let pages = vec![ReportPage::new(" \t ", get_product_entities())];

    let err = EntityReportGenerator::default()
        .generate_excel_content(&pages)
        .unwrap_err();

    assert!(matches!(err, ReportError::Encoding(_)));
}

#[test]
fn sink_rejections_propagate_untranslated() {
    let pages = vec![ReportPage::new("Products", get_product_entities())];

    let mut sink = RejectingSink;
    let err = EntityReportGenerator::default()
        .generate_excel_content_with(&pages, &mut sink)
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "workbook encoder: sheet 'Products' rejected"
    );
}

#[test]
fn non_object_json_rows_are_invalid_input() {
    let err = DynamicRow::try_from(&serde_json::json!(["a", "b"])).unwrap_err();
    assert!(matches!(err, ReportError::InvalidInput(_)));
}
