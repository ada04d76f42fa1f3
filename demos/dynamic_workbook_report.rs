use std::env::temp_dir;
use std::fs;

use anyhow::Result;
use entity_report_rs::core::{DynamicPage, DynamicRow};
use entity_report_rs::report::EntityReportGenerator;
use serde_json::json;

fn main() -> Result<()> {
    env_logger::init();

    let readings = [
        json!({"sensor": "t-101", "reading": 21, "alert": false}),
        json!({"sensor": "t-102", "reading": 35, "alert": true}),
        json!({"sensor": "t-103", "reading": 19, "alert": false}),
    ];

    let rows = readings
        .iter()
        .map(DynamicRow::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let pages = vec![DynamicPage::new("Sensor readings", rows)];
    let bytes = EntityReportGenerator::default().generate_excel_content_dynamic(&pages)?;

    let path = temp_dir().join("sensor-readings.xlsx");
    fs::write(&path, bytes)?;
    println!("workbook written to {}", path.display());

    Ok(())
}
