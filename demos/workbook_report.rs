use std::env::temp_dir;
use std::fs;

use anyhow::Result;
use entity_report_rs::core::{EntitySchema, ReportEntity, ReportPage, TypeTag};
use entity_report_rs::report::xlsx_file::XlsxFile;
use entity_report_rs::report::EntityReportGenerator;
use uuid::Uuid;

struct Subscription {
    id: i64,
    active: bool,
    plan: Option<String>,
    account_guid: Uuid,
}

impl ReportEntity for Subscription {
    fn report_schema() -> EntitySchema<Self> {
        EntitySchema::builder()
            .column("id", TypeTag::Int, |s: &Subscription| s.id.into())
            .column("active", TypeTag::Bool, |s: &Subscription| s.active.into())
            .column("plan", TypeTag::String, |s: &Subscription| {
                s.plan.clone().into()
            })
            .column("account_guid", TypeTag::Guid, |s: &Subscription| {
                s.account_guid.into()
            })
            .build()
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let trial = vec![
        Subscription {
            id: 1,
            active: true,
            plan: None,
            account_guid: Uuid::new_v4(),
        },
        Subscription {
            id: 2,
            active: false,
            plan: None,
            account_guid: Uuid::new_v4(),
        },
    ];
    let paid = vec![Subscription {
        id: 3,
        active: true,
        plan: Some("business".to_string()),
        account_guid: Uuid::new_v4(),
    }];

    let pages = vec![
        ReportPage::new("Trial accounts", trial),
        ReportPage::new("Paid accounts", paid),
    ];

    let mut file = XlsxFile::new();
    file.set_author("entity-report-rs demo");
    file.set_subject("Subscription export");

    let bytes = EntityReportGenerator::default().generate_excel_content_with(&pages, &mut file)?;

    let path = temp_dir().join("subscriptions.xlsx");
    fs::write(&path, bytes)?;
    println!("workbook written to {}", path.display());

    Ok(())
}
