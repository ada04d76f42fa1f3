use anyhow::Result;
use entity_report_rs::core::{EntityReportOptions, EntitySchema, ReportEntity, TypeTag};
use entity_report_rs::report::EntityReportGenerator;
use uuid::Uuid;

struct Device {
    id: i64,
    deleted: bool,
    name: String,
    device_guid: Uuid,
    properties: Vec<String>,
}

impl ReportEntity for Device {
    fn report_schema() -> EntitySchema<Self> {
        EntitySchema::builder()
            .column("id", TypeTag::Int, |d: &Device| d.id.into())
            .column("deleted", TypeTag::Bool, |d: &Device| d.deleted.into())
            .column("name", TypeTag::String, |d: &Device| d.name.clone().into())
            .column("device_guid", TypeTag::Guid, |d: &Device| {
                d.device_guid.into()
            })
            .column("properties", TypeTag::StringCollection, |d: &Device| {
                d.properties.clone().into()
            })
            .build()
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let devices = vec![
        Device {
            id: 1,
            deleted: false,
            name: "thermostat".to_string(),
            device_guid: Uuid::new_v4(),
            properties: vec!["indoor".to_string(), "wifi".to_string()],
        },
        Device {
            id: 2,
            deleted: true,
            name: "doorbell".to_string(),
            device_guid: Uuid::new_v4(),
            properties: vec!["outdoor".to_string()],
        },
    ];

    let options = EntityReportOptions::builder()
        .csv_delimiter(";")
        .detailed_enumerables(true)
        .build();
    let generator = EntityReportGenerator::new(options);

    let content = generator.generate_csv_content(&devices)?;
    print!("{content}");

    Ok(())
}
