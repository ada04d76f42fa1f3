//! Shared fixtures for the report generation test suites.
//!
//! Not every suite uses every fixture.
#![allow(dead_code)]

pub mod mocks;

use entity_report_rs::core::{EntitySchema, ReportEntity, TypeTag};
use uuid::Uuid;

/// Catalog entry with every column shape the projection engine handles:
/// integer, boolean, string, GUID and a string collection.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: Option<i64>,
    pub discontinued: Option<bool>,
    pub name: Option<String>,
    pub product_guid: Option<Uuid>,
    pub tags: Vec<String>,
}

impl ReportEntity for Product {
    fn report_schema() -> EntitySchema<Self> {
        EntitySchema::builder()
            .column("id", TypeTag::Int, |p: &Product| p.id.into())
            .column("discontinued", TypeTag::Bool, |p: &Product| {
                p.discontinued.into()
            })
            .column("name", TypeTag::String, |p: &Product| p.name.clone().into())
            .column("product_guid", TypeTag::Guid, |p: &Product| {
                p.product_guid.into()
            })
            .column("tags", TypeTag::StringCollection, |p: &Product| {
                p.tags.clone().into()
            })
            .build()
    }
}

/// Two fully populated products sharing the same tag list, the way a
/// typical export batch looks.
pub fn get_product_entities() -> Vec<Product> {
    let tags = vec!["string1".to_string(), "string2".to_string()];

    vec![
        Product {
            id: Some(1),
            discontinued: Some(true),
            name: Some("Obj1".to_string()),
            product_guid: Some(Uuid::new_v4()),
            tags: tags.clone(),
        },
        Product {
            id: Some(2),
            discontinued: Some(false),
            name: Some("Obj2".to_string()),
            product_guid: Some(Uuid::new_v4()),
            tags,
        },
    ]
}

pub fn get_blank_product() -> Product {
    Product {
        id: None,
        discontinued: None,
        name: None,
        product_guid: None,
        tags: Vec::new(),
    }
}

/// Entity with a column excluded from every report.
pub struct Account {
    pub id: Option<i64>,
    pub login: String,
    pub password: String,
}

impl ReportEntity for Account {
    fn report_schema() -> EntitySchema<Self> {
        EntitySchema::builder()
            .column("id", TypeTag::Int, |a: &Account| a.id.into())
            .column("login", TypeTag::String, |a: &Account| {
                a.login.clone().into()
            })
            .ignored_column("password", TypeTag::String, |a: &Account| {
                a.password.clone().into()
            })
            .build()
    }
}

/// Entity whose second column accessor always fails, standing in for a
/// throwing property getter.
pub struct Flaky {
    pub id: i64,
}

impl ReportEntity for Flaky {
    fn report_schema() -> EntitySchema<Self> {
        EntitySchema::builder()
            .column("id", TypeTag::Int, |f: &Flaky| f.id.into())
            .try_column("payload", TypeTag::String, |_: &Flaky| {
                Err("payload getter failed".into())
            })
            .build()
    }
}

/// Render a calamine cell the way a reader would see it, blanks included.
pub fn cell_text(cell: Option<&calamine::Data>) -> String {
    use calamine::Data;

    match cell {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.clone(),
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Float(f)) => {
            if f.fract() == 0.0 {
                format!("{:.0}", f)
            } else {
                f.to_string()
            }
        }
        Some(Data::Bool(b)) => b.to_string(),
        Some(other) => format!("{:?}", other),
    }
}
