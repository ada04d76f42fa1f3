#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # Entity Report for Rust

 Schema-driven CSV and XLSX report generation for entity collections.

 Give the generator a slice of typed entities (or loosely-typed key/value
 rows) and it produces either a CSV text blob or a spreadsheet workbook with
 one sheet per logical page of data. Columns come from a per-entity schema:
 an ordered, compile-time registration of name, type tag and accessor.
 Entries flagged as ignored are excluded everywhere.

 ## Core Concepts

 - **Entity schema:** each exported type implements [`core::ReportEntity`]
   and registers its columns with [`core::EntitySchema::builder`]. The
   registration order is the column order, for the header and for every row.
 - **Cell values:** accessors yield [`core::CellValue`] variants; numbers
   and booleans stay native for the workbook path, and everything renders
   as text on the CSV path. Absent values are blank cells or empty fields,
   never errors.
 - **Pages:** a [`core::ReportPage`] (or [`core::DynamicPage`] for
   dictionary-shaped rows) maps a raw name onto one worksheet; names are
   sanitized before they reach the encoder.
 - **Workbook sink:** the spreadsheet encoder sits behind
   [`report::sheet::WorkbookSink`], so the projection engine never depends
   on a particular file library. The bundled sink uses `rust_xlsxwriter`.

 ## Features

 The crate is modular, allowing you to enable only the outputs you need:

 | **Feature** | **Description**                                  |
 |-------------|--------------------------------------------------|
 | csv         | Enables CSV text report generation               |
 | xlsx        | Enables workbook generation via `rust_xlsxwriter`|
 | full        | Enables all available features                   |

 ## Getting Started

 Make sure you activated the suitable features on Cargo.toml:

 ```toml
 [dependencies]
 entity-report-rs = { version = "<version>", features = ["full"] }
 ```

 Then, on your main.rs:

 ```
 use entity_report_rs::core::{
     EntityReportOptions, EntitySchema, ReportEntity, TypeTag,
 };
 use entity_report_rs::report::EntityReportGenerator;

 struct Product {
     id: Option<i64>,
     discontinued: Option<bool>,
     name: Option<String>,
     tags: Vec<String>,
 }

 impl ReportEntity for Product {
     fn report_schema() -> EntitySchema<Self> {
         EntitySchema::builder()
             .column("id", TypeTag::Int, |p: &Product| p.id.into())
             .column("discontinued", TypeTag::Bool, |p: &Product| {
                 p.discontinued.into()
             })
             .column("name", TypeTag::String, |p: &Product| p.name.clone().into())
             .column("tags", TypeTag::StringCollection, |p: &Product| {
                 p.tags.clone().into()
             })
             .build()
     }
 }

 fn main() {
     let products = vec![
         Product {
             id: Some(1),
             discontinued: Some(false),
             name: Some("Wireless Headphones".to_string()),
             tags: vec!["audio".to_string(), "wireless".to_string()],
         },
         Product {
             id: Some(2),
             discontinued: None,
             name: None,
             tags: Vec::new(),
         },
     ];

     let options = EntityReportOptions::builder().csv_delimiter(";").build();
     let generator = EntityReportGenerator::new(options);

     let csv = generator.generate_csv_content(&products).unwrap();

     assert_eq!(
         csv,
         "id;discontinued;name;tags\r\n\
          1;false;Wireless Headphones;audio\r\n\
          2;;;\r\n"
     );
 }
 ```

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.

 */

/// Core module for schemas, values, pages and options
pub mod core;

/// Error types for report generation
pub mod error;

#[doc(inline)]
pub use error::*;

/// Report generation: the generator plus the CSV and workbook pipelines
pub mod report;
