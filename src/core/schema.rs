use crate::core::value::CellValue;
use crate::error::AccessorError;

/// Column type marker used to pick a rendering rule per cell.
///
/// Optional fields register the tag of their *underlying* type: an
/// `Option<i64>` field is an `Int` column whose accessor yields
/// [`CellValue::Null`] when the value is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    Int,
    Bool,
    String,
    Guid,
    StringCollection,
    /// Any other scalar; rendered through its display form.
    Other,
}

/// Discovered metadata for one exported column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub name: String,
    pub type_tag: TypeTag,
    pub ignored: bool,
}

type Accessor<T> = Box<dyn Fn(&T) -> Result<CellValue, AccessorError> + Send + Sync>;

/// One registered schema entry: descriptor plus the value accessor.
pub struct Column<T> {
    descriptor: ColumnDescriptor,
    accessor: Accessor<T>,
}

impl<T> Column<T> {
    pub fn descriptor(&self) -> &ColumnDescriptor {
        &self.descriptor
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    pub fn type_tag(&self) -> TypeTag {
        self.descriptor.type_tag
    }

    pub fn is_ignored(&self) -> bool {
        self.descriptor.ignored
    }

    /// Read this column's value from an entity.
    pub fn value_of(&self, entity: &T) -> Result<CellValue, AccessorError> {
        (self.accessor)(entity)
    }
}

/// Ordered column registry for one entity type.
///
/// Registration order is the column order, for the header and for every row.
/// The schema is static data for the lifetime of the process: repeated calls
/// to [`ReportEntity::report_schema`] must yield the same sequence.
pub struct EntitySchema<T> {
    columns: Vec<Column<T>>,
}

impl<T> EntitySchema<T> {
    pub fn builder() -> EntitySchemaBuilder<T> {
        EntitySchemaBuilder {
            columns: Vec::new(),
        }
    }

    /// All registered columns, ignored entries included.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// The exported column set: registration order with ignored entries
    /// dropped. This is fixed before any row is visited.
    pub fn active_columns(self) -> Vec<Column<T>> {
        self.columns
            .into_iter()
            .filter(|column| !column.is_ignored())
            .collect()
    }

    /// Descriptors of the exported column set, in order.
    pub fn descriptors(&self) -> Vec<ColumnDescriptor> {
        self.columns
            .iter()
            .filter(|column| !column.is_ignored())
            .map(|column| column.descriptor().clone())
            .collect()
    }
}

/// Builder used by [`ReportEntity`](crate::core::ReportEntity)
/// implementations to register columns in declaration order.
///
/// # Example
///
/// ```
/// use entity_report_rs::core::{CellValue, EntitySchema, TypeTag};
///
/// struct Device {
///     id: Option<i64>,
///     label: String,
///     api_key: String,
/// }
///
/// let schema: EntitySchema<Device> = EntitySchema::builder()
///     .column("id", TypeTag::Int, |d: &Device| d.id.into())
///     .column("label", TypeTag::String, |d: &Device| d.label.clone().into())
///     .ignored_column("api_key", TypeTag::String, |d: &Device| {
///         d.api_key.clone().into()
///     })
///     .build();
///
/// let names: Vec<String> = schema.descriptors().into_iter().map(|d| d.name).collect();
/// assert_eq!(names, ["id", "label"]);
/// ```
pub struct EntitySchemaBuilder<T> {
    columns: Vec<Column<T>>,
}

impl<T> EntitySchemaBuilder<T> {
    /// Register an infallible column.
    pub fn column<F>(self, name: impl Into<String>, type_tag: TypeTag, accessor: F) -> Self
    where
        F: Fn(&T) -> CellValue + Send + Sync + 'static,
    {
        self.push(name.into(), type_tag, false, move |entity| {
            Ok(accessor(entity))
        })
    }

    /// Register a column whose accessor may fail, the counterpart of a
    /// throwing property getter. The failure surfaces as
    /// [`ReportError::PropertyAccess`](crate::error::ReportError::PropertyAccess).
    pub fn try_column<F>(self, name: impl Into<String>, type_tag: TypeTag, accessor: F) -> Self
    where
        F: Fn(&T) -> Result<CellValue, AccessorError> + Send + Sync + 'static,
    {
        self.push(name.into(), type_tag, false, accessor)
    }

    /// Register a column excluded from every report. The accessor is kept
    /// for registration symmetry but is never evaluated.
    pub fn ignored_column<F>(self, name: impl Into<String>, type_tag: TypeTag, accessor: F) -> Self
    where
        F: Fn(&T) -> CellValue + Send + Sync + 'static,
    {
        self.push(name.into(), type_tag, true, move |entity| Ok(accessor(entity)))
    }

    fn push<F>(mut self, name: String, type_tag: TypeTag, ignored: bool, accessor: F) -> Self
    where
        F: Fn(&T) -> Result<CellValue, AccessorError> + Send + Sync + 'static,
    {
        self.columns.push(Column {
            descriptor: ColumnDescriptor {
                name,
                type_tag,
                ignored,
            },
            accessor: Box::new(accessor),
        });
        self
    }

    pub fn build(self) -> EntitySchema<T> {
        EntitySchema {
            columns: self.columns,
        }
    }
}

/// Implemented by every exported entity type; supplies the column registry
/// the projection pipelines run against.
pub trait ReportEntity {
    fn report_schema() -> EntitySchema<Self>
    where
        Self: Sized;
}
