use std::fmt;

use crate::{ConvertError, FromValue, Value, ValueKind};

/// A struct that can be built from one row of a record batch.
///
/// Usually implemented by `#[columnar]`, which binds every field annotated
/// with `#[columnar(column = "...")]`. Unbound fields keep their
/// [`Default`] value.
pub trait FromRecordBatch: Default + Sized + 'static {
    fn shape() -> Shape<Self>;
}

type Assign<T> = Box<dyn Fn(&mut T, Value) -> Result<(), ConvertError> + Send + Sync>;

/// One destination field fed by one source column.
pub struct FieldBinding<T> {
    field: &'static str,
    column: String,
    field_type: &'static str,
    accepts: fn(ValueKind) -> bool,
    assign: Assign<T>,
}

impl<T> FieldBinding<T> {
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    /// Name of the field's static type.
    pub fn field_type(&self) -> &'static str {
        self.field_type
    }

    /// Whether a value of `kind` can be assigned to the field.
    pub fn accepts(&self, kind: ValueKind) -> bool {
        (self.accepts)(kind)
    }

    pub fn assign(&self, record: &mut T, value: Value) -> Result<(), ConvertError> {
        (self.assign)(record, value)
    }
}

impl<T> fmt::Debug for FieldBinding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("field", &self.field)
            .field("column", &self.column)
            .field("field_type", &self.field_type)
            .finish()
    }
}

/// The ordered field bindings of a destination type.
#[derive(Debug)]
pub struct Shape<T> {
    bindings: Vec<FieldBinding<T>>,
}

impl<T: 'static> Shape<T> {
    pub fn builder() -> ShapeBuilder<T> {
        ShapeBuilder {
            bindings: Vec::new(),
        }
    }
}

impl<T> Shape<T> {
    pub fn bindings(&self) -> &[FieldBinding<T>] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

pub struct ShapeBuilder<T> {
    bindings: Vec<FieldBinding<T>>,
}

impl<T: 'static> ShapeBuilder<T> {
    /// Bind `field` to the column named `column`. Bindings are applied in
    /// the order they are declared.
    pub fn bind<F: FromValue + 'static>(
        mut self,
        field: &'static str,
        column: &str,
        assign: fn(&mut T, F),
    ) -> Self {
        self.bindings.push(FieldBinding {
            field,
            column: column.to_string(),
            field_type: std::any::type_name::<F>(),
            accepts: F::accepts,
            assign: Box::new(move |record: &mut T, value: Value| {
                assign(record, F::from_value(value)?);
                Ok(())
            }),
        });
        self
    }

    pub fn build(self) -> Shape<T> {
        Shape {
            bindings: self.bindings,
        }
    }
}
