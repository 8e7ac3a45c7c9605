//! Declared columns of each export and their coercion to fixed Arrow types.
//!
//! The pipeline's writers are not strict about physical types (ids may be
//! integers or strings, years may arrive as floats, strings may be large or
//! dictionary-encoded), so every declared column is cast to one canonical
//! type before rows are decoded. Undeclared columns are dropped.
//!
//! Integer ids stored as floats (a nullable integer column written by pandas)
//! are rendered without the fractional part, so `1.0` and `1` name the same
//! key.

use std::sync::Arc;

use arrow::{
  array::{ArrayRef, AsArray},
  compute::cast,
  datatypes::{DataType, Field, Float64Type, Schema},
  error::ArrowError,
  record_batch::RecordBatch,
};

use crate::{Error, Result, table::TableName};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
  Text,
  Int,
  Float,
}

impl Kind {
  fn data_type(self) -> DataType {
    match self {
      Kind::Text => DataType::Utf8,
      Kind::Int => DataType::Int64,
      Kind::Float => DataType::Float64,
    }
  }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Column {
  pub name:     &'static str,
  pub kind:     Kind,
  pub nullable: bool,
}

const fn col(name: &'static str, kind: Kind, nullable: bool) -> Column {
  Column { name, kind, nullable }
}

const DOCS: &[Column] = &[
  col("DOC_ID", Kind::Text, false),
  col("ano", Kind::Int, true),
  col("titulo", Kind::Text, true),
  col("orientador_nome", Kind::Text, true),
  col("orientador_id", Kind::Text, true),
  col("url", Kind::Text, true),
];

const TOPICS: &[Column] = &[
  col("topic", Kind::Int, false),
  col("label", Kind::Text, true),
  col("keywords", Kind::Text, true),
];

const DOC_TOPICS: &[Column] = &[
  col("DOC_ID", Kind::Text, false),
  col("topic", Kind::Int, false),
  col("prob", Kind::Float, true),
];

const TOPIC_TRENDS: &[Column] = &[
  col("topic", Kind::Int, false),
  col("ano", Kind::Int, false),
  col("share", Kind::Float, false),
  col("n_docs", Kind::Int, false),
];

const ADVISOR_PROFILES: &[Column] = &[
  col("orientador_id", Kind::Text, false),
  col("orientador_nome", Kind::Text, true),
  col("n_tccs", Kind::Int, false),
  col("anos_atuacao", Kind::Int, false),
  col("temas_top", Kind::Text, true),
];

const ADVISOR_TOPICS: &[Column] = &[
  col("orientador_id", Kind::Text, false),
  col("topic", Kind::Int, false),
  col("n_docs", Kind::Int, false),
  col("share_no_orientador", Kind::Float, true),
];

pub(crate) fn columns(name: TableName) -> &'static [Column] {
  match name {
    TableName::Docs => DOCS,
    TableName::Topics | TableName::TopicsCurrent => TOPICS,
    TableName::DocTopics => DOC_TOPICS,
    TableName::TopicTrends => TOPIC_TRENDS,
    TableName::AdvisorProfiles => ADVISOR_PROFILES,
    TableName::AdvisorTopics => ADVISOR_TOPICS,
  }
}

/// Select the declared columns of `name` from `batch`, cast to their
/// canonical types.
///
/// A required column containing nulls is rejected here rather than during
/// row decoding.
pub(crate) fn project(name: TableName, batch: &RecordBatch) -> Result<RecordBatch> {
  let declared = columns(name);
  let mut fields = Vec::with_capacity(declared.len());
  let mut arrays: Vec<ArrayRef> = Vec::with_capacity(declared.len());

  for column in declared {
    let array = batch
      .column_by_name(column.name)
      .ok_or(Error::MissingColumn { table: name.as_str(), column: column.name })?;

    let target = column.kind.data_type();
    let array = if array.data_type() == &target {
      Arc::clone(array)
    } else {
      coerce(array, column.kind).map_err(|source| Error::Arrow { name: name.as_str(), source })?
    };

    fields.push(Field::new(column.name, target, column.nullable));
    arrays.push(array);
  }

  RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)
    .map_err(|source| Error::Arrow { name: name.as_str(), source })
}

fn coerce(array: &ArrayRef, kind: Kind) -> Result<ArrayRef, ArrowError> {
  match kind {
    Kind::Text if array.data_type().is_floating() && is_integral(array)? => {
      cast(&cast(array, &DataType::Int64)?, &DataType::Utf8)
    }
    _ => cast(array, &kind.data_type()),
  }
}

/// Whether every non-null value of a float array is a whole number that fits
/// an `i64`.
fn is_integral(array: &ArrayRef) -> Result<bool, ArrowError> {
  let floats = cast(array, &DataType::Float64)?;
  Ok(
    floats
      .as_primitive::<Float64Type>()
      .iter()
      .flatten()
      .all(|v| v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64),
  )
}
