use std::path::Path;

use thiserror::Error;

pub mod schema;
pub mod table;

use schema::resolve_columns;
use table::read_table;

use crate::model::metrics::MetricSet;
use crate::model::record::{Dataset, DatasetRole, Record};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("schema mismatch in {role} dataset: missing column '{column}'")]
    SchemaMismatch { role: DatasetRole, column: String },
    #[error("parse error: {0}")]
    Parse(String),
}

pub fn load_dataset(
    path: &Path,
    role: DatasetRole,
    metrics: &MetricSet,
) -> Result<Dataset, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInput(format!(
            "{} dataset not found at {}",
            role,
            path.display()
        )));
    }

    let table = read_table(path)?;
    let columns = resolve_columns(&table.columns, role, metrics)?;

    let mut records = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let district = row.field(columns.district).to_string();
        let market = row.field(columns.market).to_string();
        let mut values = Vec::with_capacity(metrics.len());
        for (metric, &col) in metrics.ids().zip(&columns.metrics) {
            let raw = row.field(col);
            let value = raw.parse::<f64>().map_err(|_| {
                InputError::Parse(format!(
                    "{} line {}: column '{}' has non-numeric value '{}'",
                    role, row.line_no, metric, raw
                ))
            })?;
            if !value.is_finite() {
                return Err(InputError::Parse(format!(
                    "{} line {}: column '{}' has non-finite value '{}'",
                    role, row.line_no, metric, raw
                )));
            }
            values.push(value);
        }
        records.push(Record::new(district, market, values));
    }

    tracing::info!(
        role = %role,
        path = %path.display(),
        records = records.len(),
        "loaded dataset"
    );

    Ok(Dataset::new(role, records))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
