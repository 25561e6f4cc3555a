use crate::input::InputError;
use crate::model::metrics::MetricSet;
use crate::model::record::DatasetRole;

const DISTRICT_ALIASES: &[&str] = &["district"];
const MARKET_ALIASES: &[&str] = &["market", "industry"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub district: usize,
    pub market: usize,
    /// Column index per metric, in metric-set order.
    pub metrics: Vec<usize>,
}

pub fn normalize_header(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Index of the first header matching any alias, aliases tried in order.
fn find_column(normalized: &[String], aliases: &[&str]) -> Option<usize> {
    aliases
        .iter()
        .find_map(|alias| normalized.iter().position(|h| h == alias))
}

pub fn resolve_columns(
    header: &[String],
    role: DatasetRole,
    metrics: &MetricSet,
) -> Result<ColumnMap, InputError> {
    let normalized: Vec<String> = header.iter().map(|h| normalize_header(h)).collect();

    let district =
        find_column(&normalized, DISTRICT_ALIASES).ok_or_else(|| InputError::SchemaMismatch {
            role,
            column: DISTRICT_ALIASES[0].to_string(),
        })?;
    let market =
        find_column(&normalized, MARKET_ALIASES).ok_or_else(|| InputError::SchemaMismatch {
            role,
            column: MARKET_ALIASES.join("|"),
        })?;

    let mut metric_cols = Vec::with_capacity(metrics.len());
    for id in metrics.ids() {
        let col = find_column(&normalized, &[id]).ok_or_else(|| InputError::SchemaMismatch {
            role,
            column: id.to_string(),
        })?;
        metric_cols.push(col);
    }

    Ok(ColumnMap {
        district,
        market,
        metrics: metric_cols,
    })
}
