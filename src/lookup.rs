use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::model::record::{Dataset, Record};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no data for this selection: district '{district}', market '{market}'")]
pub struct LookupMiss {
    pub district: String,
    pub market: String,
}

/// District -> sorted markets, built once from the target dataset.
#[derive(Debug, Clone, Default)]
pub struct MarketIndex {
    by_district: BTreeMap<String, BTreeSet<String>>,
}

impl MarketIndex {
    pub fn build(dataset: &Dataset) -> Self {
        let mut by_district: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for record in &dataset.records {
            by_district
                .entry(record.district.clone())
                .or_default()
                .insert(record.market.clone());
        }
        Self { by_district }
    }

    pub fn districts(&self) -> impl Iterator<Item = &str> {
        self.by_district.keys().map(String::as_str)
    }

    pub fn markets(&self, district: &str) -> impl Iterator<Item = &str> {
        self.by_district
            .get(district)
            .into_iter()
            .flat_map(|m| m.iter().map(String::as_str))
    }

    pub fn contains(&self, district: &str, market: &str) -> bool {
        self.by_district
            .get(district)
            .is_some_and(|m| m.contains(market))
    }

    pub fn n_districts(&self) -> usize {
        self.by_district.len()
    }
}

/// First record matching both keys.
pub fn find<'a>(dataset: &'a Dataset, district: &str, market: &str) -> Option<&'a Record> {
    dataset
        .records
        .iter()
        .find(|r| r.district == district && r.market == market)
}

pub fn lookup<'a>(
    dataset: &'a Dataset,
    district: &str,
    market: &str,
) -> Result<&'a Record, LookupMiss> {
    find(dataset, district, market).ok_or_else(|| LookupMiss {
        district: district.to_string(),
        market: market.to_string(),
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/lookup.rs"]
mod tests;
