use std::collections::HashSet;

use super::query::{QueryConfig, ALL};
use super::record::PartnerRecord;

/// Selectable filter options derived from the loaded records.
///
/// Both lists start with [`ALL`], followed by the distinct values in the
/// order they first appear in the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Facets {
    pub locations: Vec<String>,
    pub industries: Vec<String>,
}

impl Default for Facets {
    fn default() -> Self {
        Self::from_records(&[])
    }
}

impl Facets {
    pub fn from_records(records: &[PartnerRecord]) -> Self {
        Self {
            locations: distinct(records.iter().map(|r| r.location.as_str())),
            industries: distinct(records.iter().map(|r| r.industry.as_str())),
        }
    }

    pub fn has_location(&self, location: &str) -> bool {
        self.locations.iter().any(|l| l == location)
    }

    pub fn has_industry(&self, industry: &str) -> bool {
        self.industries.iter().any(|i| i == industry)
    }

    /// Resets location/industry selections that are no longer offered.
    /// Returns whether anything changed.
    pub fn reconcile(&self, config: &mut QueryConfig) -> bool {
        let mut changed = false;
        if !self.has_location(&config.location) {
            config.location = ALL.to_string();
            changed = true;
        }
        if !self.has_industry(&config.industry) {
            config.industry = ALL.to_string();
            changed = true;
        }
        changed
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::from([ALL]);
    std::iter::once(ALL)
        .chain(values.filter(|value| seen.insert(*value)))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::record::parse_records;

    fn records() -> Vec<PartnerRecord> {
        parse_records(
            r#"[
                { "id": 1, "name": "A", "industry": "Yoga", "location": "East" },
                { "id": 2, "name": "B", "industry": "Crossfit", "location": "West" },
                { "id": 3, "name": "C", "industry": "Yoga", "location": "North" },
                { "id": 4, "name": "D", "industry": "Boxing", "location": "East" }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn lists_distinct_values_in_first_seen_order() {
        let facets = Facets::from_records(&records());
        assert_eq!(facets.locations, vec!["All", "East", "West", "North"]);
        assert_eq!(facets.industries, vec!["All", "Yoga", "Crossfit", "Boxing"]);
    }

    #[test]
    fn empty_store_only_offers_all() {
        let facets = Facets::default();
        assert_eq!(facets.locations, vec!["All"]);
        assert_eq!(facets.industries, vec!["All"]);
    }

    #[test]
    fn reconcile_resets_stale_selections() {
        let facets = Facets::from_records(&records());
        let mut config = QueryConfig {
            location: "Downtown".to_string(),
            industry: "Yoga".to_string(),
            ..QueryConfig::default()
        };
        assert!(facets.reconcile(&mut config));
        assert_eq!(config.location, ALL);
        assert_eq!(config.industry, "Yoga");
        assert!(!facets.reconcile(&mut config));
    }
}
