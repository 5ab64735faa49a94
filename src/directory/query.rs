use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::collate::collation_key;
use super::record::PartnerRecord;

/// Facet value meaning "no filter".
pub const ALL: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown option `{0}`")]
pub struct UnknownOption(pub String);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    Relevance,
    Rating,
    Members,
    Name,
}

impl SortKey {
    pub const OPTIONS: [SortKey; 4] = [
        SortKey::Relevance,
        SortKey::Rating,
        SortKey::Members,
        SortKey::Name,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Rating => "rating",
            SortKey::Members => "members",
            SortKey::Name => "name",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::Rating => "Top Rated",
            SortKey::Members => "Most Members",
            SortKey::Name => "Name (A-Z)",
        }
    }
}

impl FromStr for SortKey {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::OPTIONS
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    #[default]
    Cards,
    Table,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Cards => ViewMode::Table,
            ViewMode::Table => ViewMode::Cards,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Cards => "cards",
            ViewMode::Table => "table",
        }
    }
}

impl FromStr for ViewMode {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cards" => Ok(ViewMode::Cards),
            "table" => Ok(ViewMode::Table),
            other => Err(UnknownOption(other.to_string())),
        }
    }
}

/// The immediate (non-debounced) settings a user can change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterUpdate {
    Location(String),
    Industry(String),
    SortBy(SortKey),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryConfig {
    pub search: String,
    pub location: String,
    pub industry: String,
    pub sort_by: SortKey,
    pub view: ViewMode,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            search: String::new(),
            location: ALL.to_string(),
            industry: ALL.to_string(),
            sort_by: SortKey::default(),
            view: ViewMode::default(),
        }
    }
}

impl QueryConfig {
    pub fn apply(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::Location(location) => self.location = location,
            FilterUpdate::Industry(industry) => self.industry = industry,
            FilterUpdate::SortBy(sort_by) => self.sort_by = sort_by,
        }
    }
}

/// Filters and orders `records` for display.
///
/// Filtering keeps the store order; sorting is stable so ties stay in that
/// order too. `Relevance` leaves the filtered list as it is.
pub fn query<'a>(records: &'a [PartnerRecord], config: &QueryConfig) -> Vec<&'a PartnerRecord> {
    let needle = config.search.trim().to_lowercase();
    let mut list: Vec<&PartnerRecord> = records
        .iter()
        .filter(|record| matches(record, &needle, config))
        .collect();

    match config.sort_by {
        SortKey::Relevance => {}
        SortKey::Rating => list.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Members => list.sort_by(|a, b| b.members.cmp(&a.members)),
        SortKey::Name => list.sort_by_cached_key(|record| collation_key(&record.name)),
    }
    list
}

/// `needle` must already be trimmed and lower-cased.
pub fn matches(record: &PartnerRecord, needle: &str, config: &QueryConfig) -> bool {
    let search = needle.is_empty()
        || record.name.to_lowercase().contains(needle)
        || record.industry.to_lowercase().contains(needle);
    let location = config.location == ALL || record.location == config.location;
    let industry = config.industry == ALL || record.industry == config.industry;
    search && location && industry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::record::PartnerId;

    fn record(id: i64, name: &str, industry: &str, location: &str, rating: f64, members: u64) -> PartnerRecord {
        PartnerRecord {
            id: PartnerId::Number(id),
            name: name.to_string(),
            industry: industry.to_string(),
            location: location.to_string(),
            rating,
            members,
            email: String::new(),
            phone: String::new(),
            website: String::new(),
        }
    }

    fn alpha_beta() -> Vec<PartnerRecord> {
        vec![
            record(1, "Alpha", "Yoga", "East", 4.2, 100),
            record(2, "Beta", "Crossfit", "West", 4.8, 50),
        ]
    }

    fn sample() -> Vec<PartnerRecord> {
        vec![
            record(1, "Iron Temple", "Strength", "Kokapet", 4.6, 1200),
            record(2, "Flow Studio", "Yoga", "Gachibowli", 4.9, 300),
            record(3, "Pulse Box", "Crossfit", "Kokapet", 4.6, 450),
            record(4, "zen den", "Yoga", "Kondapur", 0.0, 0),
            record(5, "Apex Athletics", "Strength", "Gachibowli", 4.1, 450),
            record(6, "Core Yoga Lab", "Pilates", "Kokapet", 4.6, 800),
        ]
    }

    fn names(list: &[&PartnerRecord]) -> Vec<String> {
        list.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn default_config_is_identity() {
        let records = sample();
        let result = query(&records, &QueryConfig::default());
        let expected: Vec<&PartnerRecord> = records.iter().collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn members_sort_scenario() {
        let records = alpha_beta();
        let config = QueryConfig {
            sort_by: SortKey::Members,
            ..QueryConfig::default()
        };
        assert_eq!(names(&query(&records, &config)), vec!["Alpha", "Beta"]);
    }

    #[test]
    fn search_matches_industry_substring() {
        let records = alpha_beta();
        let config = QueryConfig {
            search: "cross".to_string(),
            ..QueryConfig::default()
        };
        assert_eq!(names(&query(&records, &config)), vec!["Beta"]);
    }

    #[test]
    fn search_is_trimmed_and_case_insensitive() {
        let records = sample();
        let config = QueryConfig {
            search: "  YOGA ".to_string(),
            ..QueryConfig::default()
        };
        assert_eq!(
            names(&query(&records, &config)),
            vec!["Flow Studio", "zen den", "Core Yoga Lab"]
        );
    }

    #[test]
    fn rating_sort_is_non_increasing_and_stable() {
        let records = sample();
        let config = QueryConfig {
            sort_by: SortKey::Rating,
            ..QueryConfig::default()
        };
        let result = query(&records, &config);
        assert!(result.windows(2).all(|w| w[0].rating >= w[1].rating));
        // three records tie at 4.6 and must keep store order
        assert_eq!(
            names(&result),
            vec!["Flow Studio", "Iron Temple", "Pulse Box", "Core Yoga Lab", "Apex Athletics", "zen den"]
        );
    }

    #[test]
    fn members_sort_keeps_ties_in_store_order() {
        let records = sample();
        let config = QueryConfig {
            sort_by: SortKey::Members,
            ..QueryConfig::default()
        };
        assert_eq!(
            names(&query(&records, &config)),
            vec!["Iron Temple", "Core Yoga Lab", "Pulse Box", "Apex Athletics", "Flow Studio", "zen den"]
        );
    }

    #[test]
    fn name_sort_ignores_case() {
        let records = sample();
        let config = QueryConfig {
            sort_by: SortKey::Name,
            ..QueryConfig::default()
        };
        assert_eq!(
            names(&query(&records, &config)),
            vec!["Apex Athletics", "Core Yoga Lab", "Flow Studio", "Iron Temple", "Pulse Box", "zen den"]
        );
    }

    #[test]
    fn filters_combine() {
        let records = sample();
        let config = QueryConfig {
            location: "Kokapet".to_string(),
            industry: "Strength".to_string(),
            ..QueryConfig::default()
        };
        assert_eq!(names(&query(&records, &config)), vec!["Iron Temple"]);
    }

    #[test]
    fn every_record_is_either_included_or_fails_a_predicate() {
        let records = sample();
        let configs = [
            QueryConfig {
                search: "o".to_string(),
                location: "Kokapet".to_string(),
                ..QueryConfig::default()
            },
            QueryConfig {
                industry: "Yoga".to_string(),
                sort_by: SortKey::Name,
                ..QueryConfig::default()
            },
            QueryConfig {
                search: "box".to_string(),
                ..QueryConfig::default()
            },
        ];
        for config in &configs {
            let result = query(&records, config);
            let needle = config.search.trim().to_lowercase();
            for record in &records {
                let included = result.iter().any(|r| r.id == record.id);
                assert_eq!(included, matches(record, &needle, config), "{}", record.name);
            }
        }
    }

    #[test]
    fn no_matches_is_an_empty_list() {
        let records = sample();
        let config = QueryConfig {
            search: "swimming".to_string(),
            ..QueryConfig::default()
        };
        assert!(query(&records, &config).is_empty());
        assert!(query(&[], &QueryConfig::default()).is_empty());
    }

    #[test]
    fn repeated_queries_agree() {
        let records = sample();
        let config = QueryConfig {
            search: "a".to_string(),
            sort_by: SortKey::Rating,
            ..QueryConfig::default()
        };
        assert_eq!(query(&records, &config), query(&records, &config));
    }

    #[test]
    fn option_strings_round_trip_through_select_values() {
        for key in SortKey::OPTIONS {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }
        assert_eq!("popular".parse::<SortKey>(), Err(UnknownOption("popular".to_string())));
        assert_eq!("table".parse::<ViewMode>(), Ok(ViewMode::Table));
        assert_eq!(ViewMode::Cards.toggled(), ViewMode::Table);
        assert_eq!(ViewMode::Table.toggled(), ViewMode::Cards);
    }

    #[test]
    fn apply_updates_one_field() {
        let mut config = QueryConfig::default();
        config.apply(FilterUpdate::SortBy(SortKey::Name));
        config.apply(FilterUpdate::Location("Kokapet".to_string()));
        assert_eq!(config.sort_by, SortKey::Name);
        assert_eq!(config.location, "Kokapet");
        assert_eq!(config.industry, ALL);
        assert_ne!(config, QueryConfig::default());
    }
}
