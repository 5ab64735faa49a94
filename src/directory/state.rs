use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use super::facets::Facets;
use super::query::{FilterUpdate, QueryConfig, ALL};
use super::record::PartnerRecord;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum DirectoryAction {
    FetchStart,
    FetchSuccess(Vec<PartnerRecord>),
    FetchError(String),
    /// A search value that has outlived the debounce window.
    CommitSearch(String),
    SetFilter(FilterUpdate),
    ToggleView,
    Reset,
}

/// Everything the partner directory owns: the record store, the load
/// lifecycle and the user's query.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectoryState {
    pub load: LoadState,
    pub records: Rc<Vec<PartnerRecord>>,
    pub config: QueryConfig,
}

impl DirectoryState {
    pub fn facets(&self) -> Facets {
        Facets::from_records(&self.records)
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

impl Reducible for DirectoryState {
    type Action = DirectoryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DirectoryAction::FetchStart => next.load = LoadState::Loading,
            DirectoryAction::FetchSuccess(records) => {
                next.records = Rc::new(records);
                next.load = LoadState::Loaded;
                next.facets().reconcile(&mut next.config);
            }
            DirectoryAction::FetchError(message) => next.load = LoadState::Failed(message),
            DirectoryAction::CommitSearch(search) => next.config.search = search,
            DirectoryAction::SetFilter(update) => {
                let update = offered_or_all(&next.facets(), update);
                next.config.apply(update);
            }
            DirectoryAction::ToggleView => next.config.view = next.config.view.toggled(),
            DirectoryAction::Reset => next.config = QueryConfig::default(),
        }
        next.into()
    }
}

fn offered_or_all(facets: &Facets, update: FilterUpdate) -> FilterUpdate {
    match update {
        FilterUpdate::Location(location) if !facets.has_location(&location) => {
            warn!("location {:?} is not offered; showing all", location);
            FilterUpdate::Location(ALL.to_string())
        }
        FilterUpdate::Industry(industry) if !facets.has_industry(&industry) => {
            warn!("industry {:?} is not offered; showing all", industry);
            FilterUpdate::Industry(ALL.to_string())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::query::{query, SortKey, ViewMode};
    use crate::directory::record::parse_records;

    fn run(actions: Vec<DirectoryAction>) -> Rc<DirectoryState> {
        actions
            .into_iter()
            .fold(Rc::new(DirectoryState::default()), |state, action| state.reduce(action))
    }

    fn result_names(state: &DirectoryState) -> Vec<&str> {
        query(&state.records, &state.config)
            .into_iter()
            .map(|r| r.name.as_str())
            .collect()
    }

    fn gyms() -> Vec<PartnerRecord> {
        parse_records(
            r#"{ "gyms": [
                { "id": 1, "name": "Alpha", "industry": "Yoga", "location": "East", "rating": 4.2, "members": 100 },
                { "id": 2, "name": "Beta", "industry": "Crossfit", "location": "West", "rating": 4.8, "members": 50 }
            ] }"#,
        )
        .unwrap()
    }

    #[test]
    fn load_lifecycle() {
        let state = Rc::new(DirectoryState::default());
        assert_eq!(state.load, LoadState::Idle);

        let state = state.reduce(DirectoryAction::FetchStart);
        assert!(state.is_loading());

        let state = state.reduce(DirectoryAction::FetchSuccess(gyms()));
        assert_eq!(state.load, LoadState::Loaded);
        assert_eq!(state.records.len(), 2);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn failure_keeps_store_empty() {
        let state = run(vec![
            DirectoryAction::FetchStart,
            DirectoryAction::FetchError("Network error: offline".to_string()),
        ]);
        assert_eq!(state.error(), Some("Network error: offline"));
        assert!(state.records.is_empty());
        assert!(result_names(&state).is_empty());
    }

    #[test]
    fn filters_apply_immediately() {
        let state = run(vec![
            DirectoryAction::FetchSuccess(gyms()),
            DirectoryAction::SetFilter(FilterUpdate::Location("West".to_string())),
            DirectoryAction::SetFilter(FilterUpdate::SortBy(SortKey::Rating)),
        ]);
        assert_eq!(state.config.location, "West");
        assert_eq!(state.config.sort_by, SortKey::Rating);
        assert_eq!(result_names(&state), vec!["Beta"]);
    }

    #[test]
    fn unknown_facet_value_falls_back_to_all() {
        let state = run(vec![
            DirectoryAction::FetchSuccess(gyms()),
            DirectoryAction::SetFilter(FilterUpdate::Industry("Swimming".to_string())),
        ]);
        assert_eq!(state.config.industry, ALL);
    }

    #[test]
    fn reload_resets_stale_selection() {
        let state = run(vec![
            DirectoryAction::FetchSuccess(gyms()),
            DirectoryAction::SetFilter(FilterUpdate::Location("East".to_string())),
            DirectoryAction::SetFilter(FilterUpdate::Industry("Yoga".to_string())),
        ]);
        let only_beta: Vec<PartnerRecord> = gyms().into_iter().filter(|g| g.name == "Beta").collect();
        let state = state.reduce(DirectoryAction::FetchSuccess(only_beta));
        assert_eq!(state.config.location, ALL);
        assert_eq!(state.config.industry, ALL);
        assert_eq!(result_names(&state), vec!["Beta"]);
    }

    #[test]
    fn toggle_view_flips_between_cards_and_table() {
        let state = run(vec![DirectoryAction::ToggleView]);
        assert_eq!(state.config.view, ViewMode::Table);
        let state = state.reduce(DirectoryAction::ToggleView);
        assert_eq!(state.config.view, ViewMode::Cards);
    }

    #[test]
    fn reset_restores_defaults_but_keeps_records() {
        let state = run(vec![
            DirectoryAction::FetchSuccess(gyms()),
            DirectoryAction::CommitSearch("alp".to_string()),
            DirectoryAction::SetFilter(FilterUpdate::SortBy(SortKey::Name)),
            DirectoryAction::ToggleView,
            DirectoryAction::Reset,
        ]);
        assert_eq!(state.config, QueryConfig::default());
        assert_eq!(state.records.len(), 2);
        assert_eq!(state.load, LoadState::Loaded);
    }

    #[test]
    fn committed_search_filters_results() {
        let state = run(vec![
            DirectoryAction::FetchSuccess(gyms()),
            DirectoryAction::CommitSearch("cross".to_string()),
        ]);
        assert_eq!(result_names(&state), vec!["Beta"]);
    }
}
