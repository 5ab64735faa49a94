//! Partner directory: record store, query engine, facets and loading.

pub mod collate;
pub mod debounce;
pub mod error;
pub mod facets;
pub mod loader;
pub mod query;
pub mod record;
pub mod state;

pub use debounce::{Debouncer, SEARCH_DEBOUNCE_MS};
pub use facets::Facets;
pub use loader::{HttpRecordSource, LoadController};
pub use query::{query, FilterUpdate, QueryConfig, SortKey, ViewMode};
pub use record::PartnerRecord;
pub use state::{DirectoryAction, DirectoryState, LoadState};
