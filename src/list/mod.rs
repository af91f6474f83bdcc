//! Paginated resource lists: state, filters, pagination and debounced search.

pub mod controller;
pub mod debounce;
pub mod filters;
pub mod pagination;
pub mod search;
pub mod state;

pub use controller::{ListController, LoadOutcome};
pub use debounce::Debouncer;
pub use filters::Filters;
pub use pagination::Pagination;
pub use search::SearchBox;
pub use state::ListState;
