use condo_db::store::SharedStore;

/// State handed to every handler through `State<AppState>`.
///
/// Configuration is consumed while building the router, so only the store
/// handle needs to live here.
#[derive(Clone)]
pub struct AppState {
    /// Document store backend (PostgreSQL or in-memory).
    pub store: SharedStore,
}
