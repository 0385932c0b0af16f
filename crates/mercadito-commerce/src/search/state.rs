//! Search page state.

use crate::catalog::ProductSummary;

/// Phase of the in-flight search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl LoadingState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadingState::Idle => "idle",
            LoadingState::Loading => "loading",
            LoadingState::Success => "success",
            LoadingState::Error => "error",
        }
    }

    /// Whether a request is currently running.
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }
}

/// State owned by the search page: the query, its results and the
/// request phase.
///
/// Like the cart, this is explicitly owned state mutated only through
/// its setters; every setter is total. Unlike the cart it is not
/// persisted: a reload starts a fresh search.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    query: String,
    results: Vec<ProductSummary>,
    loading: LoadingState,
    error: Option<String>,
}

impl SearchState {
    /// Fresh, idle state with no query.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[ProductSummary] {
        &self.results
    }

    pub fn loading(&self) -> LoadingState {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Set the query text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Replace the result list.
    pub fn set_results(&mut self, results: Vec<ProductSummary>) {
        self.results = results;
    }

    /// Set the request phase.
    pub fn set_loading(&mut self, loading: LoadingState) {
        self.loading = loading;
    }

    /// Set or clear the error message.
    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Back to the initial state: empty query, no results, idle, no
    /// error.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::{Currency, Money};

    fn result(id: &str) -> ProductSummary {
        ProductSummary::new(
            ProductId::new(id),
            "Teclado mecánico",
            Money::new(350_000, Currency::COP),
        )
    }

    #[test]
    fn starts_idle_and_empty() {
        let state = SearchState::new();
        assert_eq!(state.query(), "");
        assert!(state.results().is_empty());
        assert_eq!(state.loading(), LoadingState::Idle);
        assert!(state.error().is_none());
    }

    #[test]
    fn setters_update_each_field_independently() {
        let mut state = SearchState::new();

        state.set_query("teclado");
        state.set_loading(LoadingState::Loading);
        assert_eq!(state.query(), "teclado");
        assert!(state.loading().is_loading());

        state.set_results(vec![result("MCO1"), result("MCO2")]);
        state.set_loading(LoadingState::Success);
        assert_eq!(state.results().len(), 2);
        assert_eq!(state.loading(), LoadingState::Success);
    }

    #[test]
    fn error_can_be_set_and_cleared() {
        let mut state = SearchState::new();
        state.set_error(Some("sin conexión".to_string()));
        assert_eq!(state.error(), Some("sin conexión"));

        state.set_error(None);
        assert!(state.error().is_none());
    }

    #[test]
    fn reset_returns_to_the_initial_state() {
        let mut state = SearchState::new();
        state.set_query("monitor");
        state.set_results(vec![result("MCO1")]);
        state.set_loading(LoadingState::Error);
        state.set_error(Some("falló".to_string()));

        state.reset();

        assert_eq!(state.query(), "");
        assert!(state.results().is_empty());
        assert_eq!(state.loading(), LoadingState::Idle);
        assert!(state.error().is_none());
    }
}
