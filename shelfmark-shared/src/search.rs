//! State of a search controller, independent of the DOM
//!
//! The controller component owns one [`SearchState`] per page. Every change goes through here
//! and comes back as a [`QueryPlan`] telling the component what to fetch and whether to push a
//! history entry.
//!
//! History rules:
//! - a query caused by the user pushes the new URL
//! - a query caused by a `popstate` must not push (the URL is already the right one); this is
//!   guarded by a flag set in [`SearchState::apply_popstate`] and consumed by the next plan
//! - restoring a dismissed search does not push either

use crate::filter::{build_query_string, query_text_from, SearchFilter};

/// Why a query is run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryTrigger {
    /// Typing, toggling a filter, clearing filters
    UserChange,
    /// Refocusing a dismissed search
    Restore,
    /// First load of the page
    Initial,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryAction {
    Push(String),
    Skip,
}

/// Everything the component needs to run one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    /// The query string for the search endpoint (without `?`)
    pub params: String,
    pub history: HistoryAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// The path the history entries are pushed for (e.g. `/library`)
    path: String,
    filter: SearchFilter,
    default_filter: SearchFilter,
    text: String,
    /// The text of the last search dismissed by clicking outside
    last_text: Option<String>,
    /// Set while handling a `popstate`
    restoring_from_history: bool,
    collapsed: bool,
}
impl SearchState {
    pub fn new(path: &str, default_filter: SearchFilter) -> Self {
        Self {
            path: path.to_string(),
            filter: default_filter.clone(),
            default_filter,
            text: String::new(),
            last_text: None,
            restoring_from_history: false,
            collapsed: true,
        }
    }

    /// Seed the state from the query string the page was loaded with
    pub fn seed_from_query_string(&mut self, query_string: &str) {
        self.filter = SearchFilter::from_query_string(query_string, &self.default_filter);
        self.text = query_text_from(query_string);
        self.collapsed = self.text.trim().is_empty() && self.is_default();
    }

    pub fn filter(&self) -> &SearchFilter {
        &self.filter
    }

    pub fn default_filter(&self) -> &SearchFilter {
        &self.default_filter
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn is_default(&self) -> bool {
        self.filter.is_default(&self.default_filter)
    }

    /// The "clear filters" button is only shown while some filter differs from the defaults
    pub fn show_clear_filters(&self) -> bool {
        !self.is_default()
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.collapsed = false;
    }

    pub fn toggle_filter(&mut self, key: &str, value: &str) {
        self.filter.toggle(key, value);
        self.collapsed = false;
    }

    pub fn set_filter(&mut self, key: &str, value: &str) {
        self.filter.set_single(key, value);
        self.collapsed = false;
    }

    pub fn clear_filters(&mut self) {
        self.filter = self.default_filter.clone();
        self.collapsed = false;
    }

    /// The user navigated through the history; take the state from the new URL
    pub fn apply_popstate(&mut self, query_string: &str) {
        self.seed_from_query_string(query_string);
        self.restoring_from_history = true;
    }

    /// Plan the next query
    ///
    /// Consumes the popstate flag.
    pub fn plan_query(&mut self, trigger: QueryTrigger) -> QueryPlan {
        let params = build_query_string(&self.text, &self.filter);
        let from_history = std::mem::take(&mut self.restoring_from_history);
        let history = match trigger {
            QueryTrigger::UserChange if !from_history => {
                HistoryAction::Push(format!("{}?{params}", self.path))
            }
            _ => HistoryAction::Skip,
        };
        QueryPlan { params, history }
    }

    /// The user clicked outside the search; remember what was typed and collapse
    pub fn dismiss(&mut self) {
        if self.collapsed {
            return;
        }
        self.last_text = Some(std::mem::take(&mut self.text));
        self.collapsed = true;
    }

    /// The search was focused again
    ///
    /// Returns the plan for re-running the dismissed search, if there was one.
    pub fn restore(&mut self) -> Option<QueryPlan> {
        self.collapsed = false;
        let text = self.last_text.take()?;
        self.text = text;
        Some(self.plan_query(QueryTrigger::Restore))
    }
}

#[cfg(test)]
mod test;
