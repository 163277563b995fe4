//! Data-sourcing strategies
//!
//! Both strategies feed the same autocomplete state; they differ only in
//! when the network is consulted and where filtering reads from.

use super::FetchQuery;
use crate::autocomplete::SuggestionMatcher;
use crate::config::StrategyKind;
use crate::suggestion::Suggestion;

/// How an input change should be answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Ask the endpoint
    Remote(FetchQuery),
    /// Answer from the local cache
    Local(Vec<Suggestion>),
    /// Cache not loaded (yet); nothing to show
    Pending,
}

#[derive(Debug, Clone)]
pub enum Strategy {
    LiveQuery,
    Preload { cache: Option<Vec<Suggestion>> },
}

impl Strategy {
    pub fn new(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::Live => Strategy::LiveQuery,
            StrategyKind::Preload => Strategy::Preload { cache: None },
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::LiveQuery => StrategyKind::Live,
            Strategy::Preload { .. } => StrategyKind::Preload,
        }
    }

    /// The one fetch issued when the widget mounts
    pub fn mount_query(&self) -> Option<FetchQuery> {
        match self {
            Strategy::LiveQuery => None,
            Strategy::Preload { .. } => Some(FetchQuery::All),
        }
    }

    /// Decide how to answer a non-empty input
    pub fn lookup(&self, input: &str) -> Lookup {
        match self {
            Strategy::LiveQuery => Lookup::Remote(FetchQuery::Matching(input.to_string())),
            Strategy::Preload { cache: Some(cache) } => {
                Lookup::Local(SuggestionMatcher::filter(cache, input))
            }
            Strategy::Preload { cache: None } => Lookup::Pending,
        }
    }

    /// Take a successful fetch and return the candidates to display
    ///
    /// Live-query filters by the query that was sent; preload caches the
    /// full set and filters it by the input as it stands now.
    pub fn absorb(
        &mut self,
        query: &FetchQuery,
        fetched: Vec<Suggestion>,
        input: &str,
    ) -> Vec<Suggestion> {
        match self {
            Strategy::LiveQuery => match query {
                FetchQuery::Matching(q) => SuggestionMatcher::filter(&fetched, q),
                FetchQuery::All => SuggestionMatcher::filter(&fetched, input),
            },
            Strategy::Preload { cache } => {
                let filtered = SuggestionMatcher::filter(&fetched, input);
                *cache = Some(fetched);
                filtered
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Vec<Suggestion> {
        vec![
            Suggestion::new(1, "Margo"),
            Suggestion::new(2, "Mark"),
            Suggestion::new(3, "Bob"),
        ]
    }

    #[test]
    fn test_live_query_always_goes_remote() {
        let strategy = Strategy::new(StrategyKind::Live);
        assert_eq!(strategy.mount_query(), None);
        assert_eq!(
            strategy.lookup("mar"),
            Lookup::Remote(FetchQuery::Matching("mar".to_string()))
        );
    }

    #[test]
    fn test_preload_fetches_everything_at_mount() {
        let strategy = Strategy::new(StrategyKind::Preload);
        assert_eq!(strategy.mount_query(), Some(FetchQuery::All));
        assert_eq!(strategy.lookup("mar"), Lookup::Pending);
    }

    #[test]
    fn test_preload_answers_locally_once_cached() {
        let mut strategy = Strategy::new(StrategyKind::Preload);
        strategy.absorb(&FetchQuery::All, people(), "");

        match strategy.lookup("MAR") {
            Lookup::Local(found) => assert_eq!(found.len(), 2),
            other => panic!("expected local lookup, got {:?}", other),
        }
    }

    #[test]
    fn test_preload_absorb_filters_by_current_input() {
        let mut strategy = Strategy::new(StrategyKind::Preload);
        let shown = strategy.absorb(&FetchQuery::All, people(), "bo");
        assert_eq!(shown, vec![Suggestion::new(3, "Bob")]);
    }

    #[test]
    fn test_live_absorb_filters_by_sent_query() {
        let mut strategy = Strategy::new(StrategyKind::Live);
        let shown = strategy.absorb(
            &FetchQuery::Matching("mar".to_string()),
            people(),
            "mar",
        );
        assert_eq!(shown.len(), 2);
        assert!(shown.iter().all(|s| s.name.to_lowercase().contains("mar")));
    }

    #[test]
    fn test_kind_round_trips() {
        assert_eq!(Strategy::new(StrategyKind::Live).kind(), StrategyKind::Live);
        assert_eq!(
            Strategy::new(StrategyKind::Preload).kind(),
            StrategyKind::Preload
        );
    }
}
