use super::*;
use crate::filter::SearchFilter;

fn state() -> SearchState {
    SearchState::new(
        "/library/",
        SearchFilter::new()
            .with_single("sort", "popularity")
            .with_multi("genres", Vec::<String>::new()),
    )
}

#[test]
fn user_changes_push_history() {
    let mut s = state();
    s.set_text("tolkien");
    let plan = s.plan_query(QueryTrigger::UserChange);
    assert_eq!(plan.params, "q=tolkien&genres=&sort=popularity");
    assert_eq!(
        plan.history,
        HistoryAction::Push("/library/?q=tolkien&genres=&sort=popularity".to_string())
    );
}

#[test]
fn clear_filters_follows_defaults() {
    let mut s = state();
    assert!(!s.show_clear_filters());
    s.toggle_filter("genres", "Fantasy");
    assert!(s.show_clear_filters());
    s.clear_filters();
    assert!(!s.show_clear_filters());
    assert_eq!(s.filter(), s.default_filter());
}

#[test]
fn clear_filters_expands_a_collapsed_search() {
    let mut s = state();
    assert!(s.is_collapsed());
    s.clear_filters();
    assert!(!s.is_collapsed());
}

#[test]
fn popstate_restores_state_without_pushing() {
    let mut s = state();
    s.set_text("dune");
    s.toggle_filter("genres", "Science Fiction");
    s.set_filter("sort", "latest");
    let pushed = match s.plan_query(QueryTrigger::UserChange).history {
        HistoryAction::Push(url) => url,
        HistoryAction::Skip => panic!("user change must push"),
    };
    let snapshot = s.filter().clone();

    // the user keeps changing things
    s.set_text("");
    s.clear_filters();
    let _ = s.plan_query(QueryTrigger::UserChange);

    // and then goes back
    let query_string = pushed.split_once('?').map(|(_, q)| q).unwrap_or_default();
    s.apply_popstate(query_string);
    assert_eq!(s.filter(), &snapshot);
    assert_eq!(s.text(), "dune");

    let plan = s.plan_query(QueryTrigger::UserChange);
    assert_eq!(plan.history, HistoryAction::Skip);
    // the flag only covers a single query
    assert!(matches!(
        s.plan_query(QueryTrigger::UserChange).history,
        HistoryAction::Push(_)
    ));
}

#[test]
fn dismiss_and_restore() {
    let mut s = state();
    s.set_text("pratchett");
    s.dismiss();
    assert!(s.is_collapsed());
    assert_eq!(s.text(), "");

    let plan = s.restore().expect("there is something to restore");
    assert_eq!(s.text(), "pratchett");
    assert_eq!(plan.history, HistoryAction::Skip);
    assert!(plan.params.starts_with("q=pratchett"));

    // nothing left to restore
    s.dismiss();
    let _ = s.restore();
    assert!(s.restore().is_none());
}

#[test]
fn seeding_collapses_empty_searches() {
    let mut s = state();
    s.seed_from_query_string("");
    assert!(s.is_collapsed());
    s.seed_from_query_string("?q=&genres=Poetry&sort=popularity");
    assert!(!s.is_collapsed());
    assert!(s.show_clear_filters());
    assert_eq!(
        s.plan_query(QueryTrigger::Initial).history,
        HistoryAction::Skip
    );
}
