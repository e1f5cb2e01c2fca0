//! Tests for widget and search-type resolution.

use super::*;
use crate::model::Direction;
use crate::test_harness::{message_widget, query, widget, ViewFixture};

fn wid(id: &str) -> WidgetId {
    WidgetId::new(id).unwrap()
}

#[test]
fn message_widgets_skips_other_widget_types() {
    let view = ViewFixture::search()
        .with_query(query("q1", &["st1", "st2"]))
        .with_state("q1")
        .with_widget(message_widget("w1", &["message"], &[]), "st1")
        .with_widget(widget("chart", "aggregation"), "st2")
        .build();

    let ids: Vec<&str> = message_widgets(&view).iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["w1"]);
}

#[test]
fn message_widgets_spans_all_view_states_in_order() {
    let view = ViewFixture::dashboard()
        .with_query(query("q1", &["st1"]))
        .with_query(query("q2", &["st2"]))
        .with_state("q1")
        .with_widget(message_widget("w1", &[], &[]), "st1")
        .with_state("q2")
        .with_widget(message_widget("w2", &[], &[]), "st2")
        .build();

    let ids: Vec<&str> = message_widgets(&view).iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["w1", "w2"]);
}

#[test]
fn message_widgets_later_duplicate_replaces_in_place() {
    let view = ViewFixture::dashboard()
        .with_state("q1")
        .with_widget(message_widget("w1", &["old"], &[]), "st1")
        .with_widget(message_widget("w2", &[], &[]), "st2")
        .with_state("q2")
        .with_widget(message_widget("w1", &["new"], &[]), "st1")
        .build();

    let widgets = message_widgets(&view);
    assert_eq!(widgets.len(), 2);
    assert_eq!(widgets[0].id.as_str(), "w1");
    assert_eq!(widgets[0].config.fields, vec!["new"]);
    assert_eq!(widgets[1].id.as_str(), "w2");
}

#[test]
fn widget_titles_merges_states_with_later_winning() {
    let view = ViewFixture::dashboard()
        .with_state("q1")
        .with_title("w1", "First")
        .with_title("w2", "Second")
        .with_state("q2")
        .with_title("w1", "Renamed")
        .build();

    let titles = widget_titles(&view);
    assert_eq!(titles.len(), 2);
    assert_eq!(titles[&wid("w1")], "Renamed");
    assert_eq!(titles[&wid("w2")], "Second");
}

#[test]
fn widget_option_uses_title_when_present() {
    let w = message_widget("w1", &[], &[]);
    let titles = HashMap::from([(wid("w1"), "Error messages".to_string())]);

    let option = widget_option(&w, &titles);
    assert_eq!(option.label, "Error messages");
    assert_eq!(option.widget_id, wid("w1"));
}

#[test]
fn widget_option_falls_back_for_missing_or_empty_title() {
    let w = message_widget("w1", &[], &[]);
    assert_eq!(widget_option(&w, &HashMap::new()).label, UNTITLED_WIDGET_LABEL);

    let titles = HashMap::from([(wid("w1"), String::new())]);
    assert_eq!(widget_option(&w, &titles).label, UNTITLED_WIDGET_LABEL);
}

#[test]
fn resolve_search_type_finds_mapped_search_type() {
    let w2 = message_widget("w2", &["message"], &[("timestamp", Direction::Descending)]);
    let view = ViewFixture::dashboard()
        .with_query(query("q1", &["st1"]))
        .with_query(query("q2", &["st2"]))
        .with_state("q1")
        .with_widget(message_widget("w1", &[], &[]), "st1")
        .with_state("q2")
        .with_widget(w2.clone(), "st2")
        .build();

    let resolved = resolve_search_type(&view, Some(&w2)).expect("search type should resolve");
    assert_eq!(resolved.id.as_str(), "st2");
}

#[test]
fn resolve_search_type_without_selection_is_none() {
    let view = ViewFixture::search()
        .with_query(query("q1", &["st1"]))
        .with_state("q1")
        .with_widget(message_widget("w1", &[], &[]), "st1")
        .build();

    assert!(resolve_search_type(&view, None).is_none());
}

#[test]
fn resolve_search_type_unmapped_widget_is_none() {
    let w1 = message_widget("w1", &[], &[]);
    let view = ViewFixture::search()
        .with_query(query("q1", &["st1"]))
        .with_state("q1")
        .with_unmapped_widget(w1.clone())
        .build();

    assert!(resolve_search_type(&view, Some(&w1)).is_none());
}

#[test]
fn resolve_search_type_dangling_mapping_is_none() {
    let w1 = message_widget("w1", &[], &[]);
    let view = ViewFixture::search()
        .with_query(query("q1", &["st1"]))
        .with_state("q1")
        .with_widget(w1.clone(), "st-missing")
        .build();

    assert!(resolve_search_type(&view, Some(&w1)).is_none());
}
