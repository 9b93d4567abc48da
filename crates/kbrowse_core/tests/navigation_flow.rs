use kbrowse_core::view::{ViewBody, ViewDescription};
use kbrowse_core::{
    load_document_str, HistorySink, KnowledgeBase, MemoryHistory, Origin, Session, ViewState,
};

const DOC: &str = r#"[
    {
        "title": "Billing",
        "slug": "billing",
        "subcategories": [
            {
                "title": "Refunds",
                "slug": "refunds",
                "articles": [
                    {
                        "id": 7,
                        "title": "Refund policy",
                        "content": "Hello **world**\nSecond line",
                        "tags": ["refund"],
                        "nextStep": 8
                    },
                    {
                        "id": 8,
                        "title": "Refund timelines",
                        "content": "Processing takes two days.",
                        "tags": ["refund"],
                        "nextStep": 999
                    }
                ]
            }
        ]
    },
    {
        "title": "Accounts",
        "slug": "accounts",
        "subcategories": [
            {
                "title": "Login",
                "slug": "login",
                "articles": [
                    {
                        "id": 20,
                        "title": "Resetting your password",
                        "content": "Use the reset link.",
                        "tags": ["password"]
                    }
                ]
            }
        ]
    }
]"#;

fn kb() -> KnowledgeBase {
    load_document_str(DOC).expect("fixture document should load")
}

fn session_at(url: &str) -> Session<MemoryHistory> {
    Session::new(kb(), MemoryHistory::new(url))
}

fn detail_id(description: &ViewDescription) -> Option<u64> {
    match &description.body {
        ViewBody::ArticleDetail(view) => Some(view.id),
        _ => None,
    }
}

#[test]
fn initial_url_with_id_opens_detail_and_back_returns_to_category_list() {
    let mut session = session_at("?id=7");
    let ViewState::ArticleDetail { context } = session.state() else {
        panic!("expected detail state");
    };
    assert_eq!(context.article_id, 7);

    let description = session.go_back();
    assert_eq!(session.history().current_url(), "?category=billing");
    let ViewBody::ArticleList(view) = description.body else {
        panic!("expected article list after back");
    };
    assert_eq!(view.category_slug, "billing");
}

#[test]
fn initial_url_with_unknown_id_falls_back_to_categories() {
    let session = session_at("?id=999");
    assert_eq!(session.state(), &ViewState::Categories);
    assert!(matches!(session.view().body, ViewBody::Categories(_)));
}

#[test]
fn initial_url_priority_prefers_id_over_category_and_search() {
    let session = session_at("index.html?id=20&category=billing&search=refund");
    let ViewState::ArticleDetail { context } = session.state() else {
        panic!("expected detail state");
    };
    assert_eq!(context.article_id, 20);
}

#[test]
fn category_click_pushes_url_and_lists_articles() {
    let mut session = session_at("");
    let description = session.open_category("billing");
    assert_eq!(session.history().current_url(), "?category=billing");
    assert!(description.back_to_categories_visible);
    let ViewBody::ArticleList(view) = description.body else {
        panic!("expected article list");
    };
    assert_eq!(view.groups.len(), 1);
    assert_eq!(view.groups[0].articles.len(), 2);
}

#[test]
fn search_matches_tags_and_formats_heading() {
    let mut session = session_at("");
    let description = session.submit_search("Refund");
    assert_eq!(session.history().current_url(), "?search=refund");
    let ViewBody::SearchResults(view) = description.body else {
        panic!("expected search results");
    };
    assert_eq!(view.heading, "Search Results for \"refund\" (2 found)");
    let ids: Vec<u64> = view.hits.iter().map(|hit| hit.id).collect();
    assert_eq!(ids, vec![7, 8]);
}

#[test]
fn empty_search_input_resets_to_bare_url_view() {
    let mut session = session_at("");
    session.submit_search("refund");
    let description = session.submit_search("   ");
    assert_eq!(session.history().current_url(), "");
    assert!(matches!(description.body, ViewBody::Categories(_)));
    // The process-wide last-search variable survives the reset.
    assert_eq!(session.last_search(), Some("refund"));
}

#[test]
fn article_opened_from_search_goes_back_via_last_search() {
    let mut session = session_at("");
    session.submit_search("refund");
    let description = session.open_article(7);
    assert_eq!(session.history().current_url(), "?id=7");
    assert_eq!(detail_id(&description), Some(7));
    let ViewState::ArticleDetail { context } = session.state() else {
        panic!("expected detail state");
    };
    assert_eq!(
        context.origin,
        Origin::Search {
            query: "refund".to_string()
        }
    );

    let description = session.go_back();
    assert_eq!(session.history().current_url(), "?search=refund");
    let ViewBody::SearchResults(view) = description.body else {
        panic!("expected search results after back");
    };
    assert_eq!(view.hits.len(), 2);
}

#[test]
fn next_step_renders_fresh_detail_and_dangling_reference_is_omitted() {
    let mut session = session_at("?id=7");
    let description = session.view();
    let ViewBody::ArticleDetail(view) = description.body else {
        panic!("expected detail body");
    };
    assert_eq!(view.next_step.as_ref().map(|link| link.id), Some(8));

    let description = session.follow_next_step(8);
    assert_eq!(session.history().current_url(), "?id=8");
    let ViewBody::ArticleDetail(view) = description.body else {
        panic!("expected detail body");
    };
    assert_eq!(view.id, 8);
    // Article 8 points at id 999, which does not exist.
    assert!(view.next_step.is_none());
}

#[test]
fn every_transition_pushes_a_distinct_history_entry() {
    let mut session = session_at("");
    session.open_category("billing");
    session.open_category("billing");
    session.back_to_categories();
    assert_eq!(
        session.history().entries(),
        &[
            "".to_string(),
            "?category=billing".to_string(),
            "?category=billing".to_string(),
            "".to_string(),
        ]
    );
}

#[test]
fn pop_state_reconstructs_view_from_url_alone() {
    let mut session = session_at("");
    session.open_category("accounts");
    session.open_article(20);

    // Simulate browser back twice, feeding each now-current URL to the
    // popstate handler.
    let mut history = session.history().clone();
    let url = history.back().expect("one entry back").to_string();
    let description = session.handle_pop_state(&url);
    let ViewBody::ArticleList(view) = description.body else {
        panic!("expected article list after popstate");
    };
    assert_eq!(view.category_slug, "accounts");

    let url = history.back().expect("two entries back").to_string();
    let description = session.handle_pop_state(&url);
    assert!(matches!(description.body, ViewBody::Categories(_)));
}

#[test]
fn edit_mode_is_orthogonal_to_navigation() {
    let mut session = session_at("");
    assert!(!session.edit_mode());
    assert!(session.toggle_edit_mode());
    session.open_category("billing");
    session.back_to_categories();
    assert!(session.edit_mode());
    assert!(!session.toggle_edit_mode());
}

#[test]
fn export_markdown_round_trips_displayed_content() {
    let session = session_at("?id=7");
    let ViewBody::ArticleDetail(view) = session.view().body else {
        panic!("expected detail body");
    };
    assert_eq!(view.body_html, "Hello <strong>world</strong><br>Second line");
    assert_eq!(
        session.export_markdown(&view.body_html),
        r"Hello **world**\nSecond line"
    );
}
