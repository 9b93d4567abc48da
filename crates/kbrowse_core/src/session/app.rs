use crate::model::article::{ArticleId, KnowledgeBase};
use crate::nav::{resolve_query, HistorySink, NavigationContext, Origin, QueryParams, ViewState};
use crate::text::extract_markdown;
use crate::view::{project, ViewDescription};
use log::{debug, warn};

/// Single-threaded application session.
///
/// All mutable state of the browser lives here: the current view, the
/// process-wide last-search query and the edit-mode flag. Every method is a
/// synchronous step triggered by one input event; there is no shared state
/// outside this object.
pub struct Session<H: HistorySink> {
    kb: KnowledgeBase,
    history: H,
    state: ViewState,
    last_search: Option<String>,
    edit_mode: bool,
}

impl<H: HistorySink> Session<H> {
    /// Starts a session over an already loaded tree, resolving the initial
    /// view from the history's current URL.
    pub fn new(kb: KnowledgeBase, history: H) -> Self {
        let params = QueryParams::parse(history.current_url());
        let state = resolve_query(&kb, &params);
        let last_search = match &state {
            ViewState::SearchResults { query, .. } => Some(query.clone()),
            _ => None,
        };
        debug!(
            "event=session_start module=session status=ok url={} articles={}",
            history.current_url(),
            kb.article_count()
        );
        Self {
            kb,
            history,
            state,
            last_search,
            edit_mode: false,
        }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn last_search(&self) -> Option<&str> {
        self.last_search.as_deref()
    }

    /// Projects the current state without transitioning.
    pub fn view(&self) -> ViewDescription {
        project(&self.kb, &self.state)
    }

    /// Categories → ArticleList: a category card was activated.
    pub fn open_category(&mut self, slug: &str) -> ViewDescription {
        let params = QueryParams {
            category: Some(slug.to_string()),
            ..QueryParams::default()
        };
        self.transition(QueryParams::category_url(slug), |session| {
            resolve_query(&session.kb, &params)
        })
    }

    /// List/SearchResults → ArticleDetail: an article link was activated.
    ///
    /// The origin is recorded from the state the link lived in, so "back"
    /// can return to the originating list or search.
    pub fn open_article(&mut self, id: ArticleId) -> ViewDescription {
        let origin_query = match &self.state {
            ViewState::SearchResults { query, .. } => Some(query.clone()),
            _ => None,
        };
        self.transition(QueryParams::article_url(id), |session| {
            match ViewState::detail(&session.kb, id) {
                Some(ViewState::ArticleDetail { mut context }) => {
                    if let Some(query) = origin_query {
                        context.origin = Origin::Search { query };
                    }
                    ViewState::ArticleDetail { context }
                }
                _ => {
                    warn!("event=lookup_miss module=session status=fallback kind=article id={id}");
                    ViewState::Categories
                }
            }
        })
    }

    /// ArticleDetail → ArticleDetail: the next-step link was followed.
    ///
    /// Always a fresh lookup by id with re-derived ancestry, never the
    /// stored context.
    pub fn follow_next_step(&mut self, id: ArticleId) -> ViewDescription {
        self.transition(QueryParams::article_url(id), |session| {
            match ViewState::detail(&session.kb, id) {
                Some(state) => state,
                None => {
                    warn!(
                        "event=lookup_miss module=session status=fallback kind=next_step id={id}"
                    );
                    ViewState::Categories
                }
            }
        })
    }

    /// ArticleDetail → previous list. Resolution order: the context's
    /// category, then the last-search variable, then categories. This chain
    /// is the only recovery path when context is incomplete.
    pub fn go_back(&mut self) -> ViewDescription {
        let browse_slug = match &self.state {
            ViewState::ArticleDetail {
                context:
                    NavigationContext {
                        origin: Origin::Browse { category_slug, .. },
                        ..
                    },
            } => Some(category_slug.clone()),
            _ => None,
        };

        if let Some(slug) = browse_slug {
            return self.open_category(&slug);
        }
        if let Some(query) = self.last_search.clone() {
            return self.transition(QueryParams::search_url(&query), |session| {
                ViewState::search_results(&session.kb, &query)
            });
        }
        self.back_to_categories()
    }

    /// Any state → SearchResults, driven by the search box.
    ///
    /// A query that is empty after trimming resets the view instead: the
    /// bare URL is pushed and re-resolved as if freshly loaded. The
    /// last-search variable survives that reset.
    pub fn submit_search(&mut self, input: &str) -> ViewDescription {
        let query = input.trim().to_lowercase();
        if query.is_empty() {
            return self.transition(QueryParams::categories_url(), |session| {
                resolve_query(&session.kb, &QueryParams::default())
            });
        }
        self.last_search = Some(query.clone());
        self.transition(QueryParams::search_url(&query), |session| {
            ViewState::search_results(&session.kb, &query)
        })
    }

    /// Any state → Categories via the explicit control.
    pub fn back_to_categories(&mut self) -> ViewDescription {
        self.transition(QueryParams::categories_url(), |_| ViewState::Categories)
    }

    /// Browser back/forward: re-derives state from the now-current URL with
    /// the initial-resolution logic. No entry is pushed.
    pub fn handle_pop_state(&mut self, url: &str) -> ViewDescription {
        self.state = resolve_query(&self.kb, &QueryParams::parse(url));
        if let ViewState::SearchResults { query, .. } = &self.state {
            self.last_search = Some(query.clone());
        }
        debug!("event=pop_state module=session status=ok url={url}");
        self.view()
    }

    /// Flips the orthogonal edit-mode flag and returns the new value.
    ///
    /// Edit mode only affects which elements an adapter marks editable; it
    /// never persists and never touches navigation state.
    pub fn toggle_edit_mode(&mut self) -> bool {
        self.edit_mode = !self.edit_mode;
        debug!(
            "event=edit_mode_toggled module=session status=ok enabled={}",
            self.edit_mode
        );
        self.edit_mode
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Converts an edited HTML fragment back to JSON-embeddable Markdown.
    ///
    /// Placing the result on a clipboard is the adapter's concern; failures
    /// there are surfaced to the user, not here.
    pub fn export_markdown(&self, html: &str) -> String {
        extract_markdown(html)
    }

    fn transition(
        &mut self,
        url: String,
        next_state: impl FnOnce(&Self) -> ViewState,
    ) -> ViewDescription {
        // Push first: each activation is a distinct history entry, also when
        // the state does not change.
        self.history.push_url(&url);
        self.state = next_state(self);
        self.view()
    }
}
