//! CLI driver for the knowledge-base browser core.
//!
//! # Responsibility
//! - Load a knowledge-base document, resolve a view from an optional query
//!   string and print the projected view as plain text.
//! - Double as a linkage smoke check for `kbrowse_core`.

use kbrowse_core::view::{ViewBody, ViewDescription};
use kbrowse_core::{default_log_level, init_logging, MemoryHistory, Session};
use std::process::ExitCode;

/// Directory for rolling diagnostic logs; logging stays off when unset.
const LOG_DIR_ENV: &str = "KBROWSE_LOG_DIR";

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("warning: {err}");
        }
    }

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: kbrowse_cli <knowledgebase.json> [query-string]");
        eprintln!("  query-string examples: '?id=7' '?category=billing' '?search=refund'");
        return ExitCode::from(2);
    };
    let initial_url = args.next().unwrap_or_default();

    // Load failure is terminal for the session; there is no retry path.
    let kb = match kbrowse_core::load_document_file(&path) {
        Ok(kb) => kb,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let session = Session::new(kb, MemoryHistory::new(initial_url));
    print_view(&session.view());
    ExitCode::SUCCESS
}

fn print_view(description: &ViewDescription) {
    match &description.body {
        ViewBody::Categories(view) => {
            println!("Categories");
            for card in &view.cards {
                println!(
                    "  [{}] {} ({} subcategories, {} articles)",
                    card.slug, card.title, card.subcategory_count, card.article_count
                );
            }
        }
        ViewBody::ArticleList(view) => {
            println!("{} [{}]", view.category_title, view.category_slug);
            for group in &view.groups {
                println!("  {}", group.title);
                for link in &group.articles {
                    println!("    #{} {}", link.id, link.title);
                }
            }
        }
        ViewBody::ArticleDetail(view) => {
            println!("#{} {}", view.id, view.title);
            println!("{} / {}", view.category_title, view.subcategory_title);
            println!("{}", view.body_html);
            if !view.tags.is_empty() {
                println!("tags: {}", view.tags.join(", "));
            }
            if let Some(next) = &view.next_step {
                println!("next: #{} {}", next.id, next.title);
            }
        }
        ViewBody::SearchResults(view) => {
            println!("{}", view.heading);
            for hit in &view.hits {
                println!(
                    "  #{} {} ({} / {})",
                    hit.id, hit.title, hit.category_title, hit.subcategory_title
                );
            }
        }
    }
}
