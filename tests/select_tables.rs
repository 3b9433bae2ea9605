// tests/select_tables.rs
//
// Half-open table range selection over real pages.
//
use wiki_scrape::core::{HtmlTable, Page};
use wiki_scrape::extract::{extract_column, select_tables};

/// `n` wikitables, table i holding a single cell "t<i>".
fn page_with_tables(n: usize) -> Page {
    let mut html = String::from("<html><body>");
    for i in 0..n {
        html.push_str(&format!("<table class=wikitable><tr><td>t{i}</td></tr></table>"));
        // Noise between tables must not be picked up.
        html.push_str("<table class=infobox><tr><td>noise</td></tr></table>");
    }
    html.push_str("</body></html>");
    Page::parse(&html)
}

fn labels(tables: &[HtmlTable<'_>]) -> Vec<String> {
    tables
        .iter()
        .map(|t| extract_column(t, 0)[0].clone().unwrap_or_default())
        .collect()
}

#[test]
fn middle_of_five() {
    let page = page_with_tables(5);
    let all = page.wikitables();
    assert_eq!(all.len(), 5);
    assert_eq!(labels(select_tables(&all, 1, 3)), vec!["t1", "t2"]);
}

#[test]
fn end_past_count_takes_all() {
    let page = page_with_tables(3);
    let all = page.wikitables();
    assert_eq!(labels(select_tables(&all, 0, 100)), vec!["t0", "t1", "t2"]);
}

#[test]
fn start_past_count_is_empty() {
    let page = page_with_tables(3);
    let all = page.wikitables();
    assert!(select_tables(&all, 10, 20).is_empty());
}

#[test]
fn page_without_wikitables() {
    let page = Page::parse("<p>Just prose.</p>");
    let all = page.wikitables();
    assert!(all.is_empty());
    assert!(select_tables(&all, 0, 1).is_empty());
}
