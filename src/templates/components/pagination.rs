use crate::filters::{FilterQuery, Page};
use maud::{html, Markup};

/// Prev/next links that keep the active filters in the query string.
pub fn pagination<T>(page: &Page<'_, T>, base_path: &str, query: &FilterQuery) -> Markup {
    let link = |n: usize| format!("{base_path}?{}", query.with_page(n).to_query_string());

    html! {
        nav class="pagination" {
            @if page.has_prev() {
                a href=(link(page.number - 1)) rel="prev" { "← Previous" }
            }
            span class="muted" {
                "Page " (page.number) " of " (page.total_pages)
                " · " (page.total) " properties"
            }
            @if page.has_next() {
                a href=(link(page.number + 1)) rel="next" { "Next →" }
            }
        }
    }
}
