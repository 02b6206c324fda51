use crate::db::catalogs::CatalogLinkRow;
use crate::domain::{PropertyStatus, PropertyType};
use crate::sharing::IssuedShareLink;
use crate::templates::components::{button, date};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Internal page listing shared catalogs. `issued` is only set on the response to
/// the POST that created it, the raw token is not shown again.
pub fn catalog_links_page(links: &[CatalogLinkRow], issued: Option<&IssuedShareLink>) -> Markup {
    desktop_layout(
        "Shared catalogs",
        html! {
            main class="container" {
                h1 { "Shared catalogs" }

                @if let Some(link) = issued {
                    section class="card" style="border-color:#10b981" {
                        h3 { "Link for “" (link.label) "” created" }
                        p { "Copy it now, it will not be shown again:" }
                        p { code { (link.url) } }
                    }
                }

                section class="card" {
                    @if links.is_empty() {
                        p class="muted" { "No catalog has been shared yet." }
                    } @else {
                        table {
                            thead { tr { th { "Label" } th { "Created" } th { "Preset" } th { "Status" } th {} } }
                            tbody {
                                @for link in links {
                                    tr {
                                        td { (link.label) }
                                        td { (date(link.created_at)) }
                                        td { code { (link.preset) } }
                                        @if link.revoked_at.is_some() {
                                            td { span class="badge" { "Revoked" } }
                                            td {}
                                        } @else {
                                            td { span class="badge" { "Active" } }
                                            td {
                                                form method="post" action={ "/catalog/links/" (link.id) "/revoke" } {
                                                    (button("Revoke"))
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                (issue_form())
            }
        },
    )
}

fn issue_form() -> Markup {
    html! {
        section class="card" {
            h3 { "Share a catalog" }
            p class="muted" { "Visitors start from these filters and can narrow them further." }
            form class="filters" method="post" action="/catalog/links" {
                label { "Label" input type="text" name="label" required placeholder="Beach houses for the Silva family"; }
                label { "Search" input type="search" name="q"; }
                label {
                    "Type"
                    select name="type" {
                        option value="" { "Any" }
                        @for kind in PropertyType::ALL {
                            option value=(kind.as_str()) { (kind.label()) }
                        }
                    }
                }
                label { "Min bedrooms" input type="number" name="bedrooms" min="0"; }
                label { "Min bathrooms" input type="number" name="bathrooms" min="0"; }
                label { "Min price" input type="number" name="min_price" min="0" step="any"; }
                label { "Max price" input type="number" name="max_price" min="0" step="any"; }
                label {
                    "Status"
                    select name="status" {
                        option value="" { "Any" }
                        @for status in PropertyStatus::ALL {
                            @if status.is_publicly_listed() {
                                option value=(status.as_str()) { (status.label()) }
                            }
                        }
                    }
                }
                (button("Create link"))
            }
        }
    }
}
