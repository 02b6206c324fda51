// templates/pages/catalog.rs
//! The page a visitor sees behind a share link.

use crate::domain::Property;
use crate::filters::{FilterQuery, FilterState, Page};
use crate::sharing::SHARE_PATH;
use crate::templates::components::{button, filter_form, pagination, property_card};
use crate::templates::layouts::public::public_layout;
use maud::{html, Markup};

pub struct CatalogVm<'a> {
    pub token: &'a str,
    pub label: &'a str,
    pub state: &'a FilterState,
    pub page: Page<'a, Property>,
    pub query: FilterQuery,
    /// Set after an inquiry was recorded.
    pub inquiry_sent: bool,
}

pub fn catalog_page(vm: &CatalogVm<'_>) -> Markup {
    let base = format!("{SHARE_PATH}/{}", vm.token);

    public_layout(
        vm.label,
        html! {
            main class="container" {
                @if vm.inquiry_sent {
                    section class="card" style="border-color:#10b981" {
                        p { "Thanks! An agent will get in touch shortly." }
                    }
                }

                (filter_form(&base, vm.state))

                @if vm.page.items.is_empty() {
                    p class="muted" { "No properties match these filters." }
                } @else {
                    div class="grid" {
                        @for p in vm.page.items {
                            div {
                                (property_card(p, None))
                                (inquiry_form(&base, p))
                            }
                        }
                    }
                }

                (pagination(&vm.page, &base, &vm.query))
            }
        },
    )
}

fn inquiry_form(base: &str, p: &Property) -> Markup {
    html! {
        details class="card" {
            summary { "I'm interested" }
            form method="post" action={ (base) "/inquiry" } {
                input type="hidden" name="property_id" value=(p.id);
                p { label { "Name " input type="text" name="name" required; } }
                p { label { "Email " input type="email" name="email" required; } }
                p { label { "Phone " input type="tel" name="phone"; } }
                p { label { "Message " textarea name="message" rows="2" {} } }
                (button("Send"))
            }
        }
    }
}
