// templates/pages/properties.rs

use crate::domain::{Property, PropertyStatus, PropertyType};
use crate::filters::{FilterQuery, FilterState, Page};
use crate::templates::components::{button, filter_form, pagination, property_card};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct PropertiesVm<'a> {
    pub state: &'a FilterState,
    pub page: Page<'a, Property>,
    /// Active filters, without the page number.
    pub query: FilterQuery,
    pub backend_enabled: bool,
}

pub fn properties_page(vm: &PropertiesVm<'_>) -> Markup {
    let export_href = match vm.query.to_query_string() {
        q if q.is_empty() => "/properties/export".to_string(),
        q => format!("/properties/export?{q}"),
    };

    desktop_layout(
        "Properties",
        html! {
            main class="container" {
                h1 { "Properties" }

                (filter_form("/properties", vm.state))

                div class="pagination" {
                    a href=(export_href) { "Export filtered list (.xlsx)" }
                    @if vm.backend_enabled {
                        form method="post" action="/properties/sync" {
                            (button("Sync from backend"))
                        }
                    }
                }

                @if vm.page.items.is_empty() {
                    p class="muted" { "No properties match these filters." }
                } @else {
                    div class="grid" {
                        @for p in vm.page.items {
                            (property_card(p, Some(format!("/properties/{}", p.id).as_str())))
                        }
                    }
                }

                (pagination(&vm.page, "/properties", &vm.query))

                (new_property_form())
            }
        },
    )
}

fn new_property_form() -> Markup {
    html! {
        section class="card" id="new-property" {
            h3 { "Register a property" }
            form class="filters" method="post" action="/properties" {
                label { "Title" input type="text" name="title" required; }
                label { "Address" input type="text" name="address"; }
                label { "City" input type="text" name="city" required; }
                label { "State" input type="text" name="state"; }
                label {
                    "Type"
                    select name="type" {
                        @for kind in PropertyType::ALL {
                            option value=(kind.as_str()) { (kind.label()) }
                        }
                    }
                }
                label {
                    "Status"
                    select name="status" {
                        @for status in PropertyStatus::ALL {
                            option value=(status.as_str()) { (status.label()) }
                        }
                    }
                }
                label { "Bedrooms" input type="number" name="bedrooms" min="0" value="0"; }
                label { "Bathrooms" input type="number" name="bathrooms" min="0" value="0"; }
                label { "Price" input type="number" name="price" min="0" step="any" required; }
                label { "Area (m²)" input type="number" name="area_m2" min="0" step="any"; }
                label { "Description" textarea name="description" rows="2" {} }
                (button("Save"))
            }
        }
    }
}
