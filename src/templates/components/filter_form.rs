use crate::domain::{PropertyStatus, PropertyType};
use crate::filters::{FilterState, ALL};
use maud::{html, Markup};

const MINIMUM_OPTIONS: [u32; 6] = [0, 1, 2, 3, 4, 5];

/// GET form that drives the filter store of the page it submits to.
pub fn filter_form(action: &str, state: &FilterState) -> Markup {
    let [min_price, max_price] = state.price_range;

    html! {
        form class="filters card" method="get" action=(action) {
            label {
                "Search"
                input type="search" name="q" value=(state.search_term)
                    placeholder="Title, description, city…";
            }
            label {
                "Type"
                select name="type" {
                    option value=(ALL) selected[state.property_type == ALL] { "All types" }
                    @for kind in PropertyType::ALL {
                        option value=(kind.as_str()) selected[state.property_type == kind.as_str()] {
                            (kind.label())
                        }
                    }
                }
            }
            (minimum_select("Bedrooms", "bedrooms", state.bedrooms_min[0]))
            (minimum_select("Bathrooms", "bathrooms", state.bathrooms_min[0]))
            label {
                "Min price"
                input type="number" name="min_price" min="0" step="any" value=(min_price);
            }
            label {
                "Max price"
                input type="number" name="max_price" min="0" step="any" value=(max_price);
            }
            label {
                "Status"
                select name="status" {
                    option value=(ALL) selected[state.status == ALL] { "Any status" }
                    @for status in PropertyStatus::ALL {
                        option value=(status.as_str()) selected[state.status == status.as_str()] {
                            (status.label())
                        }
                    }
                }
            }
            button class="btn" type="submit" { "Filter" }
            a href=(action) { "Reset" }
        }
    }
}

fn minimum_select(label: &str, name: &str, current: u32) -> Markup {
    html! {
        label {
            (label)
            select name=(name) {
                @for n in MINIMUM_OPTIONS {
                    option value=(n) selected[current == n] {
                        @if n == 0 { "Any" } @else { (n) "+" }
                    }
                }
            }
        }
    }
}
