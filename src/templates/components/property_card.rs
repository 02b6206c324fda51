use crate::domain::Property;
use crate::templates::components::money;
use maud::{html, Markup};

pub fn property_card(p: &Property, href: Option<&str>) -> Markup {
    html! {
        article class="card property" {
            span class="badge" { (p.status.label()) }
            " "
            span class="badge" { (p.kind.label()) }
            h3 {
                @if let Some(href) = href {
                    a href=(href) { (p.title) }
                } @else {
                    (p.title)
                }
            }
            p class="muted" { (p.city) @if !p.state.is_empty() { ", " (p.state) } }
            p class="price" { "$ " (money(p.price)) }
            p {
                (p.bedrooms) " bd · " (p.bathrooms) " ba"
                @if let Some(area) = p.area_m2 { " · " (money(area)) " m²" }
            }
        }
    }
}
