use crate::domain::{Lead, Property, PropertyStatus, Proposal};
use crate::templates::components::{button, money};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct PropertyDetailVm {
    pub property: Property,
    /// Leads that asked about this property.
    pub interested: Vec<Lead>,
    /// Every lead, for the proposal form.
    pub all_leads: Vec<Lead>,
    pub proposals: Vec<Proposal>,
}

pub fn property_detail_page(vm: &PropertyDetailVm) -> Markup {
    let p = &vm.property;

    desktop_layout(
        &p.title,
        html! {
            main class="container" {
                p { a href="/properties" { "← All properties" } }
                h1 { (p.title) }
                p class="muted" {
                    (p.address) @if !p.address.is_empty() { " · " }
                    (p.city) @if !p.state.is_empty() { ", " (p.state) }
                }

                section class="card" {
                    span class="badge" { (p.kind.label()) }
                    " "
                    span class="badge" { (p.status.label()) }
                    p class="price" { "$ " (money(p.price)) }
                    p {
                        (p.bedrooms) " bedrooms · " (p.bathrooms) " bathrooms"
                        @if let Some(area) = p.area_m2 { " · " (money(area)) " m²" }
                    }
                    @if !p.description.is_empty() {
                        p { (p.description) }
                    }

                    form class="filters" method="post" action={ "/properties/" (p.id) "/status" } {
                        label {
                            "Status"
                            select name="status" {
                                @for status in PropertyStatus::ALL {
                                    option value=(status.as_str()) selected[*status == p.status] {
                                        (status.label())
                                    }
                                }
                            }
                        }
                        (button("Update"))
                    }
                }

                section class="card" {
                    h3 { "Interested leads" }
                    @if vm.interested.is_empty() {
                        p class="muted" { "Nobody has asked about this property yet." }
                    } @else {
                        ul {
                            @for lead in &vm.interested {
                                li {
                                    (lead.name) " <" (lead.email) "> "
                                    span class="badge" { (lead.status.label()) }
                                }
                            }
                        }
                    }
                }

                section class="card" {
                    h3 { "Proposals" }
                    @for proposal in &vm.proposals {
                        p {
                            a href={ "/proposals/" (proposal.id) } { "#" (proposal.id) }
                            " · $ " (money(proposal.offered_price))
                            " · " span class="badge" { (proposal.status.label()) }
                        }
                    }
                    @if vm.all_leads.is_empty() {
                        p class="muted" { "Register a lead before drafting a proposal." }
                    } @else {
                        (proposal_form(p, &vm.all_leads, &vm.interested))
                    }
                }

                form method="post" action={ "/properties/" (p.id) "/delete" } {
                    button class="btn" type="submit" style="background:#dc2626" { "Delete property" }
                }
            }
        },
    )
}

fn proposal_form(p: &Property, leads: &[Lead], interested: &[Lead]) -> Markup {
    let preselected = interested.first().map(|l| l.id);

    html! {
        form class="filters" method="post" action="/proposals" {
            input type="hidden" name="property_id" value=(p.id);
            label {
                "Lead"
                select name="lead_id" {
                    @for lead in leads {
                        option value=(lead.id) selected[Some(lead.id) == preselected] {
                            (lead.name) " (" (lead.email) ")"
                        }
                    }
                }
            }
            label { "Offered price" input type="number" name="offered_price" min="0" step="any" value=(p.price); }
            label { "Down payment" input type="number" name="down_payment" min="0" step="any" value="0"; }
            label { "Installments" input type="number" name="installments" min="1" value="1"; }
            label { "Valid for (days)" input type="number" name="valid_days" min="0" value="30"; }
            label { "Conditions" textarea name="conditions" rows="2" {} }
            (button("Draft proposal"))
        }
    }
}
