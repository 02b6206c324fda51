// templates/pages/proposals.rs

use crate::domain::{Lead, Property, Proposal, ProposalStatus};
use crate::templates::components::{card, date, money};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn proposals_page(proposals: &[Proposal]) -> Markup {
    desktop_layout(
        "Proposals",
        html! {
            main class="container" {
                h1 { "Proposals" }
                section class="card" {
                    @if proposals.is_empty() {
                        p class="muted" { "Draft a proposal from a property page." }
                    } @else {
                        table {
                            thead {
                                tr { th { "#" } th { "Property" } th { "Offer" } th { "Valid until" } th { "Status" } }
                            }
                            tbody {
                                @for p in proposals {
                                    tr {
                                        td { a href={ "/proposals/" (p.id) } { (p.id) } }
                                        td { a href={ "/properties/" (p.property_id) } { (p.property_id) } }
                                        td { "$ " (money(p.offered_price)) }
                                        td { (p.valid_until.to_string()) }
                                        td { span class="badge" { (p.status.label()) } }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub struct ProposalVm {
    pub proposal: Proposal,
    pub lead: Lead,
    pub property: Property,
}

pub fn proposal_page(vm: &ProposalVm) -> Markup {
    let proposal = &vm.proposal;
    let terms = proposal.terms(vm.property.price);
    let next: Vec<ProposalStatus> = ProposalStatus::ALL
        .iter()
        .copied()
        .filter(|s| proposal.status.can_become(*s))
        .collect();

    desktop_layout(
        &format!("Proposal #{}", proposal.id),
        html! {
            main class="container" {
                p { a href="/proposals" { "← All proposals" } }
                h1 { "Proposal #" (proposal.id) " " span class="badge" { (proposal.status.label()) } }

                div class="grid" {
                    (card("Property", html! {
                        p { a href={ "/properties/" (vm.property.id) } { (vm.property.title) } }
                        p class="muted" { (vm.property.city) }
                        p { "List price: $ " (money(terms.list_price)) }
                    }))
                    (card("Lead", html! {
                        p { strong { (vm.lead.name) } }
                        p { (vm.lead.email) }
                        @if let Some(phone) = &vm.lead.phone { p { (phone) } }
                    }))
                }

                section class="card" {
                    h3 { "Terms" }
                    table {
                        tbody {
                            tr { th { "Offered price" } td { "$ " (money(terms.offered_price)) } }
                            tr {
                                th { "Discount" }
                                td { (format!("{:.1}", terms.discount_pct)) "%" }
                            }
                            tr { th { "Down payment" } td { "$ " (money(terms.down_payment)) } }
                            tr { th { "Financed" } td { "$ " (money(terms.financed)) } }
                            tr {
                                th { "Installments" }
                                td { (proposal.installments) " × $ " (money(terms.installment_amount)) }
                            }
                            tr { th { "Drafted on" } td { (date(proposal.created_at)) } }
                            tr { th { "Valid until" } td { (proposal.valid_until.to_string()) } }
                        }
                    }
                    @if !proposal.conditions.is_empty() {
                        h4 { "Conditions" }
                        p { (proposal.conditions) }
                    }
                }

                @if !next.is_empty() {
                    section class="card" {
                        @for status in next {
                            form method="post" action={ "/proposals/" (proposal.id) "/status" } style="display:inline-block;margin-right:8px" {
                                input type="hidden" name="status" value=(status.as_str());
                                button class="btn" type="submit" { "Mark " (status.label().to_lowercase()) }
                            }
                        }
                    }
                }
            }
        },
    )
}
