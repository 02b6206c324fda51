use crate::domain::{LeadStatus, ProposalStatus};
use crate::templates::components::card;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct DashboardVm {
    pub property_count: i64,
    pub leads_by_status: Vec<(LeadStatus, i64)>,
    pub leads_this_month: i64,
    pub proposals_by_status: Vec<(ProposalStatus, i64)>,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    let count_of = |status: LeadStatus| {
        vm.leads_by_status
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    };

    desktop_layout(
        "Dashboard",
        html! {
            main class="container" {
                h1 { "Dashboard" }

                div class="grid" {
                    (card("Catalog", html! {
                        p class="price" { (vm.property_count) }
                        p class="muted" { "properties on file" }
                        a href="/properties" { "Browse properties" }
                    }))

                    (card("Leads this month", html! {
                        p class="price" { (vm.leads_this_month) }
                        p class="muted" { "new contacts since the 1st" }
                        a href="/leads" { "Open pipeline" }
                    }))
                }

                section class="card" {
                    h3 { "Pipeline" }
                    table {
                        thead { tr { th { "Stage" } th { "Leads" } } }
                        tbody {
                            @for status in LeadStatus::ALL {
                                tr {
                                    td {
                                        a href={ "/leads?status=" (status.as_str()) } { (status.label()) }
                                    }
                                    td { (count_of(*status)) }
                                }
                            }
                        }
                    }
                }

                section class="card" {
                    h3 { "Proposals" }
                    @if vm.proposals_by_status.is_empty() {
                        p class="muted" { "No proposals yet." }
                    } @else {
                        ul {
                            @for (status, n) in &vm.proposals_by_status {
                                li { (status.label()) ": " strong { (n) } }
                            }
                        }
                    }
                    a href="/proposals" { "All proposals" }
                }
            }
        },
    )
}
