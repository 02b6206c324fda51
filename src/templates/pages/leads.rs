use crate::domain::{Lead, LeadSource, LeadStatus};
use crate::templates::components::{button, date};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn leads_page(leads: &[Lead], filter: Option<LeadStatus>) -> Markup {
    desktop_layout(
        "Leads",
        html! {
            main class="container" {
                h1 { "Leads" }

                nav class="pagination" {
                    a href="/leads" { @if filter.is_none() { strong { "All" } } @else { "All" } }
                    @for status in LeadStatus::ALL {
                        a href={ "/leads?status=" (status.as_str()) } {
                            @if filter == Some(*status) { strong { (status.label()) } } @else { (status.label()) }
                        }
                    }
                }

                section class="card" {
                    @if leads.is_empty() {
                        p class="muted" { "No leads in this stage." }
                    } @else {
                        table {
                            thead {
                                tr { th { "Name" } th { "Contact" } th { "Source" } th { "Interest" } th { "Stage" } th { "Score" } }
                            }
                            tbody {
                                @for lead in leads {
                                    (lead_row(lead))
                                }
                            }
                        }
                    }
                }

                (capture_form())
            }
        },
    )
}

fn lead_row(lead: &Lead) -> Markup {
    html! {
        tr {
            td {
                (lead.name)
                br; span class="muted" { "since " (date(lead.created_at)) }
                @if let Some(notes) = &lead.notes { br; span class="muted" { (notes) } }
            }
            td {
                (lead.email)
                @if let Some(phone) = &lead.phone { br; (phone) }
            }
            td { (lead.source.label()) }
            td {
                @if let Some(id) = &lead.property_id {
                    a href={ "/properties/" (id) } { (id) }
                }
            }
            td {
                form method="post" action={ "/leads/" (lead.id) "/status" } {
                    select name="status" {
                        @for status in LeadStatus::ALL {
                            option value=(status.as_str()) selected[*status == lead.status] { (status.label()) }
                        }
                    }
                    (button("Move"))
                }
            }
            td {
                form method="post" action={ "/leads/" (lead.id) "/score" } {
                    input type="number" name="score" value=(lead.score) style="width:5em";
                    (button("Set"))
                }
            }
        }
    }
}

fn capture_form() -> Markup {
    html! {
        section class="card" id="new-lead" {
            h3 { "Capture a lead" }
            form class="filters" method="post" action="/leads" {
                label { "Name" input type="text" name="name" required; }
                label { "Email" input type="email" name="email" required; }
                label { "Phone" input type="tel" name="phone"; }
                label {
                    "Source"
                    select name="source" {
                        @for source in LeadSource::ALL {
                            option value=(source.as_str()) { (source.label()) }
                        }
                    }
                }
                label { "Property id" input type="text" name="property_id"; }
                label { "Notes" textarea name="notes" rows="2" {} }
                (button("Add lead"))
            }
        }
    }
}
