use crate::db::{leads, properties, proposals};
use crate::domain::ProposalStatus;
use crate::responses::{html_response, ResultResp};
use crate::router::{now, AppState};
use crate::templates::pages::{dashboard_page, DashboardVm};

pub fn show(state: &AppState) -> ResultResp {
    let vm = state.db.with_conn(|conn| {
        let mut proposals_by_status = Vec::new();
        for status in ProposalStatus::ALL {
            let n = proposals::count_proposals_by_status(conn, *status)?;
            if n > 0 {
                proposals_by_status.push((*status, n));
            }
        }

        Ok(DashboardVm {
            property_count: properties::count_properties(conn)?,
            leads_by_status: leads::count_leads_by_status(conn)?,
            leads_this_month: leads::count_leads_this_month(conn, now())?,
            proposals_by_status,
        })
    })?;

    html_response(dashboard_page(&vm))
}
