// src/domain/proposal.rs

use chrono::NaiveDate;

text_enum! {
    pub enum ProposalStatus {
        Draft => "draft" : "Draft",
        Sent => "sent" : "Sent",
        Accepted => "accepted" : "Accepted",
        Rejected => "rejected" : "Rejected",
    }
}

impl ProposalStatus {
    /// Allowed moves in the proposal lifecycle.
    /// Accepted and rejected are terminal.
    pub fn can_become(self, next: ProposalStatus) -> bool {
        use ProposalStatus::*;
        matches!(
            (self, next),
            (Draft, Sent) | (Draft, Rejected) | (Sent, Accepted) | (Sent, Rejected)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Proposal {
    pub id: i64,
    pub lead_id: i64,
    pub property_id: String,
    pub offered_price: f64,
    pub down_payment: f64,
    pub installments: u32,
    pub valid_until: NaiveDate,
    pub conditions: String,
    pub status: ProposalStatus,
    pub created_at: i64,
}

impl Proposal {
    pub fn terms(&self, list_price: f64) -> ProposalTerms {
        ProposalTerms::compute(
            list_price,
            self.offered_price,
            self.down_payment,
            self.installments,
        )
    }
}

/// What the agent fills in to draft a proposal.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProposal {
    pub lead_id: i64,
    pub property_id: String,
    pub offered_price: f64,
    pub down_payment: f64,
    pub installments: u32,
    pub valid_days: u32,
    pub conditions: String,
}

impl NewProposal {
    pub fn validate(&self) -> Result<(), String> {
        if !self.offered_price.is_finite() || self.offered_price <= 0.0 {
            return Err("offered price must be positive".into());
        }
        if !self.down_payment.is_finite() || self.down_payment < 0.0 {
            return Err("down payment cannot be negative".into());
        }
        if self.down_payment > self.offered_price {
            return Err("down payment cannot exceed the offered price".into());
        }
        if self.installments == 0 {
            return Err("at least one installment is required".into());
        }
        Ok(())
    }

    /// Last day the proposal may be accepted, counted from `today`.
    pub fn valid_until(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_add_days(chrono::Days::new(u64::from(self.valid_days)))
            .unwrap_or(NaiveDate::MAX)
    }
}

/// Derived payment figures shown on a proposal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProposalTerms {
    pub list_price: f64,
    pub offered_price: f64,
    pub down_payment: f64,
    pub financed: f64,
    pub installment_amount: f64,
    /// Positive when the offer is below the list price.
    pub discount_pct: f64,
}

impl ProposalTerms {
    pub fn compute(list_price: f64, offered_price: f64, down_payment: f64, installments: u32) -> Self {
        let financed = offered_price - down_payment;
        let installment_amount = financed / f64::from(installments.max(1));
        let discount_pct = if list_price > 0.0 {
            (list_price - offered_price) / list_price * 100.0
        } else {
            0.0
        };

        ProposalTerms {
            list_price,
            offered_price,
            down_payment,
            financed,
            installment_amount,
            discount_pct,
        }
    }
}
