// src/domain/lead.rs

text_enum! {
    /// Pipeline stage of a lead.
    pub enum LeadStatus {
        New => "new" : "New",
        Contacted => "contacted" : "Contacted",
        Qualified => "qualified" : "Qualified",
        Proposal => "proposal" : "Proposal",
        Won => "won" : "Won",
        Lost => "lost" : "Lost",
    }
}

text_enum! {
    /// Channel a lead arrived through.
    pub enum LeadSource {
        Website => "website" : "Website",
        Catalog => "catalog" : "Public catalog",
        Referral => "referral" : "Referral",
        WalkIn => "walkIn" : "Walk-in",
        Other => "other" : "Other",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lead {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub source: LeadSource,
    pub status: LeadStatus,
    /// Set by the agent. Nothing computes it.
    pub score: i64,
    pub property_id: Option<String>,
    pub notes: Option<String>,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub source: LeadSource,
    pub property_id: Option<String>,
    pub notes: Option<String>,
}

impl NewLead {
    /// Trims every field, lowercases the email and drops empty optionals.
    pub fn normalized(self) -> Result<Self, String> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err("name is required".into());
        }

        let email = normalize_email(&self.email)?;

        Ok(NewLead {
            name,
            email,
            phone: non_empty(self.phone),
            source: self.source,
            property_id: non_empty(self.property_id),
            notes: non_empty(self.notes),
        })
    }
}

/// Trim + lowercase, minimal sanity check.
pub fn normalize_email(email: &str) -> Result<String, String> {
    let e = email.trim().to_lowercase();
    if e.is_empty() || !e.contains('@') || e.starts_with('@') || e.ends_with('@') {
        return Err("invalid email".into());
    }
    Ok(e)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
