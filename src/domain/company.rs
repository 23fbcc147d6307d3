use serde::{Deserialize, Serialize};

/// Hard cap on contacts carried per company, enforced at every stage.
pub const MAX_CONTACTS: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub company_name: String,
    pub domain: String,
    pub industry: String,
    pub employee_count: Option<u32>,
    pub revenue: Option<f64>,
    pub location: String,
    pub funding_stage: Option<String>,
    pub tech_stack: Option<Vec<String>>,
    pub contacts: Vec<Contact>,
    pub signals: Signals,
    pub source: Vec<String>,
    pub confidence: f64,
    pub smart_enriched: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub title: String,
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub confidence: Option<f64>,
    pub verified: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Signals {
    pub recent_hiring: bool,
    pub new_funding: bool,
    pub funding_amount: f64,
    pub funding_round: Option<String>,
    pub job_title: String,
    pub job_posted: String,
    pub work_from_home: bool,
}

impl Company {
    pub fn dedup_key(&self) -> String {
        match self.domain.trim().is_empty() {
            false => self.domain.trim().to_lowercase(),
            true => self.company_name.trim().to_lowercase(),
        }
    }

    pub fn cap_contacts(&mut self) {
        self.contacts.truncate(MAX_CONTACTS);
    }
}

impl Signals {
    /// Overlay `other` onto `self`, the incoming record winning on every field
    /// it carries. Optional fields are only taken when set.
    pub fn overlay(&mut self, other: &Signals) {
        self.recent_hiring = other.recent_hiring;
        self.new_funding = other.new_funding;
        self.funding_amount = other.funding_amount;
        if other.funding_round.is_some() {
            self.funding_round = other.funding_round.clone();
        }
        self.job_title = other.job_title.clone();
        self.job_posted = other.job_posted.clone();
        self.work_from_home = other.work_from_home;
    }
}

/// Shape check only, no deliverability verification. A contact with a
/// malformed email is dropped, not the whole company.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
        && email.matches('@').count() == 1
}
