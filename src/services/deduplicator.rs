use std::collections::HashSet;

use itertools::Itertools;
use strsim::jaro_winkler;

use crate::domain::company::Company;

/// Minimum name similarity, on a 0-100 scale, for two records to be
/// considered the same company.
pub const SIMILARITY_THRESHOLD: f64 = 85.0;

/// Collapse duplicates by exact key (domain, else name) first, then by fuzzy
/// name similarity. Output keeps the insertion order of first-seen records.
pub fn deduplicate_companies(companies: Vec<Company>) -> Vec<Company> {
    let mut unique_companies: Vec<Company> = vec![];

    for company in companies {
        let key = company.dedup_key();

        let match_index = unique_companies
            .iter()
            .position(|kept| kept.dedup_key() == key)
            .or_else(|| find_similar_company(&company, &unique_companies));

        match match_index {
            Some(index) => merge_companies(&mut unique_companies[index], company),
            None => unique_companies.push(company),
        }
    }

    unique_companies
}

/// First kept record reaching the threshold wins, scanning in insertion
/// order.
fn find_similar_company(company: &Company, kept: &[Company]) -> Option<usize> {
    let company_name = company.company_name.to_lowercase();

    kept.iter().position(|existing| {
        let existing_name = existing.company_name.to_lowercase();
        let similarity = jaro_winkler(&company_name, &existing_name) * 100.0;

        if similarity >= SIMILARITY_THRESHOLD {
            log::info!(
                "Similar companies found: {} ~ {} ({:.0}%)",
                company_name,
                existing_name,
                similarity
            );
            return true;
        }
        false
    })
}

/// Merge `incoming` into `kept`. Sources union as a set, incoming signals
/// overlay kept ones, contacts dedup on non-empty email, and missing scalars
/// are filled from the incoming record (first-seen value wins otherwise).
fn merge_companies(kept: &mut Company, incoming: Company) {
    let kept_sources = std::mem::take(&mut kept.source);
    kept.source = kept_sources
        .into_iter()
        .chain(incoming.source)
        .unique()
        .collect();

    kept.signals.overlay(&incoming.signals);

    let existing_emails: HashSet<String> = kept
        .contacts
        .iter()
        .filter_map(|contact| contact.email.clone())
        .filter(|email| !email.is_empty())
        .collect();

    for contact in incoming.contacts {
        let already_present = contact
            .email
            .as_deref()
            .map(|email| !email.is_empty() && existing_emails.contains(email))
            .unwrap_or(false);

        if !already_present {
            kept.contacts.push(contact);
        }
    }
    kept.cap_contacts();

    if kept.revenue.unwrap_or(0.0) == 0.0 && incoming.revenue.unwrap_or(0.0) > 0.0 {
        kept.revenue = incoming.revenue;
    }
    if kept.employee_count.unwrap_or(0) == 0 && incoming.employee_count.unwrap_or(0) > 0 {
        kept.employee_count = incoming.employee_count;
    }
    let kept_stage_missing = kept.funding_stage.as_deref().unwrap_or("").is_empty();
    if kept_stage_missing && !incoming.funding_stage.as_deref().unwrap_or("").is_empty() {
        kept.funding_stage = incoming.funding_stage;
    }
}
