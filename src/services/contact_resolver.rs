use std::time::Duration;

use crate::domain::company::{is_valid_email, Company, Contact, MAX_CONTACTS};
use crate::services::contact_directory::{ContactDirectory, DirectoryEntry};

pub const TARGET_TITLES: &[&str] = &["CTO", "VP Engineering", "Chief Data Officer", "Head of Data"];

/// Directory free tier is heavily quota-limited; lookups run strictly one at
/// a time with this pause between calls.
pub const LOOKUP_DELAY: Duration = Duration::from_secs(3);

/// Swap synthetic placeholder contacts for real directory entries wherever
/// the directory knows the domain. Companies without a usable domain are
/// skipped, not failed.
pub async fn resolve_contacts(directory: &ContactDirectory, companies: &mut [Company]) {
    log::info!("Finding real contacts for {} companies", companies.len());

    for company in companies.iter_mut() {
        if !has_resolvable_domain(&company.domain) {
            log::info!(
                "Skipping {} - invalid domain: {}",
                company.company_name,
                company.domain
            );
            continue;
        }

        let entries = directory.lookup(&company.domain).await;
        let contacts = select_contacts(entries, TARGET_TITLES);

        match contacts.is_empty() {
            false => {
                log::info!(
                    "Found {} real contacts for {}",
                    contacts.len(),
                    company.company_name
                );
                company.contacts = contacts;
            }
            true => {
                log::info!("No directory contacts found for {}", company.company_name);
            }
        }

        tokio::time::sleep(LOOKUP_DELAY).await;
    }
}

fn has_resolvable_domain(domain: &str) -> bool {
    !domain.is_empty() && domain.ends_with(".com")
}

/// Keep entries whose position mentions a target title, rescale confidence
/// to [0,1], drop entries without a well-formed email, cap at five.
pub fn select_contacts(entries: Vec<DirectoryEntry>, target_titles: &[&str]) -> Vec<Contact> {
    let mut contacts: Vec<Contact> = entries
        .into_iter()
        .filter(|entry| {
            let position = entry.position.to_lowercase();
            target_titles.is_empty()
                || target_titles
                    .iter()
                    .any(|title| position.contains(&title.to_lowercase()))
        })
        .filter(|entry| is_valid_email(&entry.email))
        .map(|entry| Contact {
            name: format!("{} {}", entry.first_name, entry.last_name)
                .trim()
                .to_string(),
            title: entry.position,
            email: Some(entry.email),
            linkedin: entry.linkedin,
            confidence: Some(f64::from(entry.confidence) / 100.0),
            verified: true,
        })
        .collect();

    contacts.truncate(MAX_CONTACTS);
    contacts
}
