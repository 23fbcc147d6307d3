use std::collections::HashSet;

use crate::domain::company::{Company, Contact, Signals};
use crate::domain::extraction;
use crate::services::company_finder::RawSearchResult;
use crate::services::estimator::EstimatorPolicy;

pub const SOURCE_TAG: &str = "job-listing search";

/// Approximate headcounts for companies that show up constantly in job
/// listings, substring-matched on the extracted name.
const KNOWN_COMPANY_HEADCOUNTS: &[(&str, u32)] = &[
    ("google", 150_000),
    ("microsoft", 220_000),
    ("amazon", 1_500_000),
    ("netflix", 12_000),
    ("salesforce", 70_000),
    ("ibm", 350_000),
    ("oracle", 140_000),
    ("intel", 120_000),
    ("hubspot", 7_000),
    ("slack", 2_000),
    ("zoom", 7_000),
    ("stripe", 8_000),
    ("airbnb", 6_000),
    ("uber", 32_000),
    ("lyft", 4_500),
];

const CONTACT_TITLE_RULES: &[(&str, &[&str])] = &[
    ("data", &["Chief Data Officer", "Head of Data", "VP of Data"]),
    ("engineer", &["CTO", "VP Engineering", "Technical Director"]),
    ("analyst", &["Head of Analytics", "Chief Data Officer"]),
    ("scientist", &["Head of Data Science", "Chief AI Officer"]),
    ("machine learning", &["Head of ML", "Chief AI Officer"]),
];

const DEFAULT_CONTACT_TITLES: &[&str] = &["CTO", "VP Engineering", "Head of Technology"];

const PLACEHOLDER_FIRST_NAMES: &[&str] = &["Alex", "Taylor", "Jordan", "Morgan", "Casey"];
const PLACEHOLDER_LAST_NAMES: &[&str] = &["Smith", "Johnson", "Brown", "Davis", "Wilson"];

/// Turn one batch of raw search results into candidate companies, dropping
/// items with no plausible company name and exact-name duplicates. The fuzzy
/// dedup pass still runs later.
pub fn extract_companies(
    results: &[RawSearchResult],
    policy: &mut EstimatorPolicy,
) -> Vec<Company> {
    let mut seen_names = HashSet::new();
    let mut companies = vec![];

    for result in results {
        if let Some(company) = extract_company(result, policy) {
            if seen_names.insert(company.company_name.to_lowercase()) {
                companies.push(company);
            }
        }
    }

    log::info!(
        "Extracted {} unique companies from {} search results",
        companies.len(),
        results.len()
    );
    companies
}

pub fn extract_company(result: &RawSearchResult, policy: &mut EstimatorPolicy) -> Option<Company> {
    let company_name = extraction::extract_company_name(&result.title, &result.link)?;

    let job_title = extraction::extract_job_title(&result.title);
    let location = extraction::extract_location(&result.snippet)
        .unwrap_or_else(|| "United States".to_string());
    let domain = extraction::synthesize_domain(&company_name);
    let industry = extraction::infer_industry(&company_name, &job_title);
    let employee_count = estimate_employee_count(&company_name, policy);
    let contacts = synthesize_contacts(&domain, &job_title, policy);

    let work_from_home = result.title.to_lowercase().contains("remote")
        || result.snippet.to_lowercase().contains("remote");

    Some(Company {
        company_name,
        domain,
        industry,
        employee_count: Some(employee_count),
        revenue: None,
        location,
        funding_stage: None,
        tech_stack: None,
        contacts,
        signals: Signals {
            // Every extracted record originates from a live job posting.
            recent_hiring: true,
            new_funding: false,
            funding_amount: 0.0,
            funding_round: None,
            job_title,
            job_posted: "Recently".to_string(),
            work_from_home,
        },
        source: vec![SOURCE_TAG.to_string()],
        confidence: 0.0,
        smart_enriched: false,
    })
}

fn estimate_employee_count(company_name: &str, policy: &mut EstimatorPolicy) -> u32 {
    let company_lower = company_name.to_lowercase();

    for (known_name, employees) in KNOWN_COMPANY_HEADCOUNTS {
        if company_lower.contains(known_name) {
            return *employees;
        }
    }

    if ["corp", "corporation", "inc", "global"]
        .iter()
        .any(|p| company_lower.contains(p))
    {
        policy.count_between(1_000, 50_000)
    } else if ["llc", "ltd", "limited"]
        .iter()
        .any(|p| company_lower.contains(p))
    {
        policy.count_between(50, 500)
    } else {
        policy.count_between(10, 1_000)
    }
}

/// One placeholder contact per company until the contact directory replaces
/// it with real entries.
fn synthesize_contacts(domain: &str, job_title: &str, policy: &mut EstimatorPolicy) -> Vec<Contact> {
    let job_lower = job_title.to_lowercase();

    let relevant_titles = CONTACT_TITLE_RULES
        .iter()
        .find(|(keyword, _)| job_lower.contains(keyword))
        .map(|(_, titles)| *titles)
        .unwrap_or(DEFAULT_CONTACT_TITLES);

    relevant_titles
        .iter()
        .take(1)
        .map(|title| {
            let first = policy.pick(PLACEHOLDER_FIRST_NAMES);
            let last = policy.pick(PLACEHOLDER_LAST_NAMES);

            Contact {
                name: format!("{} {}", first, last),
                title: title.to_string(),
                email: Some(format!(
                    "{}.{}@{}",
                    first.to_lowercase(),
                    last.to_lowercase(),
                    domain
                )),
                linkedin: Some(format!(
                    "linkedin.com/in/{}{}",
                    first.to_lowercase(),
                    last.to_lowercase()
                )),
                confidence: Some(0.0),
                verified: false,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_result(title: &str, snippet: &str, link: &str) -> RawSearchResult {
        RawSearchResult {
            title: title.to_string(),
            snippet: snippet.to_string(),
            link: link.to_string(),
        }
    }

    #[test]
    fn extracts_company_from_careers_title() {
        let result = raw_result(
            "Careers at Acme Corp",
            "data scientist remote",
            "https://acme.com/careers",
        );
        let mut policy = EstimatorPolicy::seeded(1);

        let company = extract_company(&result, &mut policy).unwrap();

        assert_eq!(company.company_name, "Acme Corp");
        assert_eq!(company.domain, "acme.com");
        assert_eq!(company.location, "United States");
        assert!(company.signals.recent_hiring);
        assert!(company.signals.work_from_home);
        assert_eq!(company.source, vec![SOURCE_TAG.to_string()]);
        assert_eq!(company.confidence, 0.0);
        assert!(!company.smart_enriched);
    }

    #[test]
    fn extracts_location_and_job_title_from_dash_title() {
        let result = raw_result(
            "Acme Corporation - Data Engineer Jobs",
            "based in Austin, TX",
            "https://acme.com/jobs",
        );
        let mut policy = EstimatorPolicy::seeded(1);

        let company = extract_company(&result, &mut policy).unwrap();

        assert_eq!(company.company_name, "Acme Corporation");
        assert_eq!(company.domain, "acme.com");
        assert_eq!(company.location, "Austin, TX");
        assert_eq!(company.signals.job_title, "Data Engineer Jobs");
        assert!(!company.signals.work_from_home);
    }

    #[test]
    fn drops_items_without_plausible_name() {
        let result = raw_result(
            "Remote Data Scientist Jobs - Apply Now on Best Job Board",
            "thousands of openings",
            "https://jobsearch.com/listing",
        );
        let mut policy = EstimatorPolicy::seeded(1);

        assert!(extract_company(&result, &mut policy).is_none());
    }

    #[test]
    fn batch_extraction_drops_exact_name_duplicates() {
        let results = vec![
            raw_result("Careers at Snowpeak", "", "https://snowpeak.com/careers"),
            raw_result("Careers at Snowpeak", "", "https://snowpeak.com/jobs"),
            raw_result("Careers at Acme Corp", "", "https://acme.com/careers"),
        ];
        let mut policy = EstimatorPolicy::seeded(1);

        let companies = extract_companies(&results, &mut policy);

        assert_eq!(companies.len(), 2);
        assert_eq!(companies[0].company_name, "Snowpeak");
        assert_eq!(companies[1].company_name, "Acme Corp");
    }

    #[test]
    fn known_company_headcount_wins_over_random_estimate() {
        let mut policy = EstimatorPolicy::seeded(1);
        assert_eq!(estimate_employee_count("Google LLC", &mut policy), 150_000);
    }

    #[test]
    fn synthetic_contact_matches_job_title_track() {
        let mut policy = EstimatorPolicy::seeded(1);
        let contacts = synthesize_contacts("acme.com", "Senior Data Engineer", &mut policy);

        assert_eq!(contacts.len(), 1);
        let contact = &contacts[0];
        assert_eq!(contact.title, "Chief Data Officer");
        assert!(!contact.verified);
        assert_eq!(contact.confidence, Some(0.0));
        let email = contact.email.as_deref().unwrap();
        assert!(email.ends_with("@acme.com"));
    }
}
