use std::time::Duration;

use crate::domain::company::Company;
use crate::domain::icp::Icp;
use crate::services::company_finder::CompanyFinder;
use crate::services::contact_directory::ContactDirectory;
use crate::services::{contact_resolver, deduplicator, estimator, extractor, scorer};
use crate::services::estimator::EstimatorPolicy;

/// Job-search queries that reliably surface hiring companies through a plain
/// web search engine.
pub const JOB_SEARCH_QUERIES: &[&str] = &[
    "data scientist jobs USA",
    "software engineer jobs United States",
    "data analyst jobs hiring",
    "machine learning engineer jobs",
    "AI engineer jobs USA",
];

pub const QUERY_LIMIT: usize = 3;
pub const SEARCH_DELAY: Duration = Duration::from_secs(2);

pub struct ProspectPipeline {
    company_finder: CompanyFinder,
    contact_directory: ContactDirectory,
}

impl ProspectPipeline {
    pub fn new(company_finder: CompanyFinder, contact_directory: ContactDirectory) -> Self {
        ProspectPipeline {
            company_finder,
            contact_directory,
        }
    }

    pub async fn run(&self, icp: &Icp) -> Vec<Company> {
        let mut policy = EstimatorPolicy::new();
        self.run_with_policy(icp, &mut policy).await
    }

    /// Stages run strictly in sequence, each stage's full output feeding the
    /// next. A failed collaborator call contributes zero records instead of
    /// aborting the run.
    pub async fn run_with_policy(&self, icp: &Icp, policy: &mut EstimatorPolicy) -> Vec<Company> {
        /*
        1. Find companies via job-listing searches
        2. Fill attribute gaps from the job data
        3. Swap placeholder contacts for directory entries
        4. Merge duplicate records
        5. Score against the ICP and rank
        */
        let location = icp.search_location();
        let mut companies: Vec<Company> = vec![];

        log::info!(
            "Stage 1: finding companies via {} job-listing queries",
            QUERY_LIMIT
        );
        for &query in JOB_SEARCH_QUERIES.iter().take(QUERY_LIMIT) {
            log::info!("Searching: {}", query);
            let results = self.company_finder.search(query, &location).await;
            companies.extend(extractor::extract_companies(&results, policy));

            tokio::time::sleep(SEARCH_DELAY).await;
        }

        if companies.is_empty() {
            log::info!("No companies found from job listings");
            return vec![];
        }
        log::info!("Found {} companies from job listings", companies.len());

        log::info!("Stage 2: analyzing company data from job listings");
        estimator::enrich_companies(&mut companies, policy);

        log::info!("Stage 3: finding real contacts");
        contact_resolver::resolve_contacts(&self.contact_directory, &mut companies).await;

        log::info!("Stage 4: deduplicating companies");
        let mut companies = deduplicator::deduplicate_companies(companies);
        log::info!("{} unique companies after deduplication", companies.len());

        log::info!("Stage 5: calculating confidence scores");
        scorer::score_companies(&mut companies, icp);

        log_run_summary(&companies);
        companies
    }
}

fn log_run_summary(prospects: &[Company]) {
    let high = prospects.iter().filter(|p| p.confidence >= 0.7).count();
    let medium = prospects
        .iter()
        .filter(|p| p.confidence >= 0.4 && p.confidence < 0.7)
        .count();
    let low = prospects.iter().filter(|p| p.confidence < 0.4).count();
    let smart_enriched = prospects.iter().filter(|p| p.smart_enriched).count();
    let with_verified_contacts = prospects
        .iter()
        .filter(|p| p.contacts.iter().any(|c| c.verified))
        .count();
    let hiring = prospects
        .iter()
        .filter(|p| p.signals.recent_hiring)
        .count();

    log::info!(
        "Pipeline complete: {} qualified prospects ({} high, {} medium, {} low confidence)",
        prospects.len(),
        high,
        medium,
        low
    );
    log::info!(
        "Data quality: {} smart enriched, {} with verified contacts, {} currently hiring",
        smart_enriched,
        with_verified_contacts,
        hiring
    );
}
