use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::domain::company::Company;
use crate::domain::extraction;

pub const MAX_TECH_STACK: usize = 5;

/// All pseudo-random estimation draws go through this policy so a seeded
/// instance makes estimator outcomes reproducible in tests.
pub struct EstimatorPolicy {
    rng: StdRng,
}

impl EstimatorPolicy {
    pub fn new() -> Self {
        EstimatorPolicy {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        EstimatorPolicy {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn count_between(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }

    pub fn pick<'a>(&mut self, options: &'a [&'a str]) -> &'a str {
        options.choose(&mut self.rng).unwrap()
    }

    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }
}

impl Default for EstimatorPolicy {
    fn default() -> Self {
        EstimatorPolicy::new()
    }
}

const LARGE_COMPANY_PATTERNS: &[&str] = &["corp", "corporation", "inc", "global", "international"];
const SMALL_COMPANY_PATTERNS: &[&str] = &["labs", "tech", "io", "startup", "ventures"];
const GROWTH_ROLE_PATTERNS: &[&str] = &["data scientist", "data engineer", "machine learning"];

const JOB_INDUSTRY_REFINEMENTS: &[(&[&str], &str)] = &[
    (&["data scientist", "data engineer", "data analyst", "analytics"], "Data"),
    (&["ai", "machine learning", "deep learning", "llm", "generative ai"], "Ai Ml"),
    (&["software engineer", "developer", "full stack", "frontend", "backend"], "Software"),
    (&["aws", "azure", "gcp", "cloud", "devops"], "Cloud"),
    (&["fintech", "banking", "payments", "financial", "trading"], "Fintech"),
    (&["health", "medical", "pharma", "biotech", "clinical"], "Healthcare"),
];

const NAME_INDUSTRY_REFINEMENTS: &[(&[&str], &str)] = &[
    (&["bank", "finance", "capital", "payments"], "FinTech"),
    (&["health", "medical", "care", "pharma"], "Healthcare"),
    (&["media", "entertainment", "streaming"], "Media & Entertainment"),
    (&["retail", "ecommerce", "shop", "store"], "E-commerce"),
];

const TECH_STACK_RULES: &[(&[&str], &str)] = &[
    (&["python", "py"], "Python"),
    (&["java"], "Java"),
    (&["javascript", "js", "node"], "JavaScript"),
    (&["sql"], "SQL"),
    (&["r"], "R"),
    (&["aws", "amazon web services"], "AWS"),
    (&["azure"], "Azure"),
    (&["gcp", "google cloud"], "GCP"),
    (&["snowflake"], "Snowflake"),
    (&["databricks"], "Databricks"),
    (&["spark"], "Apache Spark"),
    (&["docker", "kubernetes", "k8s"], "Containers"),
];

/// Fill the gaps on every company from job-listing signals. Populated fields
/// are never overwritten.
pub fn enrich_companies(companies: &mut [Company], policy: &mut EstimatorPolicy) {
    log::info!("Analyzing company data from {} job listings", companies.len());

    let mut enriched_count = 0;
    for company in companies.iter_mut() {
        if estimate_from_job_data(company, policy) {
            enriched_count += 1;
        }
    }

    log::info!("Enhanced {} companies with job data analysis", enriched_count);
}

fn estimate_from_job_data(company: &mut Company, policy: &mut EstimatorPolicy) -> bool {
    let company_name = company.company_name.to_lowercase();
    let job_title = company.signals.job_title.to_lowercase();
    let mut touched = false;

    if company.employee_count.unwrap_or(0) == 0 {
        company.employee_count = Some(estimate_employee_count(&company_name, &job_title, policy));
        touched = true;
    }

    if company.revenue.unwrap_or(0.0) == 0.0 {
        let employee_count = company.employee_count.unwrap_or(100);
        company.revenue = Some(estimate_revenue(employee_count, &company_name, policy));
        touched = true;
    }

    if company.industry.is_empty() || company.industry == "Technology" {
        company.industry = refine_industry(&company_name, &job_title, &company.industry);
        touched = true;
    }

    if company.funding_stage.as_deref().unwrap_or("").is_empty() {
        let employee_count = company.employee_count.unwrap_or(100);
        company.funding_stage = Some(estimate_funding_stage(employee_count, policy));
        touched = true;
    }

    if !job_title.is_empty() {
        company.tech_stack = Some(infer_tech_stack(&job_title));
    }

    company.smart_enriched = true;
    touched
}

fn estimate_employee_count(company_name: &str, job_title: &str, policy: &mut EstimatorPolicy) -> u32 {
    if LARGE_COMPANY_PATTERNS.iter().any(|p| company_name.contains(p)) {
        return policy.count_between(1_000, 50_000);
    }

    if SMALL_COMPANY_PATTERNS.iter().any(|p| company_name.contains(p)) {
        return policy.count_between(10, 200);
    }

    if GROWTH_ROLE_PATTERNS.iter().any(|p| job_title.contains(p)) {
        return policy.count_between(50, 1_000);
    }

    policy.count_between(50, 2_000)
}

fn estimate_revenue(employee_count: u32, company_name: &str, policy: &mut EstimatorPolicy) -> f64 {
    let revenue_per_employee = if ["tech", "software", "saas"]
        .iter()
        .any(|p| company_name.contains(p))
    {
        policy.count_between(200_000, 500_000)
    } else if ["consulting", "services"]
        .iter()
        .any(|p| company_name.contains(p))
    {
        policy.count_between(150_000, 300_000)
    } else {
        policy.count_between(100_000, 250_000)
    };

    f64::from(employee_count) * f64::from(revenue_per_employee)
}

fn refine_industry(company_name: &str, job_title: &str, current_industry: &str) -> String {
    for (keywords, industry) in JOB_INDUSTRY_REFINEMENTS {
        if keywords.iter().any(|word| extraction::keyword_hit(job_title, word)) {
            return industry.to_string();
        }
    }

    for (keywords, industry) in NAME_INDUSTRY_REFINEMENTS {
        if keywords
            .iter()
            .any(|word| extraction::keyword_hit(company_name, word))
        {
            return industry.to_string();
        }
    }

    match current_industry.is_empty() {
        true => "Technology".to_string(),
        false => current_industry.to_string(),
    }
}

fn estimate_funding_stage(employee_count: u32, policy: &mut EstimatorPolicy) -> String {
    if employee_count > 1_000 {
        return match policy.chance(0.7) {
            true => "Public".to_string(),
            false => "Series E+".to_string(),
        };
    }

    let options: &[&str] = if employee_count > 500 {
        &["Series D", "Series E", "Private Equity"]
    } else if employee_count > 100 {
        &["Series B", "Series C"]
    } else if employee_count > 50 {
        &["Series A", "Series B"]
    } else {
        &["Seed", "Series A", "Bootstrapped"]
    };

    policy.pick(options).to_string()
}

fn infer_tech_stack(job_title: &str) -> Vec<String> {
    // Short keywords like "r" and "js" must hit whole tokens, not substrings.
    let tokens: Vec<&str> = job_title
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    let keyword_hit = |keyword: &str| match keyword.contains(' ') {
        true => job_title.contains(keyword),
        false => tokens.contains(&keyword),
    };

    let mut tech_stack: Vec<String> = TECH_STACK_RULES
        .iter()
        .filter(|(keywords, _)| keywords.iter().any(|&word| keyword_hit(word)))
        .map(|(_, tech)| tech.to_string())
        .collect();

    tech_stack.truncate(MAX_TECH_STACK);
    tech_stack
}
