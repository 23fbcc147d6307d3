use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Titles dominated by these terms are aggregator pages, not company pages.
const GENERIC_TERMS: &[&str] = &[
    "jobs",
    "careers",
    "hiring",
    "search",
    "remote",
    "now hiring",
    "apply now",
];

const GENERIC_TITLE_WORD_LIMIT: usize = 5;

/// Ordered name-extraction rules, first capture wins.
static NAME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)^(.+?) - .*(?:jobs?|careers)",
        r"(?i)\bcareers at (.+)$",
        r"(?i)\bjobs at (.+)$",
        r"(?i)^(.+) careers\b",
        r"(?i)^(.+) is hiring\b",
        r"(?i)^(.+) hiring\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Ordered strip rules reducing a result title to the bare job title.
static JOB_TITLE_STRIP: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i).+? - ",
        r"(?i) at .+",
        r"(?i) - .+? (?:careers|jobs|hiring)",
        r" \| .+",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static LOCATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\bin ([A-Za-z\s,]+(?:CA|NY|TX|FL|IL|WA|MA))",
        r"(?i)location:? ([A-Za-z\s,]+)",
        r"(?i)based in ([A-Za-z\s,]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

const LEGAL_SUFFIXES: &[&str] = &[
    " inc",
    " corp",
    " corporation",
    " llc",
    " ltd",
    " limited",
    " company",
    " co",
];

const DOMAIN_TLDS: &[&str] = &["com", "org", "io", "net"];

pub fn extract_company_name(title: &str, link: &str) -> Option<String> {
    let title_lower = title.to_lowercase();

    // Long titles full of generic job-board phrasing are listing pages.
    // Bare separators like " - " do not count as words.
    let word_count = title
        .split_whitespace()
        .filter(|word| word.chars().any(char::is_alphanumeric))
        .count();
    let is_generic = GENERIC_TERMS.iter().any(|term| title_lower.contains(term));
    if is_generic && word_count > GENERIC_TITLE_WORD_LIMIT {
        return None;
    }

    for pattern in NAME_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(title) {
            let candidate = captures.get(1).map(|m| m.as_str().trim()).unwrap_or("");
            let candidate = match candidate.to_lowercase().strip_prefix("at ") {
                Some(_) => candidate[3..].trim(),
                None => candidate,
            };

            if is_plausible_name(candidate, false) {
                return Some(candidate.to_string());
            }
        }
    }

    // Fall back to the second-level domain label, the most reliable source.
    let candidate = company_name_from_link(link)?;
    match is_plausible_name(&candidate, true) {
        true => Some(candidate),
        false => None,
    }
}

fn is_plausible_name(candidate: &str, from_domain: bool) -> bool {
    let lower = candidate.to_lowercase();
    if candidate.len() <= 2 || GENERIC_TERMS.contains(&lower.as_str()) {
        return false;
    }

    let banned: &[&str] = match from_domain {
        true => &["job", "career", "search"],
        false => &["job", "career"],
    };
    !banned.iter().any(|term| lower.contains(term))
}

fn company_name_from_link(link: &str) -> Option<String> {
    let parsed_url = Url::parse(link).ok()?;
    let host = parsed_url.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    let labels: Vec<&str> = host.split('.').collect();
    match labels.as_slice() {
        [.., label, tld] if DOMAIN_TLDS.contains(tld) => {
            Some(title_case(&label.replace('-', " ")))
        }
        _ => None,
    }
}

pub fn extract_job_title(title: &str) -> String {
    let mut job_title = title.to_string();
    for pattern in JOB_TITLE_STRIP.iter() {
        job_title = pattern.replace_all(&job_title, "").to_string();
    }

    let job_title = job_title.trim();
    match job_title.is_empty() {
        true => "Technology Role".to_string(),
        false => job_title.to_string(),
    }
}

pub fn extract_location(snippet: &str) -> Option<String> {
    LOCATION_PATTERNS
        .iter()
        .filter_map(|pattern| {
            pattern
                .captures(snippet)
                .and_then(|captures| captures.get(1))
                .map(|m| m.as_str().trim().to_string())
        })
        .next()
}

/// Guess an internet domain from a display name: drop legal-entity suffixes,
/// squash to alphanumerics, append `.com`.
pub fn synthesize_domain(company_name: &str) -> String {
    let mut clean_name = company_name.to_lowercase().trim().to_string();

    loop {
        let mut stripped = false;
        for suffix in LEGAL_SUFFIXES {
            if let Some(rest) = clean_name.strip_suffix(suffix) {
                clean_name = rest.trim_end().to_string();
                stripped = true;
            }
        }
        if !stripped {
            break;
        }
    }

    let clean_name: String = clean_name
        .replace(' ', "")
        .replace(',', "")
        .replace('&', "and")
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();

    format!("{}.com", clean_name)
}

const NAME_INDUSTRY_RULES: &[(&[&str], &str)] = &[
    (&["bank", "finance", "capital", "payments", "credit"], "FinTech"),
    (&["health", "medical", "care", "pharma", "bio"], "Healthcare"),
    (&["soft", "tech", "cloud", "data", "ai", "io"], "Software & Technology"),
    (
        &["media", "entertainment", "streaming", "content"],
        "Media & Entertainment",
    ),
];

const JOB_INDUSTRY_RULES: &[(&[&str], &str)] = &[
    (&["data", "scientist", "analyst", "analytics"], "Data & Analytics"),
    (&["ai", "machine learning", "ml"], "Artificial Intelligence"),
];

pub fn infer_industry(company_name: &str, job_title: &str) -> String {
    let company_lower = company_name.to_lowercase();
    let job_lower = job_title.to_lowercase();

    for (keywords, industry) in NAME_INDUSTRY_RULES {
        if keywords.iter().any(|word| keyword_hit(&company_lower, word)) {
            return industry.to_string();
        }
    }

    for (keywords, industry) in JOB_INDUSTRY_RULES {
        if keywords.iter().any(|word| keyword_hit(&job_lower, word)) {
            return industry.to_string();
        }
    }

    "Technology".to_string()
}

// Two-letter keywords like "ai" and "io" only count as whole tokens,
// otherwise "plain" would read as an AI company.
pub fn keyword_hit(text: &str, keyword: &str) -> bool {
    match keyword.len() > 2 {
        true => text.contains(keyword),
        false => text
            .split(|c: char| !c.is_alphanumeric())
            .any(|token| token == keyword),
    }
}

fn title_case(words: &str) -> String {
    words
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
