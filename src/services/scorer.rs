use std::collections::HashSet;

use crate::domain::company::Company;
use crate::domain::icp::Icp;

pub const INDUSTRY_WEIGHT: f64 = 0.4;
pub const FUNDING_WEIGHT: f64 = 0.3;
pub const HIRING_WEIGHT: f64 = 0.2;
pub const EMPLOYEE_WEIGHT: f64 = 0.1;

const LARGE_FUNDING_AMOUNT: f64 = 50_000_000.0;
const MEDIUM_FUNDING_AMOUNT: f64 = 10_000_000.0;

/// Score every company against the ICP and rank the list best-first. Ties
/// keep their prior relative order (the sort is stable).
pub fn score_companies(companies: &mut Vec<Company>, icp: &Icp) {
    log::info!("Calculating confidence scores for {} companies", companies.len());

    for company in companies.iter_mut() {
        let score = INDUSTRY_WEIGHT * industry_match(company, icp)
            + FUNDING_WEIGHT * funding_score(company, icp)
            + HIRING_WEIGHT * hiring_score(company, icp)
            + EMPLOYEE_WEIGHT * employee_score(company, icp);

        company.confidence = (score * 100.0).round() / 100.0;
    }

    companies.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

fn industry_match(company: &Company, icp: &Icp) -> f64 {
    if icp.industry.is_empty() {
        return 0.0;
    }

    let company_industry = company.industry.to_lowercase();
    if company_industry.is_empty() {
        return 0.0;
    }

    for target_industry in &icp.industry {
        if company_industry.contains(&target_industry.to_lowercase()) {
            return 1.0;
        }
    }

    let company_words: HashSet<&str> = company_industry.split_whitespace().collect();
    for target_industry in &icp.industry {
        let target_lower = target_industry.to_lowercase();
        let target_words: HashSet<&str> = target_lower.split_whitespace().collect();

        if target_words.intersection(&company_words).next().is_some() {
            return 0.5;
        }
    }

    0.0
}

fn funding_score(company: &Company, icp: &Icp) -> f64 {
    if !icp.signals.funding {
        return 0.0;
    }

    let signals = &company.signals;
    if signals.new_funding {
        return if signals.funding_amount > LARGE_FUNDING_AMOUNT {
            1.0
        } else if signals.funding_amount > MEDIUM_FUNDING_AMOUNT {
            0.8
        } else {
            0.6
        };
    }

    // Funding history without a recent round is a weak signal.
    match signals.funding_round.is_some() {
        true => 0.3,
        false => 0.0,
    }
}

fn hiring_score(company: &Company, icp: &Icp) -> f64 {
    if !icp.signals.hiring_data_roles {
        return 0.0;
    }

    match company.signals.recent_hiring {
        true => 1.0,
        false => 0.0,
    }
}

fn employee_score(company: &Company, icp: &Icp) -> f64 {
    let Some(employee_min) = icp.employee_count_min.filter(|min| *min > 0) else {
        return 0.0;
    };
    let Some(employee_count) = company.employee_count.filter(|count| *count > 0) else {
        return 0.0;
    };

    let employee_count = f64::from(employee_count);
    let employee_min = f64::from(employee_min);

    if employee_count >= employee_min {
        1.0
    } else if employee_count >= employee_min * 0.8 {
        0.5
    } else if employee_count >= employee_min * 0.5 {
        0.2
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::company::Signals;
    use crate::domain::icp::IcpSignals;

    fn company(name: &str) -> Company {
        Company {
            company_name: name.to_string(),
            domain: "example.com".to_string(),
            industry: "Software & Technology".to_string(),
            employee_count: Some(200),
            revenue: None,
            location: "United States".to_string(),
            funding_stage: None,
            tech_stack: None,
            contacts: vec![],
            signals: Signals {
                recent_hiring: true,
                ..Signals::default()
            },
            source: vec!["job-listing search".to_string()],
            confidence: 0.0,
            smart_enriched: false,
        }
    }

    fn demanding_icp() -> Icp {
        Icp {
            industry: vec!["Software & Technology".to_string()],
            employee_count_min: Some(100),
            signals: IcpSignals {
                funding: true,
                hiring_data_roles: true,
                tech_stack: vec![],
            },
            ..Icp::default()
        }
    }

    #[test]
    fn confidence_equals_documented_weighted_sum() {
        let mut target = company("Acme Corp");
        target.signals.new_funding = true;
        target.signals.funding_amount = 60_000_000.0;

        let mut companies = vec![target];
        score_companies(&mut companies, &demanding_icp());

        // 0.4*1.0 + 0.3*1.0 + 0.2*1.0 + 0.1*1.0
        assert_eq!(companies[0].confidence, 1.0);
    }

    #[test]
    fn confidence_is_always_within_unit_interval() {
        let cases = vec![
            company("No Signals"),
            {
                let mut c = company("Partial Industry");
                c.industry = "Technology Consulting".to_string();
                c.employee_count = Some(60);
                c
            },
            {
                let mut c = company("Empty Industry");
                c.industry = String::new();
                c.employee_count = None;
                c
            },
        ];

        let mut companies = cases;
        score_companies(&mut companies, &demanding_icp());

        for company in &companies {
            assert!(company.confidence >= 0.0 && company.confidence <= 1.0);
        }
    }

    #[test]
    fn industry_substring_beats_word_overlap() {
        let icp = demanding_icp();

        let exact = company("Exact");
        assert_eq!(industry_match(&exact, &icp), 1.0);

        let mut partial = company("Partial");
        partial.industry = "Technology Consulting".to_string();
        assert_eq!(industry_match(&partial, &icp), 0.5);

        let mut none = company("None");
        none.industry = "Agriculture".to_string();
        assert_eq!(industry_match(&none, &icp), 0.0);
    }

    #[test]
    fn funding_score_tiers_by_amount() {
        let icp = demanding_icp();
        let mut c = company("Funded");

        c.signals.new_funding = true;
        c.signals.funding_amount = 60_000_000.0;
        assert_eq!(funding_score(&c, &icp), 1.0);

        c.signals.funding_amount = 20_000_000.0;
        assert_eq!(funding_score(&c, &icp), 0.8);

        c.signals.funding_amount = 1_000_000.0;
        assert_eq!(funding_score(&c, &icp), 0.6);

        c.signals.new_funding = false;
        c.signals.funding_round = Some("Series A".to_string());
        assert_eq!(funding_score(&c, &icp), 0.3);

        c.signals.funding_round = None;
        assert_eq!(funding_score(&c, &icp), 0.0);
    }

    #[test]
    fn funding_and_hiring_scores_are_gated_by_icp_signals() {
        let mut ungated = demanding_icp();
        ungated.signals.funding = false;
        ungated.signals.hiring_data_roles = false;

        let mut c = company("Gated");
        c.signals.new_funding = true;
        c.signals.funding_amount = 60_000_000.0;

        assert_eq!(funding_score(&c, &ungated), 0.0);
        assert_eq!(hiring_score(&c, &ungated), 0.0);
    }

    #[test]
    fn employee_score_is_monotonic_in_the_gap_below_minimum() {
        let icp = demanding_icp(); // minimum 100

        let score_at = |count: u32| {
            let mut c = company("Sized");
            c.employee_count = Some(count);
            employee_score(&c, &icp)
        };

        assert_eq!(score_at(150), 1.0);
        assert_eq!(score_at(100), 1.0);
        assert_eq!(score_at(80), 0.5);
        assert_eq!(score_at(50), 0.2);
        assert_eq!(score_at(49), 0.0);

        let descending = [score_at(150), score_at(99), score_at(79), score_at(49)];
        assert!(descending.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn employee_score_requires_both_sides() {
        let mut icp = demanding_icp();
        let mut c = company("Unknown Size");

        c.employee_count = None;
        assert_eq!(employee_score(&c, &icp), 0.0);

        c.employee_count = Some(500);
        icp.employee_count_min = None;
        assert_eq!(employee_score(&c, &icp), 0.0);
    }

    #[test]
    fn ranking_is_descending_and_stable_on_ties() {
        let mut first = company("First Half");
        first.industry = "Technology Consulting".to_string(); // partial match
        let mut top = company("Top");
        let mut second = company("Second Half");
        second.industry = "Platform Technology".to_string(); // partial match

        // Strip everything except industry + hiring so scores are exact.
        for c in [&mut first, &mut top, &mut second] {
            c.employee_count = None;
        }
        let mut icp = demanding_icp();
        icp.signals.funding = false;
        icp.employee_count_min = None;

        // first: 0.4*0.5 + 0.2 = 0.4, top: 0.4 + 0.2 = 0.6, second: 0.4
        let mut companies = vec![first, top, second];
        score_companies(&mut companies, &icp);

        assert_eq!(companies[0].company_name, "Top");
        assert_eq!(companies[1].company_name, "First Half");
        assert_eq!(companies[2].company_name, "Second Half");
        assert_eq!(companies[1].confidence, companies[2].confidence);
    }
}
