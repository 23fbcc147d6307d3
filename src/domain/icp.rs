use serde::Deserialize;

/// Ideal Customer Profile, immutable for the whole run. Every field is
/// optional in the source document; absent fields disable the matching
/// score component instead of failing the parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Icp {
    #[serde(default)]
    pub industry: Vec<String>,
    #[serde(default)]
    pub geography: Vec<String>,
    #[serde(default)]
    pub employee_count_min: Option<u32>,
    #[serde(default)]
    pub employee_count_max: Option<u32>,
    #[serde(default)]
    pub revenue_min: Option<f64>,
    #[serde(default)]
    pub revenue_max: Option<f64>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub signals: IcpSignals,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IcpSignals {
    #[serde(default)]
    pub funding: bool,
    #[serde(default)]
    pub hiring_data_roles: bool,
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

impl Icp {
    pub fn search_location(&self) -> String {
        self.geography
            .first()
            .cloned()
            .unwrap_or_else(|| "United States".to_string())
    }
}
