use serde::{Deserialize, Serialize};

const ENTRIES_PER_LOOKUP: u32 = 10;

/// Email-directory collaborator. Same failure contract as the company
/// finder: any error is an empty entry list for that domain.
pub struct ContactDirectory {
    client: reqwest::Client,
    api_key: String,
    url: String,
}

#[derive(Serialize)]
struct LookupQuery {
    domain: String,
    api_key: String,
    limit: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectoryEntry {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default, rename = "value")]
    pub email: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub confidence: u32,
}

#[derive(Deserialize, Default)]
struct LookupPayload {
    #[serde(default)]
    emails: Vec<DirectoryEntry>,
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    data: LookupPayload,
}

impl ContactDirectory {
    pub fn new(api_key: String) -> Self {
        let client = reqwest::Client::new();

        ContactDirectory {
            client,
            api_key,
            url: "https://api.hunter.io/v2/domain-search".to_string(),
        }
    }

    pub async fn lookup(&self, domain: &str) -> Vec<DirectoryEntry> {
        let lookup_query = LookupQuery {
            domain: domain.to_string(),
            api_key: self.api_key.clone(),
            limit: ENTRIES_PER_LOOKUP,
        };

        match self
            .client
            .get(self.url.clone())
            .query(&lookup_query)
            .send()
            .await
        {
            Ok(res) => match res.status().is_success() {
                true => match res.json::<LookupResponse>().await {
                    Ok(json) => json.data.emails,
                    Err(e) => {
                        log::error!("Error when deserializing directory entries: {:?}", e);
                        vec![]
                    }
                },
                false => {
                    log::error!(
                        "Contact directory returned status {} for domain: {}",
                        res.status(),
                        domain
                    );
                    vec![]
                }
            },
            Err(e) => {
                log::error!("Got error from contact directory api: {:?}", e);
                vec![]
            }
        }
    }
}
