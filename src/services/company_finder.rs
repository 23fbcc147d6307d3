use serde::{Deserialize, Serialize};

const RESULTS_PER_QUERY: u32 = 20;

/// Job-listing search collaborator. Any transport or payload failure is an
/// empty result list for that query, never a pipeline error.
pub struct CompanyFinder {
    client: reqwest::Client,
    api_key: String,
    url: String,
}

#[derive(Serialize)]
struct SearchQuery {
    engine: String,
    q: String,
    location: String,
    api_key: String,
    hl: String,
    num: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub link: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic_results: Vec<RawSearchResult>,
}

impl CompanyFinder {
    pub fn new(api_key: String) -> Self {
        let client = reqwest::Client::new();

        CompanyFinder {
            client,
            api_key,
            url: "https://serpapi.com/search.json".to_string(),
        }
    }

    pub async fn search(&self, query: &str, location: &str) -> Vec<RawSearchResult> {
        let search_query = SearchQuery {
            engine: "google".to_string(),
            q: query.to_string(),
            location: location.to_string(),
            api_key: self.api_key.clone(),
            hl: "en".to_string(),
            num: RESULTS_PER_QUERY,
        };

        match self
            .client
            .get(self.url.clone())
            .query(&search_query)
            .send()
            .await
        {
            Ok(res) => match res.status().is_success() {
                true => match res.json::<SearchResponse>().await {
                    Ok(json) => {
                        log::info!(
                            "Found {} search results for query: {}",
                            json.organic_results.len(),
                            query
                        );
                        json.organic_results
                    }
                    Err(e) => {
                        log::error!("Error when deserializing search results: {:?}", e);
                        vec![]
                    }
                },
                false => {
                    log::error!(
                        "Company finder returned status {} for query: {}",
                        res.status(),
                        query
                    );
                    vec![]
                }
            },
            Err(e) => {
                log::error!("Got error from company finder api: {:?}", e);
                vec![]
            }
        }
    }
}
