//! SuperJob (`api.superjob.ru`) vacancy search
pub mod types;

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client,
};

use crate::api::{decode_response, Result};
use crate::pagination::{Page, VacancyApi};
use crate::salary::estimate;
use types::{ApiResponse, SearchParams, Vacancy};

const API_KEY_HEADER: &str = "x-api-app-id";

#[derive(Debug, Clone)]
pub struct SuperJobConfig {
    /// full url of the vacancies endpoint
    pub base_url: String,
    pub title: String,
    pub api_key: String,
    pub town: String,
    pub count: u32,
    pub max_pages: u32,
}

impl SuperJobConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: "https://api.superjob.ru/2.0/vacancies/".to_owned(),
            title: "SuperJob Moscow".to_owned(),
            api_key: api_key.into(),
            town: "Москва".to_owned(),
            count: 100,
            max_pages: 100,
        }
    }
}

#[derive(Debug)]
pub struct SuperJobClient {
    client: Client,
    config: SuperJobConfig,
}

impl SuperJobClient {
    pub fn new(config: SuperJobConfig) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(&config.api_key)?;
        api_key.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);
        let client = Client::builder()
            .user_agent(crate::USER_AGENT)
            .default_headers(headers)
            .build()?;
        Ok(Self { client, config })
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }
}

/// SuperJob reports a missing bound as `0`
fn bound(value: Option<u64>) -> Option<u64> {
    value.filter(|v| *v != 0)
}

#[async_trait]
impl VacancyApi for SuperJobClient {
    type Vacancy = Vacancy;

    fn name(&self) -> &'static str {
        "superjob"
    }

    fn max_pages(&self) -> u32 {
        self.config.max_pages
    }

    async fn fetch_page(&self, keyword: &str, page: u32) -> Result<Page<Vacancy>> {
        let params = SearchParams {
            town: &self.config.town,
            keyword,
            count: self.config.count,
            page,
        };
        let resp = self
            .client
            .get(&self.config.base_url)
            .query(&params)
            .send()
            .await?;
        let body: ApiResponse = decode_response(resp).await?;
        Ok(Page {
            items: body.objects,
            found: body.total,
            has_more: body.more,
        })
    }

    fn extract_salary(&self, vacancy: &Vacancy) -> Option<u64> {
        estimate(bound(vacancy.payment_from), bound(vacancy.payment_to))
    }
}
