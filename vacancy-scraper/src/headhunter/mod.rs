//! HeadHunter (`api.hh.ru`) vacancy search
pub mod types;

use async_trait::async_trait;
use reqwest::Client;

use crate::api::{decode_response, Result};
use crate::pagination::{Page, VacancyApi};
use crate::salary::estimate;
use types::{ApiResponse, SearchParams, Vacancy};

/// Only salaries in this currency are estimated
pub const LOCAL_CURRENCY: &str = "RUR";

const MOSCOW_AREA_ID: u32 = 1;

#[derive(Debug, Clone)]
pub struct HeadHunterConfig {
    /// full url of the vacancies endpoint
    pub base_url: String,
    pub title: String,
    /// HeadHunter area id the search is restricted to
    pub area: u32,
    pub only_with_salary: bool,
    pub per_page: u32,
    pub max_pages: u32,
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.hh.ru/vacancies".to_owned(),
            title: "HeadHunter Moscow".to_owned(),
            area: MOSCOW_AREA_ID,
            only_with_salary: true,
            per_page: 100,
            max_pages: 100,
        }
    }
}

#[derive(Debug)]
pub struct HeadHunterClient {
    client: Client,
    config: HeadHunterConfig,
}

impl HeadHunterClient {
    pub fn new(config: HeadHunterConfig) -> Result<Self> {
        let client = Client::builder().user_agent(crate::USER_AGENT).build()?;
        Ok(Self { client, config })
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }
}

#[async_trait]
impl VacancyApi for HeadHunterClient {
    type Vacancy = Vacancy;

    fn name(&self) -> &'static str {
        "headhunter"
    }

    fn max_pages(&self) -> u32 {
        self.config.max_pages
    }

    async fn fetch_page(&self, keyword: &str, page: u32) -> Result<Page<Vacancy>> {
        let params = SearchParams {
            text: keyword,
            area: self.config.area,
            only_with_salary: self.config.only_with_salary,
            per_page: self.config.per_page,
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
            items: body.items,
            found: body.found,
            has_more: page + 1 < body.pages,
        })
    }

    fn extract_salary(&self, vacancy: &Vacancy) -> Option<u64> {
        let salary = vacancy.salary.as_ref()?;
        if salary.currency != LOCAL_CURRENCY {
            return None;
        }
        estimate(salary.from, salary.to)
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::Error;
    use crate::pagination::fetch_vacancies;

    fn client_for(server: &MockServer) -> HeadHunterClient {
        HeadHunterClient::new(HeadHunterConfig {
            base_url: format!("{}/vacancies", server.uri()),
            ..Default::default()
        })
        .expect("client should build")
    }

    fn vacancy(id: &str, from: Option<u64>, to: Option<u64>, currency: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": format!("Developer {}", id),
            "salary": { "from": from, "to": to, "currency": currency, "gross": false }
        })
    }

    #[test]
    fn test_extract_salary_gates_currency() {
        let client = HeadHunterClient::new(HeadHunterConfig::default()).unwrap();
        let rub: Vacancy =
            serde_json::from_value(vacancy("1", Some(100_000), None, "RUR")).unwrap();
        let usd: Vacancy =
            serde_json::from_value(vacancy("2", Some(100_000), Some(200_000), "USD")).unwrap();
        let hidden: Vacancy =
            serde_json::from_value(json!({"id": "3", "name": "Developer", "salary": null})).unwrap();
        assert_eq!(client.extract_salary(&rub), Some(120_000));
        assert_eq!(client.extract_salary(&usd), None);
        assert_eq!(client.extract_salary(&hidden), None);
    }

    #[tokio::test]
    async fn test_fetch_sends_search_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/vacancies"))
            .and(query_param("text", "C++"))
            .and(query_param("area", "1"))
            .and(query_param("only_with_salary", "true"))
            .and(query_param("per_page", "100"))
            .and(query_param("page", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [vacancy("1", Some(1), Some(3), "RUR")],
                "found": 1,
                "pages": 1,
                "page": 0,
                "per_page": 100
            })))
            .expect(1)
            .mount(&server)
            .await;

        let set = fetch_vacancies(&client_for(&server), "C++")
            .await
            .expect("fetch should succeed");
        assert_eq!(set.total_found, 1);
        assert_eq!(set.vacancies.len(), 1);
        assert_eq!(set.vacancies[0].id, "1");
    }

    #[tokio::test]
    async fn test_fetch_follows_page_count() {
        let server = MockServer::start().await;
        for page in 0..3u32 {
            Mock::given(method("GET"))
                .and(path("/vacancies"))
                .and(query_param("page", page.to_string()))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "items": [vacancy(&page.to_string(), Some(100), None, "RUR")],
                    "found": 3,
                    "pages": 3
                })))
                .expect(1)
                .mount(&server)
                .await;
        }

        let set = fetch_vacancies(&client_for(&server), "Python")
            .await
            .expect("fetch should succeed");
        let ids: Vec<_> = set.vacancies.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2"]);
        assert_eq!(set.total_found, 3);
    }

    #[tokio::test]
    async fn test_error_status_aborts_fetch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/vacancies"))
            .and(query_param("page", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [],
                "found": 200,
                "pages": 2
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/vacancies"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&server)
            .await;

        let result = fetch_vacancies(&client_for(&server), "Java").await;
        match result {
            Err(Error::RequestNotOk { status, .. }) => assert_eq!(status.as_u16(), 503),
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_field_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/vacancies"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
            .mount(&server)
            .await;

        let result = fetch_vacancies(&client_for(&server), "Ruby").await;
        assert!(matches!(result, Err(Error::Decode(_))), "{:?}", result);
    }
}
