use async_stream::try_stream;
use async_trait::async_trait;
use futures::{Stream, TryStreamExt};

use crate::api::{Error, Result};

/// One page of search results, normalized across providers
#[derive(Debug)]
pub struct Page<V> {
    pub items: Vec<V>,
    /// total number of matches the provider reports for the query
    pub found: u64,
    /// whether the provider has another page after this one
    pub has_more: bool,
}

/// All vacancies retrieved for one keyword from one provider
#[derive(Debug)]
pub struct VacancySet<V> {
    pub vacancies: Vec<V>,
    pub total_found: u64,
}

impl<V> Default for VacancySet<V> {
    fn default() -> Self {
        Self {
            vacancies: Vec::new(),
            total_found: 0,
        }
    }
}

/// Capabilities shared by the job-search providers
#[async_trait]
pub trait VacancyApi: Sync {
    type Vacancy: Send;

    /// Human readable provider name used in logs
    fn name(&self) -> &'static str;

    /// Upper bound on pages requested for a single keyword
    fn max_pages(&self) -> u32;

    /// Request a single page of vacancies, `page` starts at 0
    async fn fetch_page(&self, keyword: &str, page: u32) -> Result<Page<Self::Vacancy>>;

    /// Estimate the salary of a vacancy in roubles, `None` if not estimable
    fn extract_salary(&self, vacancy: &Self::Vacancy) -> Option<u64>;
}

/// Stream the pages of a search until the provider signals there are no more.
///
/// Fails with [`Error::PageLimitExceeded`] instead of requesting more than
/// [`VacancyApi::max_pages`] pages.
pub fn pages<'a, A>(api: &'a A, keyword: &'a str) -> impl Stream<Item = Result<Page<A::Vacancy>>> + 'a
where
    A: VacancyApi,
{
    try_stream! {
        let mut page = 0;
        loop {
            if page >= api.max_pages() {
                Err::<(), _>(Error::PageLimitExceeded {
                    keyword: keyword.to_owned(),
                    limit: api.max_pages(),
                })?;
            }
            log::debug!("requesting page {} from {}, keyword: {}", page, api.name(), keyword);
            let result = api.fetch_page(keyword, page).await?;
            let has_more = result.has_more;
            yield result;
            if !has_more {
                break;
            }
            page += 1;
        }
    }
}

/// Fetch every vacancy for a keyword, accumulated in page order.
///
/// Any failing page aborts the whole fetch.
pub async fn fetch_vacancies<A>(api: &A, keyword: &str) -> Result<VacancySet<A::Vacancy>>
where
    A: VacancyApi,
{
    let pages = pages(api, keyword);
    tokio::pin!(pages);
    let mut set = VacancySet::default();
    while let Some(page) = pages.try_next().await? {
        set.total_found = page.found;
        set.vacancies.extend(page.items);
    }
    log::info!(
        "retrieved {} of {} vacancies from {}, keyword: {}",
        set.vacancies.len(),
        set.total_found,
        api.name(),
        keyword
    );
    Ok(set)
}
