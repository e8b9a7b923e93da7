use vacancy_scraper::{build_rows, stats, Provider};

use crate::config::{Error, ProviderConfig};
use crate::table;

/// Collect the statistics of every language from one provider and render
/// them as a table.
pub async fn scrape(config: ProviderConfig, languages: &[String]) -> Result<String, Error> {
    let provider = match config {
        ProviderConfig::HeadHunter(config) => Provider::headhunter(config)?,
        ProviderConfig::SuperJob(config) => Provider::superjob(config)?,
    };
    let stats = stats::run(languages, &provider).await?;
    let rows = build_rows(&stats)
        .iter()
        .map(|row| row.cells())
        .collect::<Vec<_>>();
    Ok(table::render(provider.title(), &rows))
}
