use thiserror::Error;
use vacancy_scraper::headhunter::HeadHunterConfig;
use vacancy_scraper::superjob::SuperJobConfig;

use crate::Target;

pub const SUPERJOB_SECRET_KEY: &str = "SUPERJOB_SECRET_KEY";

pub const DEFAULT_LANGUAGES: [&str; 8] = [
    "Python",
    "Java",
    "Golang",
    "Javascript",
    "Ruby",
    "PHP",
    "C++",
    "1С",
];

#[derive(Debug, Error)]
pub enum Error {
    #[error("Environment variable '{0}' not set")]
    MissingSecret(&'static str),
    #[error(transparent)]
    Scraper(#[from] vacancy_scraper::Error),
}

/// Resolved configuration of one provider
#[derive(Debug)]
pub enum ProviderConfig {
    HeadHunter(HeadHunterConfig),
    SuperJob(SuperJobConfig),
}

/// Build the provider configurations for the selected targets.
///
/// `lookup` resolves environment variables, every required secret is
/// checked here so that a missing one fails before any request is made.
pub fn resolve<F>(
    targets: &[Target],
    max_pages: Option<u32>,
    lookup: F,
) -> Result<Vec<ProviderConfig>, Error>
where
    F: Fn(&str) -> Option<String>,
{
    targets
        .iter()
        .map(|target| match target {
            Target::Hh => {
                let mut config = HeadHunterConfig::default();
                if let Some(max_pages) = max_pages {
                    config.max_pages = max_pages;
                }
                Ok(ProviderConfig::HeadHunter(config))
            }
            Target::Superjob => {
                let api_key = lookup(SUPERJOB_SECRET_KEY)
                    .filter(|key| !key.is_empty())
                    .ok_or(Error::MissingSecret(SUPERJOB_SECRET_KEY))?;
                let mut config = SuperJobConfig::new(api_key);
                if let Some(max_pages) = max_pages {
                    config.max_pages = max_pages;
                }
                Ok(ProviderConfig::SuperJob(config))
            }
        })
        .collect()
}
