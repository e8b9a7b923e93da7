use crate::api::Result;
use crate::headhunter::{HeadHunterClient, HeadHunterConfig};
use crate::stats::{collect_stat, LanguageStat};
use crate::superjob::{SuperJobClient, SuperJobConfig};

/// The job-search providers salary statistics can be collected from
#[derive(Debug)]
pub enum Provider {
    HeadHunter(HeadHunterClient),
    SuperJob(SuperJobClient),
}

impl Provider {
    pub fn headhunter(config: HeadHunterConfig) -> Result<Self> {
        Ok(Self::HeadHunter(HeadHunterClient::new(config)?))
    }

    pub fn superjob(config: SuperJobConfig) -> Result<Self> {
        Ok(Self::SuperJob(SuperJobClient::new(config)?))
    }

    /// Caption of the provider's report table
    pub fn title(&self) -> &str {
        match self {
            Self::HeadHunter(client) => client.title(),
            Self::SuperJob(client) => client.title(),
        }
    }

    /// Fetch every vacancy for `language` and reduce them to a [`LanguageStat`]
    pub async fn language_stat(&self, language: &str) -> Result<LanguageStat> {
        match self {
            Self::HeadHunter(client) => collect_stat(client, language).await,
            Self::SuperJob(client) => collect_stat(client, language).await,
        }
    }
}
