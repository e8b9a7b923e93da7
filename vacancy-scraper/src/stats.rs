use serde::Serialize;

use crate::api::Result;
use crate::pagination::{fetch_vacancies, VacancyApi, VacancySet};
use crate::provider::Provider;

/// Salary statistics for one language on one provider
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageStat {
    /// total matches reported by the provider
    pub found: u64,
    /// vacancies with an estimable salary
    pub processed: u64,
    /// 0 when nothing was processed
    pub average_salary: u64,
}

/// Fold a vacancy set into its statistics using `extract` to estimate salaries.
///
/// Vacancies without an estimate, or with an estimate of zero, are skipped.
pub fn language_stat<V, F>(set: &VacancySet<V>, extract: F) -> LanguageStat
where
    F: Fn(&V) -> Option<u64>,
{
    let (processed, amount) = set
        .vacancies
        .iter()
        .filter_map(&extract)
        .filter(|salary| *salary > 0)
        .fold((0u64, 0u64), |(count, amount), salary| {
            (count + 1, amount.saturating_add(salary))
        });
    let average_salary = if processed > 0 { amount / processed } else { 0 };
    LanguageStat {
        found: set.total_found,
        processed,
        average_salary,
    }
}

pub(crate) async fn collect_stat<A>(api: &A, language: &str) -> Result<LanguageStat>
where
    A: VacancyApi,
{
    let set = fetch_vacancies(api, language).await?;
    let stat = language_stat(&set, |vacancy| api.extract_salary(vacancy));
    log::info!(
        "{}: {} found, {} processed, average salary {}",
        language,
        stat.found,
        stat.processed,
        stat.average_salary
    );
    Ok(stat)
}

/// Collect statistics for every language, one after another, in input order.
///
/// The first failing request aborts the run.
pub async fn run<S>(languages: &[S], provider: &Provider) -> Result<Vec<(String, LanguageStat)>>
where
    S: AsRef<str>,
{
    log::info!(
        "collecting salary statistics for {} languages from {}",
        languages.len(),
        provider.title()
    );
    let mut stats = Vec::with_capacity(languages.len());
    for language in languages {
        let language = language.as_ref();
        let stat = provider.language_stat(language).await?;
        stats.push((language.to_owned(), stat));
    }
    Ok(stats)
}
