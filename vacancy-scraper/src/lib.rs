pub mod api;
pub mod headhunter;
pub mod pagination;
pub mod provider;
pub mod report;
pub mod salary;
pub mod stats;
pub mod superjob;

pub use api::{Error, Result};
pub use provider::Provider;
pub use report::{build_rows, ReportRow};
pub use stats::LanguageStat;

/// Sent with every request, HeadHunter refuses anonymous clients
pub(crate) const USER_AGENT: &str = concat!("salary-stats/", env!("CARGO_PKG_VERSION"));
