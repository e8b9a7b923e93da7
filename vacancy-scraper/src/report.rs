use crate::stats::LanguageStat;

pub const HEADER: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

/// A row of the salary comparison table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportRow {
    Header,
    Language {
        language: String,
        found: u64,
        processed: u64,
        average_salary: u64,
    },
}

impl ReportRow {
    /// The row's cells, left to right
    pub fn cells(&self) -> [String; 4] {
        match self {
            Self::Header => HEADER.map(String::from),
            Self::Language {
                language,
                found,
                processed,
                average_salary,
            } => [
                language.clone(),
                found.to_string(),
                processed.to_string(),
                average_salary.to_string(),
            ],
        }
    }
}

/// Header row followed by one row per language, in the order given
pub fn build_rows(stats: &[(String, LanguageStat)]) -> Vec<ReportRow> {
    std::iter::once(ReportRow::Header)
        .chain(stats.iter().map(|(language, stat)| ReportRow::Language {
            language: language.clone(),
            found: stat.found,
            processed: stat.processed,
            average_salary: stat.average_salary,
        }))
        .collect()
}
