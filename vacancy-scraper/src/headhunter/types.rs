use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Salary {
    pub from: Option<u64>,
    pub to: Option<u64>,
    pub currency: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Vacancy {
    pub id: String,
    pub name: String,
    /// absent or null when the employer did not publish a salary
    #[serde(default)]
    pub salary: Option<Salary>,
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct ApiResponse {
    pub(crate) items: Vec<Vacancy>,
    pub(crate) found: u64,
    pub(crate) pages: u32,
}

#[derive(Serialize, Debug)]
pub(crate) struct SearchParams<'a> {
    pub(crate) text: &'a str,
    pub(crate) area: u32,
    pub(crate) only_with_salary: bool,
    pub(crate) per_page: u32,
    pub(crate) page: u32,
}
