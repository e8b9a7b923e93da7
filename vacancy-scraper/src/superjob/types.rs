use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Vacancy {
    pub id: u64,
    pub profession: String,
    /// `0` when the employer left the bound out
    pub payment_from: Option<u64>,
    pub payment_to: Option<u64>,
    pub currency: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct ApiResponse {
    pub(crate) objects: Vec<Vacancy>,
    pub(crate) total: u64,
    pub(crate) more: bool,
}

#[derive(Serialize, Debug)]
pub(crate) struct SearchParams<'a> {
    pub(crate) town: &'a str,
    pub(crate) keyword: &'a str,
    pub(crate) count: u32,
    pub(crate) page: u32,
}
