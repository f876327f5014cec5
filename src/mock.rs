// Fixed demo content. Nothing here is fetched or written back.
use gloo::console::error;
use serde::Deserialize;

use crate::error::LoadError;
use crate::model::{
    CategoryPreference, DonationRecord, FoodOffer, HowItWorksStep, RequestRecord, StatCard,
    SummaryRow, Testimonial,
};

const MOCK_JSON: &str = include_str!("../data/mock.json");

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DonorData {
    pub display_name: String,
    pub stats: Vec<StatCard>,
    pub donations: Vec<DonationRecord>,
    pub monthly_impact: Vec<SummaryRow>,
    pub highlight: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RecipientData {
    pub display_name: String,
    pub stats: Vec<StatCard>,
    pub offers: Vec<FoodOffer>,
    pub requests: Vec<RequestRecord>,
    pub weekly_summary: Vec<SummaryRow>,
    pub radius_options: Vec<String>,
    pub categories: Vec<CategoryPreference>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct MockData {
    pub testimonials: Vec<Testimonial>,
    pub steps: Vec<HowItWorksStep>,
    pub partner_perks: Vec<String>,
    pub donor: DonorData,
    pub recipient: RecipientData,
}

impl MockData {
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn embedded() -> Result<Self, LoadError> {
        Self::from_json(MOCK_JSON)
    }
}

pub fn load_mock_data() -> MockData {
    MockData::embedded().unwrap_or_else(|e| {
        error!(format!("mock data: {e}"));
        MockData::default()
    })
}
