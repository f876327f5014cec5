use gloo::console::warn;
use serde::Deserialize;
use web_sys::window;

use crate::error::LoadError;

const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub brand_name: String,
    pub counter_tick_ms: u32,
    pub counter_steps: u32,
    pub daily_meals_target: u64,
    pub monthly_meals_target: u64,
    pub people_helped_target: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand_name: "Smart Surplus".to_string(),
            counter_tick_ms: 30,
            counter_steps: 100,
            daily_meals_target: 1247,
            monthly_meals_target: 35680,
            people_helped_target: 8934,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Text of `<script id="app-config" type="application/json">`, if the page has one.
fn config_json_from_dom() -> Result<Option<String>, LoadError> {
    let win = window().ok_or(LoadError::NoWindow)?;
    let Some(doc) = win.document() else {
        return Err(LoadError::NoWindow);
    };
    Ok(doc
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content()))
}

pub fn load_config() -> AppConfig {
    let json = match config_json_from_dom() {
        Ok(Some(json)) if !json.trim().is_empty() => json,
        Ok(_) => return AppConfig::default(),
        Err(e) => {
            warn!(format!("config: {e}; using defaults"));
            return AppConfig::default();
        }
    };
    AppConfig::from_json(&json).unwrap_or_else(|e| {
        warn!(format!("config: {e}; using defaults"));
        AppConfig::default()
    })
}
