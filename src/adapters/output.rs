use crate::domain::model::Assignment;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 每行一組 `<giver> buys for <giftee>`，可直接當作明年的 lastyear 檔
    #[default]
    Text,
    Json,
}

pub fn render<T>(assignment: &Assignment<T>, format: OutputFormat) -> Result<String>
where
    T: Display + Serialize,
{
    match format {
        OutputFormat::Text => Ok(render_text(assignment)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(assignment)?;
            json.push('\n');
            Ok(json)
        }
    }
}

pub fn render_text<T: Display>(assignment: &Assignment<T>) -> String {
    assignment
        .iter()
        .map(|pairing| format!("{}\n", pairing))
        .collect()
}
