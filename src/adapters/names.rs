use crate::domain::model::{Participants, MIN_PARTICIPANTS};
use crate::utils::error::{Result, SantaError};

/// 解析以換行分隔的名單：去除前後空白、略過空行、保留首次出現順序去重
pub fn parse_names(source: &str, content: &str) -> Result<Participants> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let participants = Participants::from_names(lines.iter().copied());

    let duplicates = lines.len() - participants.len();
    if duplicates > 0 {
        tracing::debug!("Collapsed {} duplicate name(s) in {}", duplicates, source);
    }

    if participants.len() < MIN_PARTICIPANTS {
        return Err(SantaError::TooFewNames {
            path: source.to_string(),
            found: participants.len(),
            required: MIN_PARTICIPANTS,
        });
    }

    Ok(participants)
}
