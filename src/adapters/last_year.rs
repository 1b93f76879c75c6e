use crate::domain::model::{Exclusions, Participants};
use crate::utils::error::{Result, SantaError};

pub const PAIRING_SEPARATOR: &str = " buys for ";

/// 解析去年的結果（`<giver> buys for <giftee>`），每一行都變成今年的排除配對。
/// 空檔案只發出警告。
pub fn parse_last_year(
    source: &str,
    content: &str,
    participants: &Participants,
) -> Result<Exclusions<String>> {
    let mut exclusions = Exclusions::new();

    if content.trim().is_empty() {
        tracing::warn!("{} was empty; no previous pairings will be excluded", source);
        return Ok(exclusions);
    }

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let pieces: Vec<&str> = line.split(PAIRING_SEPARATOR).collect();
        let [giver, giftee] = pieces[..] else {
            return Err(SantaError::MalformedFile {
                path: source.to_string(),
                reason: format!(
                    "line {} should look like '<giver> buys for <giftee>'",
                    index + 1
                ),
            });
        };

        for name in [giver, giftee] {
            if !participants.contains(name) {
                return Err(SantaError::UnknownName {
                    path: source.to_string(),
                    name: name.to_string(),
                });
            }
        }

        exclusions.insert(giver.to_string(), giftee.to_string());
    }

    tracing::debug!("Read {} previous pairing(s) from {}", exclusions.len(), source);
    Ok(exclusions)
}
