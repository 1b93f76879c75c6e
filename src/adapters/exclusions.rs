use crate::domain::model::{Exclusions, Participants};
use crate::utils::error::{Result, SantaError};

/// 逐行讀取排除檔，並記錄目前行號供錯誤訊息使用
struct LineCursor<'a> {
    source: &'a str,
    lines: std::str::Lines<'a>,
    line_number: usize,
}

impl<'a> LineCursor<'a> {
    fn new(source: &'a str, content: &'a str) -> Self {
        Self {
            source,
            lines: content.lines(),
            line_number: 0,
        }
    }

    fn next_line(&mut self, expected: &str) -> Result<&'a str> {
        self.line_number += 1;
        self.lines
            .next()
            .map(str::trim)
            .ok_or_else(|| self.malformed(format!("expected {} on line {}", expected, self.line_number)))
    }

    fn next_count(&mut self, expected: &str) -> Result<usize> {
        let line = self.next_line(expected)?;
        line.parse::<usize>().map_err(|_| {
            self.malformed(format!(
                "expected {} on line {}, found '{}'",
                expected, self.line_number, line
            ))
        })
    }

    fn next_name(&mut self, expected: &str, participants: &Participants) -> Result<&'a str> {
        let name = self.next_line(expected)?;
        if name.is_empty() {
            return Err(self.malformed(format!(
                "expected {} on line {}, found a blank line",
                expected, self.line_number
            )));
        }
        if !participants.contains(name) {
            return Err(SantaError::UnknownName {
                path: self.source.to_string(),
                name: name.to_string(),
            });
        }
        Ok(name)
    }

    fn remaining_non_blank(&mut self) -> usize {
        self.lines.by_ref().filter(|line| !line.trim().is_empty()).count()
    }

    fn malformed(&self, reason: String) -> SantaError {
        SantaError::MalformedFile {
            path: self.source.to_string(),
            reason,
        }
    }
}

/// 解析排除檔：
///
/// ```text
/// <numEntries>
/// <giver>
/// <numExclusions>
/// <giftee>...
/// ```
///
/// 所有名字都必須出現在名單中。回傳讀到的排除配對（重複的只算一次）。
pub fn parse_exclusions(
    source: &str,
    content: &str,
    participants: &Participants,
) -> Result<Exclusions<String>> {
    if content.trim().is_empty() {
        return Err(SantaError::MalformedFile {
            path: source.to_string(),
            reason: "file is empty".to_string(),
        });
    }

    let mut cursor = LineCursor::new(source, content);
    let mut exclusions = Exclusions::new();

    let entries = cursor.next_count("the number of entries")?;
    for _ in 0..entries {
        let giver = cursor.next_name("a giver name", participants)?;
        let count = cursor.next_count(&format!("the number of exclusions for {}", giver))?;
        for _ in 0..count {
            let giftee = cursor.next_name(&format!("an excluded name for {}", giver), participants)?;
            exclusions.insert(giver.to_string(), giftee.to_string());
        }
    }

    let extra = cursor.remaining_non_blank();
    if extra > 0 {
        tracing::warn!(
            "{} has {} line(s) after the declared {} entries; ignoring them",
            source,
            extra,
            entries
        );
    }

    tracing::debug!("Read {} exclusion(s) from {}", exclusions.len(), source);
    Ok(exclusions)
}
