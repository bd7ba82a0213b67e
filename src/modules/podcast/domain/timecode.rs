// src/modules/podcast/domain/timecode.rs

use crate::modules::content::domain::documents::Segment;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimecodeError {
    #[error("Timecode is empty")]
    Empty,

    #[error("Invalid timecode `{0}`: expected mm:ss or h:mm:ss")]
    InvalidFormat(String),

    #[error("Invalid timecode `{0}`: minutes and seconds must be below 60")]
    OutOfRange(String),
}

/// Parses `mm:ss` or `h:mm:ss` into whole seconds.
///
/// The leading unit is unbounded (`75:00` is 4500), every later unit must be below 60.
pub fn convert_timestamp_to_seconds(timestamp: &str) -> Result<u32, TimecodeError> {
    let trimmed = timestamp.trim();
    if trimmed.is_empty() {
        return Err(TimecodeError::Empty);
    }

    let invalid = || TimecodeError::InvalidFormat(timestamp.to_string());

    let parts = trimmed
        .split(':')
        .map(|p| {
            if p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            p.parse::<u32>().map_err(|_| invalid())
        })
        .collect::<Result<Vec<u32>, TimecodeError>>()?;

    if !(2..=3).contains(&parts.len()) {
        return Err(invalid());
    }

    if parts[1..].iter().any(|&n| n >= 60) {
        return Err(TimecodeError::OutOfRange(timestamp.to_string()));
    }

    parts
        .iter()
        .try_fold(0u32, |acc, &n| acc.checked_mul(60)?.checked_add(n))
        .ok_or_else(invalid)
}

/// `65` → `1:05`, `3725` → `1:02:05`.
pub fn format_time(total_seconds: u32) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// The segment playing at `position`: the latest start at or before it.
/// Segments with malformed timestamps are ignored.
pub fn active_segment(segments: &[Segment], position: u32) -> Option<&Segment> {
    segments
        .iter()
        .filter_map(|s| {
            convert_timestamp_to_seconds(&s.timestamp)
                .ok()
                .map(|start| (start, s))
        })
        .filter(|(start, _)| *start <= position)
        .max_by_key(|(start, _)| *start)
        .map(|(_, s)| s)
}
