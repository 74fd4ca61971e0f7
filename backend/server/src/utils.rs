use chrono::{Local, NaiveDate};

pub const DEFAULT_LESSON: i64 = 0;

/// Server-local calendar date, the key for the daily word.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonIndex {
    At(i64),
    /// Written as an integer but beyond `i64`, so never a valid lesson.
    Overflow,
}

/// Missing or non-numeric values fall back to the first lesson.
pub fn parse_lesson_index(raw: Option<&str>) -> LessonIndex {
    let Some(value) = raw.map(str::trim) else {
        return LessonIndex::At(DEFAULT_LESSON);
    };

    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return LessonIndex::At(DEFAULT_LESSON);
    }

    value
        .parse()
        .map_or(LessonIndex::Overflow, LessonIndex::At)
}

/// First value of `key`, repeated keys after it are ignored.
pub fn first_query_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}
