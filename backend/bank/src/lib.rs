//! # Bank
//!
//! Immutable content for the Turkish learning service.
//!
//! Everything here is compiled in and never changes while the process runs:
//! - [`words::WORDS`]: vocabulary feeding the daily word
//! - [`lessons::LESSONS`]: grammar lessons, addressed by position
//! - [`popular`]: popular words grouped by category
//!
//! [`get_bank`] validates the content once at startup. A bank with no words
//! has no valid daily modulus, so it refuses to build rather than failing on
//! the first request.

use std::{collections::BTreeMap, num::NonZeroUsize};

use chrono::NaiveDate;
use thiserror::Error;

pub mod daily;
pub mod lessons;
pub mod popular;
pub mod words;

use daily::daily_index;
use lessons::{LESSONS, Lesson};
use popular::PopularWord;
use words::{WORDS, Word};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BankError {
    #[error("Vocabulary is empty, no daily word can be selected")]
    EmptyVocabulary,

    #[error("No grammar lessons defined")]
    EmptyLessons,
}

#[derive(Debug, Clone)]
pub struct Bank {
    words: &'static [Word],
    lessons: &'static [Lesson],
    word_count: NonZeroUsize,
}

impl Bank {
    pub fn new(words: &'static [Word], lessons: &'static [Lesson]) -> Result<Self, BankError> {
        let word_count = NonZeroUsize::new(words.len()).ok_or(BankError::EmptyVocabulary)?;

        if lessons.is_empty() {
            return Err(BankError::EmptyLessons);
        }

        Ok(Self {
            words,
            lessons,
            word_count,
        })
    }

    pub fn words(&self) -> &'static [Word] {
        self.words
    }

    pub fn lessons(&self) -> &'static [Lesson] {
        self.lessons
    }

    pub fn daily_word(&self, date: NaiveDate) -> &'static Word {
        let words = self.words;

        &words[daily_index(date, self.word_count)]
    }

    /// Bounds-checked lesson lookup. Negative indices are out of range.
    pub fn lesson(&self, index: i64) -> Option<&'static Lesson> {
        let lessons = self.lessons;

        usize::try_from(index)
            .ok()
            .and_then(|index| lessons.get(index))
    }

    pub fn popular_words(&self) -> BTreeMap<&'static str, &'static [PopularWord]> {
        popular::popular_words()
    }

    pub fn popular_words_in(&self, category: &str) -> &'static [PopularWord] {
        popular::popular_words_in(category)
    }
}

pub fn get_bank() -> Result<Bank, BankError> {
    Bank::new(WORDS, LESSONS)
}
