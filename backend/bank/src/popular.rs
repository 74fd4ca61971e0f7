//! # Popular Words
//!
//! Frequently used words grouped under a fixed set of named categories.
//!
//! Category names are matched exactly (case-sensitive). Unknown names are a
//! soft miss: callers get an empty list, never an error.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    #[serde(rename = "high")]
    High,
    #[serde(rename = "very high")]
    VeryHigh,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopularWord {
    pub turkish: &'static str,
    pub english: &'static str,
    pub example: &'static str,
    pub usage_frequency: Frequency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopularCategory {
    EssentialPhrases,
    CommonVerbs,
    FoodAndDrinks,
    QuestionWords,
    NumbersAndTime,
}

impl PopularCategory {
    pub const ALL: [PopularCategory; 5] = [
        PopularCategory::EssentialPhrases,
        PopularCategory::CommonVerbs,
        PopularCategory::FoodAndDrinks,
        PopularCategory::QuestionWords,
        PopularCategory::NumbersAndTime,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PopularCategory::EssentialPhrases => "Essential Phrases",
            PopularCategory::CommonVerbs => "Common Verbs",
            PopularCategory::FoodAndDrinks => "Food & Drinks",
            PopularCategory::QuestionWords => "Question Words",
            PopularCategory::NumbersAndTime => "Numbers & Time",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.name() == name)
    }

    pub fn words(self) -> &'static [PopularWord] {
        match self {
            PopularCategory::EssentialPhrases => ESSENTIAL_PHRASES,
            PopularCategory::CommonVerbs => COMMON_VERBS,
            PopularCategory::FoodAndDrinks => FOOD_AND_DRINKS,
            PopularCategory::QuestionWords => QUESTION_WORDS,
            PopularCategory::NumbersAndTime => NUMBERS_AND_TIME,
        }
    }
}

/// Every category keyed by display name. Keys iterate (and serialize) sorted.
pub fn popular_words() -> BTreeMap<&'static str, &'static [PopularWord]> {
    PopularCategory::ALL
        .into_iter()
        .map(|category| (category.name(), category.words()))
        .collect()
}

pub fn popular_words_in(name: &str) -> &'static [PopularWord] {
    PopularCategory::from_name(name)
        .map(PopularCategory::words)
        .unwrap_or_default()
}

const fn popular(
    turkish: &'static str,
    english: &'static str,
    example: &'static str,
    usage_frequency: Frequency,
) -> PopularWord {
    PopularWord {
        turkish,
        english,
        example,
        usage_frequency,
    }
}

use Frequency::{High, VeryHigh};

const ESSENTIAL_PHRASES: &[PopularWord] = &[
    popular("nasılsın", "how are you", "Merhaba, nasılsın?", VeryHigh),
    popular("hoş geldin", "welcome", "Evimize hoş geldin!", VeryHigh),
    popular("görüşürüz", "see you", "Yarın görüşürüz!", VeryHigh),
    popular("afiyet olsun", "enjoy your meal", "Afiyet olsun, güzel görünüyor.", VeryHigh),
    popular(
        "kolay gelsin",
        "may it be easy (said to someone working)",
        "Kolay gelsin, iyi çalışmalar!",
        VeryHigh,
    ),
];

const COMMON_VERBS: &[PopularWord] = &[
    popular("gitmek", "to go", "Okula gidiyorum.", VeryHigh),
    popular("gelmek", "to come", "Eve geliyorum.", VeryHigh),
    popular("yapmak", "to do/make", "Yemek yapıyorum.", VeryHigh),
    popular("istemek", "to want", "Su istiyorum.", VeryHigh),
    popular("bilmek", "to know", "Bilmiyorum.", VeryHigh),
];

const FOOD_AND_DRINKS: &[PopularWord] = &[
    popular("çorba", "soup", "Mercimek çorbası çok lezzetli.", High),
    popular("pilav", "rice", "Tavuklu pilav yedim.", High),
    popular("döner", "döner kebab", "Bir döner alabilir miyim?", High),
    popular("ayran", "yogurt drink", "Dönerle ayran iyi gider.", High),
    popular("baklava", "baklava", "Tatlı olarak baklava aldım.", High),
];

const QUESTION_WORDS: &[PopularWord] = &[
    popular("ne", "what", "Ne yapıyorsun?", VeryHigh),
    popular("nerede", "where", "Nerede oturuyorsun?", VeryHigh),
    popular("ne zaman", "when", "Ne zaman geleceksin?", VeryHigh),
    popular("neden", "why", "Neden geç kaldın?", VeryHigh),
    popular("nasıl", "how", "Nasıl giderim?", VeryHigh),
];

const NUMBERS_AND_TIME: &[PopularWord] = &[
    popular("bir", "one", "Bir dakika bekle.", VeryHigh),
    popular("iki", "two", "İki kişiyiz.", VeryHigh),
    popular("üç", "three", "Üç gün sonra.", VeryHigh),
    popular("saat", "hour/clock", "Saat kaç?", VeryHigh),
    popular("dakika", "minute", "Beş dakika kaldı.", VeryHigh),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_categories() {
        let all = popular_words();

        assert_eq!(all.len(), 5);
        for words in all.values() {
            assert_eq!(words.len(), 5);
        }
    }

    #[test]
    fn test_sorted_keys() {
        let keys: Vec<&str> = popular_words().into_keys().collect();

        assert_eq!(
            keys,
            [
                "Common Verbs",
                "Essential Phrases",
                "Food & Drinks",
                "Numbers & Time",
                "Question Words",
            ]
        );
    }

    #[test]
    fn test_food_in_order() {
        let food: Vec<&str> = popular_words_in("Food & Drinks")
            .iter()
            .map(|word| word.turkish)
            .collect();

        assert_eq!(food, ["çorba", "pilav", "döner", "ayran", "baklava"]);
    }

    #[test]
    fn test_soft_miss() {
        assert!(popular_words_in("Nonexistent").is_empty());
        assert!(popular_words_in("food & drinks").is_empty());
        assert!(popular_words_in("").is_empty());
    }

    #[test]
    fn test_name_round_trip() {
        for category in PopularCategory::ALL {
            assert_eq!(PopularCategory::from_name(category.name()), Some(category));
        }
    }

    #[test]
    fn test_frequency_wire_names() {
        let value = serde_json::to_value(popular_words_in("Common Verbs")[0]).unwrap();
        assert_eq!(value["usage_frequency"], "very high");

        let value = serde_json::to_value(popular_words_in("Food & Drinks")[0]).unwrap();
        assert_eq!(value["usage_frequency"], "high");
    }
}
