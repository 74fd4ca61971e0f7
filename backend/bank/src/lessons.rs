//! # Grammar Lessons
//!
//! Ordered lesson list, addressed by zero-based position.

use serde::Serialize;

use crate::words::Difficulty;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lesson {
    pub title: &'static str,
    pub content: &'static str,
    pub examples: &'static [&'static str],
    pub video_link: &'static str,
    pub difficulty: Difficulty,
}

pub const LESSONS: &[Lesson] = &[
    Lesson {
        title: "Basic Pronouns",
        content: concat!(
            "Turkish personal pronouns are essential for basic communication:\n",
            "        - Ben (I)\n",
            "        - Sen (You, informal)\n",
            "        - O (He/She/It)\n",
            "        - Biz (We)\n",
            "        - Siz (You, plural or formal)\n",
            "        - Onlar (They)\n",
            "        \n",
            "        These pronouns change form based on their role in the sentence (subject, object, possessive).",
        ),
        examples: &[
            "Ben Türkçe öğreniyorum. (I am learning Turkish)",
            "Sen nerelisin? (Where are you from?)",
            "O öğretmen. (He/She is a teacher)",
        ],
        video_link: "https://www.youtube.com/watch?v=EhqZBt7Uhyk",
        difficulty: Difficulty::Beginner,
    },
    Lesson {
        title: "Present Continuous Tense (-yor)",
        content: concat!(
            "The present continuous tense in Turkish is formed by adding -yor to the verb stem.\n",
            "        Steps:\n",
            "        1. Remove the -mek/-mak from the infinitive\n",
            "        2. Add appropriate buffer vowel (ı, i, u, ü)\n",
            "        3. Add -yor\n",
            "        4. Add personal ending",
        ),
        examples: &[
            "Yürü-yor-um (I am walking)",
            "Gel-iyor-sun (You are coming)",
            "Gid-iyor (He/She is going)",
        ],
        video_link: "https://www.youtube.com/watch?v=r-2osByMQGg",
        difficulty: Difficulty::Intermediate,
    },
    Lesson {
        title: "Vowel Harmony",
        content: concat!(
            "Turkish has two types of vowel harmony:\n",
            "        1. Two-fold (e/a): If the last vowel is 'e' or 'i', use 'e'; if it's 'a' or 'ı', use 'a'\n",
            "        2. Four-fold (i/ı/ü/u): Follow the rules of back/front and rounded/unrounded vowels",
        ),
        examples: &[
            "ev-ler (houses) - last vowel 'e' → use 'e'",
            "kitap-lar (books) - last vowel 'a' → use 'a'",
            "göz-lük (glasses) - last vowel 'ö' → use 'ü'",
        ],
        video_link: "https://www.youtube.com/watch?v=_FFQQAB2ds4",
        difficulty: Difficulty::Intermediate,
    },
    Lesson {
        title: "Simple Past Tense (-di)",
        content: concat!(
            "The simple past tense in Turkish uses the -di suffix (with vowel harmony):\n",
            "        -di, -dı, -du, -dü (after voiced consonants)\n",
            "        -ti, -tı, -tu, -tü (after unvoiced consonants)",
        ),
        examples: &["Gel-di-m (I came)", "Bak-tı-n (You looked)", "Git-ti (He/She went)"],
        video_link: "https://www.youtube.com/watch?v=fh1ptOu8Jl8",
        difficulty: Difficulty::Intermediate,
    },
    Lesson {
        title: "Possession Suffixes",
        content: concat!(
            "Possession in Turkish is shown by adding suffixes to nouns:\n",
            "        -(i)m - my\n",
            "        -(i)n - your\n",
            "        -(s)i - his/her\n",
            "        -(i)miz - our\n",
            "        -(i)niz - your (plural)\n",
            "        -leri - their",
        ),
        examples: &["ev-im (my house)", "kitab-ın (your book)", "araba-sı (his/her car)"],
        video_link: "https://www.youtube.com/watch?v=bH2iRwfBFPs",
        difficulty: Difficulty::Intermediate,
    },
    Lesson {
        title: "Locative Case (-de/-da)",
        content: concat!(
            "The locative case indicates location and uses -de/-da (with consonant harmony):\n",
            "        -de/-da (after voiced consonants)\n",
            "        -te/-ta (after unvoiced consonants)",
        ),
        examples: &["ev-de (at home)", "okul-da (at school)", "park-ta (at the park)"],
        video_link: "https://www.youtube.com/watch?v=sGYfKuYgyos",
        difficulty: Difficulty::Beginner,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_order() {
        let titles: Vec<&str> = LESSONS.iter().map(|lesson| lesson.title).collect();

        assert_eq!(
            titles,
            [
                "Basic Pronouns",
                "Present Continuous Tense (-yor)",
                "Vowel Harmony",
                "Simple Past Tense (-di)",
                "Possession Suffixes",
                "Locative Case (-de/-da)",
            ]
        );
    }

    #[test]
    fn test_every_lesson_has_examples() {
        for lesson in LESSONS {
            assert_eq!(lesson.examples.len(), 3, "{}", lesson.title);
            assert!(lesson.video_link.starts_with("https://www.youtube.com/"));
        }
    }

    #[test]
    fn test_serialized_difficulty() {
        let value = serde_json::to_value(LESSONS[0]).unwrap();

        assert_eq!(value["difficulty"], "beginner");
        assert_eq!(value["examples"][0], "Ben Türkçe öğreniyorum. (I am learning Turkish)");
        assert!(value["content"].as_str().unwrap().contains("- Onlar (They)"));
    }
}
