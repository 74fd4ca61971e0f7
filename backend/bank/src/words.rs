//! # Vocabulary
//!
//! The fixed word list used by the daily word.
//!
//! Order matters: the position of a word in [`WORDS`] is its index in the
//! daily rotation, so appending or removing entries reshuffles which word
//! lands on which date.

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Greetings,
    Common,
    Food,
    Objects,
    Furniture,
    Places,
    Transportation,
    Technology,
    Adjectives,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word {
    pub turkish: &'static str,
    pub english: &'static str,
    pub example: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

const fn word(
    turkish: &'static str,
    english: &'static str,
    example: &'static str,
    category: Category,
) -> Word {
    Word {
        turkish,
        english,
        example,
        category: Some(category),
        difficulty: None,
    }
}

use Category::*;

pub const WORDS: &[Word] = &[
    word("merhaba", "hello", "Merhaba, nasılsın?", Greetings),
    word("teşekkürler", "thank you", "Teşekkürler, çok naziksin.", Greetings),
    word("lütfen", "please", "Lütfen buraya gel.", Common),
    word("günaydın", "good morning", "Günaydın! Nasıl uyudun?", Greetings),
    word("iyi akşamlar", "good evening", "İyi akşamlar! Hoş geldiniz.", Greetings),
    word("hoşça kal", "goodbye", "Hoşça kal, yarın görüşürüz.", Greetings),
    word("evet", "yes", "Evet, ben de öyle düşünüyorum.", Common),
    word("hayır", "no", "Hayır, teşekkür ederim.", Common),
    word("su", "water", "Bir bardak su, lütfen.", Food),
    word("ekmek", "bread", "Taze ekmek aldım.", Food),
    word("kahve", "coffee", "Türk kahvesi içer misin?", Food),
    word("çay", "tea", "Çay her zaman iyidir.", Food),
    word("kitap", "book", "Bu kitap çok ilginç.", Objects),
    word("kalem", "pen", "Mavi kalem var mı?", Objects),
    word("masa", "table", "Masa üstünde ne var?", Furniture),
    word("sandalye", "chair", "Lütfen sandalyeye otur.", Furniture),
    word("ev", "house", "Evimiz çok güzel.", Places),
    word("okul", "school", "Okula yürüyerek gidiyorum.", Places),
    word("park", "park", "Parkta yürüyüş yapalım.", Places),
    word("hastane", "hospital", "Hastane nerede?", Places),
    word("araba", "car", "Yeni bir araba aldım.", Transportation),
    word("otobüs", "bus", "Otobüs beşte gelecek.", Transportation),
    word("telefon", "phone", "Telefonum çalıyor.", Technology),
    word("bilgisayar", "computer", "Bilgisayarım bozuldu.", Technology),
    word("güzel", "beautiful", "Ne güzel bir gün!", Adjectives),
];
