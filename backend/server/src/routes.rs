use std::{collections::BTreeMap, sync::Arc};

use axum::{
    Json,
    extract::{Path, Query, State},
    http::header::CONTENT_TYPE,
    response::{Html, IntoResponse},
};
use bank::{lessons::Lesson, popular::PopularWord, words::Word};
use serde::Serialize;
use tracing::debug;

use crate::{
    error::AppError,
    state::AppState,
    utils::{LessonIndex, first_query_value, parse_lesson_index, today},
};

/// Shown to every user until per-user progress is tracked.
pub const DEMO_PROGRESS: u32 = 30;

const INDEX_PAGE: &str = include_str!("../static/index.html");
const CLIENT_SCRIPT: &str = include_str!("../static/js/main.js");

#[derive(Serialize)]
pub struct Progress {
    progress: u32,
}

pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

pub async fn client_script_handler() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/javascript; charset=utf-8")], CLIENT_SCRIPT)
}

pub async fn daily_word_handler(State(state): State<Arc<AppState>>) -> Json<&'static Word> {
    let date = today();
    let word = state.bank.daily_word(date);

    debug!("Daily word for {date}: {}", word.turkish);

    Json(word)
}

pub async fn grammar_lesson_handler(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<&'static Lesson>, AppError> {
    let raw = first_query_value(&pairs, "lesson");

    let lesson = match parse_lesson_index(raw) {
        LessonIndex::At(index) => state
            .bank
            .lesson(index)
            .ok_or_else(|| index.to_string()),
        LessonIndex::Overflow => Err(raw.unwrap_or_default().trim().to_string()),
    };

    lesson.map(Json).map_err(|index| {
        debug!("Lesson {index} out of range");
        AppError::LessonNotFound(index)
    })
}

pub async fn progress_handler() -> Json<Progress> {
    Json(Progress {
        progress: DEMO_PROGRESS,
    })
}

pub async fn popular_words_handler(
    State(state): State<Arc<AppState>>,
) -> Json<BTreeMap<&'static str, &'static [PopularWord]>> {
    Json(state.bank.popular_words())
}

pub async fn popular_category_handler(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Json<&'static [PopularWord]> {
    Json(state.bank.popular_words_in(&category))
}
