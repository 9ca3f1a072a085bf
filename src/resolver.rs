//! Maps a human-readable chapter identifier to a chapter.
//!
//! Identifiers come from URLs: either a chapter number (`"67"`) or the slug
//! of an English display name (`"al-fatihah"`). Lookup consults the full
//! upstream chapter list on every call; the list is small and the response
//! lives only for one page view.

use crate::api::QuranApi;
use crate::app::{MushafError, Result};
use crate::domain::{slugify, Chapter};

pub async fn resolve_chapter(api: &QuranApi, identifier: &str) -> Result<Chapter> {
    let chapters = api.list_chapters().await?;

    let found = match identifier.parse::<u16>() {
        Ok(number) => chapters.into_iter().find(|c| c.number == number),
        Err(_) => chapters
            .into_iter()
            .find(|c| slugify(&c.english_name) == identifier),
    };

    found
        .map(Chapter::from)
        .ok_or_else(|| MushafError::ChapterNotFound(identifier.to_string()))
}
