//! Typed client for the upstream alquran.cloud-style REST API.
//!
//! Every endpoint wraps its payload in a `{ "data": ... }` envelope. The
//! decode step here is the only place upstream JSON is touched: a non-2xx
//! status or a payload that does not match the expected shape fails with an
//! explicit error instead of surfacing as a panic somewhere downstream.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::app::{MushafError, Result};
use crate::domain::{slugify, Chapter, Revelation};
use crate::fetcher::{FetchedResponse, ResilientFetcher};

/// Upstream edition identifiers used by every assembly.
pub const DEFAULT_TRANSLATION_EDITION: &str = "en.asad";
pub const AUDIO_EDITION: &str = "ar.alafasy";
pub const TRANSLITERATION_EDITION: &str = "en.transliteration";

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// One chapter as listed by `GET /surah`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterPayload {
    pub number: u16,
    pub name: String,
    pub english_name: String,
    pub english_name_translation: String,
    pub number_of_ayahs: usize,
    pub revelation_type: Revelation,
}

/// One chapter with its verses, as returned by `GET /surah/{n}[/{edition}]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterVersesPayload {
    pub number: u16,
    pub name: String,
    pub english_name: String,
    pub english_name_translation: String,
    pub number_of_ayahs: usize,
    pub revelation_type: Revelation,
    pub ayahs: Vec<VersePayload>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersePayload {
    pub number: u32,
    pub text: String,
    pub number_in_surah: u32,
    pub juz: u8,
    pub audio: Option<String>,
}

impl From<ChapterPayload> for Chapter {
    fn from(payload: ChapterPayload) -> Self {
        let slug = slugify(&payload.english_name);
        Chapter {
            number: payload.number,
            name: payload.name,
            english_name: payload.english_name,
            english_name_translation: payload.english_name_translation,
            verse_count: payload.number_of_ayahs,
            revelation: payload.revelation_type,
            slug,
        }
    }
}

impl ChapterVersesPayload {
    /// The chapter metadata carried alongside the verses.
    pub fn chapter(&self) -> Chapter {
        Chapter {
            number: self.number,
            name: self.name.clone(),
            english_name: self.english_name.clone(),
            english_name_translation: self.english_name_translation.clone(),
            verse_count: self.number_of_ayahs,
            revelation: self.revelation_type,
            slug: slugify(&self.english_name),
        }
    }
}

pub struct QuranApi {
    base: Url,
    fetcher: ResilientFetcher,
}

impl QuranApi {
    /// `base` must be the versioned API root, e.g. `https://api.alquran.cloud/v1/`.
    pub fn new(mut base: Url, fetcher: ResilientFetcher) -> Self {
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        Self { base, fetcher }
    }

    /// The full 114-chapter list.
    pub async fn list_chapters(&self) -> Result<Vec<ChapterPayload>> {
        let url = format!("{}surah", self.base);
        let response = self.fetcher.get(&url).await?;
        decode(&url, response)
    }

    /// Source-script verses for one chapter.
    pub async fn chapter_verses(&self, number: u16) -> Result<ChapterVersesPayload> {
        let url = format!("{}surah/{}", self.base, number);
        let response = self.fetcher.get(&url).await?;
        decode(&url, response)
    }

    /// Verses for one chapter in a specific edition (translation, audio,
    /// or transliteration).
    pub async fn chapter_edition(
        &self,
        number: u16,
        edition: &str,
    ) -> Result<ChapterVersesPayload> {
        let url = format!("{}surah/{}/{}", self.base, number, edition);
        let response = self.fetcher.get(&url).await?;
        decode(&url, response)
    }
}

fn decode<T: DeserializeOwned>(url: &str, response: FetchedResponse) -> Result<T> {
    if !response.is_success() {
        return Err(MushafError::UpstreamStatus {
            url: url.to_string(),
            status: response.status,
        });
    }

    let envelope: Envelope<T> = serde_json::from_slice(&response.body)
        .map_err(|e| MushafError::Malformed(format!("{}: {}", url, e)))?;

    Ok(envelope.data)
}
