use serde::{Deserialize, Serialize};

/// Revelation classification of a chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Revelation {
    Meccan,
    Medinan,
}

/// One of the 114 chapters (surahs), as resolved from the upstream list.
#[derive(Debug, Clone, Serialize)]
pub struct Chapter {
    pub number: u16,
    pub name: String,
    pub english_name: String,
    pub english_name_translation: String,
    pub verse_count: usize,
    pub revelation: Revelation,
    pub slug: String,
}

impl Chapter {
    /// Circular successor, used for continuous playback: 114 wraps to 1.
    pub fn next_number(&self) -> u16 {
        (self.number % 114) + 1
    }
}

/// Derive a URL-safe identifier from a display name: lowercase, runs of
/// non-alphanumeric characters collapsed to a single hyphen, leading and
/// trailing hyphens trimmed.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars().flat_map(|c| c.to_lowercase()) {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Al-Fatihah"), "al-fatihah");
        assert_eq!(slugify("Al-Mulk"), "al-mulk");
        assert_eq!(slugify("Ya-Sin"), "ya-sin");
    }

    #[test]
    fn test_slugify_collapses_runs_and_trims() {
        assert_eq!(slugify("  Al--'Imran  "), "al-imran");
        assert_eq!(slugify("Al-Waqi'ah"), "al-waqi-ah");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_slugify_idempotent() {
        for name in ["Al-Fatihah", "An-Nisa'", "Al-Waqi'ah", "At-Tawbah"] {
            let once = slugify(name);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn test_next_number_wraps() {
        let mut chapter = Chapter {
            number: 114,
            name: "الناس".into(),
            english_name: "An-Nas".into(),
            english_name_translation: "Mankind".into(),
            verse_count: 6,
            revelation: Revelation::Meccan,
            slug: "an-nas".into(),
        };
        assert_eq!(chapter.next_number(), 1);
        chapter.number = 67;
        assert_eq!(chapter.next_number(), 68);
    }
}
