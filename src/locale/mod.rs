pub mod strings;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::app::MushafError;

/// A UI language from the fixed supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ar,
    Id,
    Ja,
    Zh,
    Ko,
}

pub const ALL_LOCALES: [Locale; 6] = [
    Locale::En,
    Locale::Ar,
    Locale::Id,
    Locale::Ja,
    Locale::Zh,
    Locale::Ko,
];

pub const DEFAULT_LOCALE: Locale = Locale::En;

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
            Locale::Id => "id",
            Locale::Ja => "ja",
            Locale::Zh => "zh",
            Locale::Ko => "ko",
        }
    }

    /// Upstream edition identifier for this locale's verse translation.
    ///
    /// Arabic has no translation edition: it is the source script itself.
    pub fn edition(&self) -> Option<&'static str> {
        match self {
            Locale::En => Some("en.asad"),
            Locale::Ar => None,
            Locale::Id => Some("id.indonesian"),
            Locale::Ja => Some("ja.japanese"),
            Locale::Zh => Some("zh.chinese"),
            Locale::Ko => Some("ko.korean"),
        }
    }

    /// Shown in place of a verse translation that could not be loaded.
    pub fn unavailable_placeholder(&self) -> &'static str {
        match self {
            Locale::En | Locale::Ar => "Translation not available",
            Locale::Id => "Terjemahan tidak tersedia",
            Locale::Ja => "翻訳がありません",
            Locale::Zh => "翻译不可用",
            Locale::Ko => "번역을 사용할 수 없습니다",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = MushafError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            "id" => Ok(Locale::Id),
            "ja" => Ok(Locale::Ja),
            "zh" => Ok(Locale::Zh),
            "ko" => Ok(Locale::Ko),
            other => Err(MushafError::UnknownLocale(other.to_string())),
        }
    }
}

/// Resolve the session language once, from explicit inputs.
///
/// A valid URL parameter overrides a valid stored preference; anything
/// unrecognized is skipped. Falls back to English.
pub fn resolve_locale(stored: Option<&str>, url_param: Option<&str>) -> Locale {
    url_param
        .and_then(|s| s.parse().ok())
        .or_else(|| stored.and_then(|s| s.parse().ok()))
        .unwrap_or(DEFAULT_LOCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        for locale in ALL_LOCALES {
            assert_eq!(locale.code().parse::<Locale>().unwrap(), locale);
        }
    }

    #[test]
    fn test_parse_unknown_code() {
        let err = "fr".parse::<Locale>().unwrap_err();
        assert!(matches!(err, MushafError::UnknownLocale(_)));
    }

    #[test]
    fn test_url_param_wins_over_stored() {
        assert_eq!(resolve_locale(Some("ja"), Some("ko")), Locale::Ko);
    }

    #[test]
    fn test_stored_used_when_no_url_param() {
        assert_eq!(resolve_locale(Some("ja"), None), Locale::Ja);
    }

    #[test]
    fn test_invalid_inputs_are_skipped() {
        assert_eq!(resolve_locale(Some("xx"), Some("yy")), Locale::En);
        assert_eq!(resolve_locale(Some("zh"), Some("yy")), Locale::Zh);
        assert_eq!(resolve_locale(None, None), Locale::En);
    }

    #[test]
    fn test_arabic_has_no_edition() {
        assert!(Locale::Ar.edition().is_none());
        assert_eq!(Locale::En.edition(), Some("en.asad"));
    }
}
