//! # Mushaf
//!
//! A Quran reading service: resolves a chapter identifier, fans out
//! concurrent fetches to the upstream text/translation/audio API, and
//! assembles one index-aligned view model per chapter for the rendering
//! layer to consume.
//!
//! ## Architecture
//!
//! ```text
//! Resolver → Assembler → Normalizer → HTTP surface
//!              (ResilientFetcher per source)
//! ```
//!
//! - [`resolver`]: slug / numeric-id lookup against the upstream chapter list
//! - [`assembler`]: fan-out/fan-in of the per-chapter sources, with
//!   graceful degradation for the optional ones
//! - [`normalizer`]: diacritic-insensitive bismillah stripping
//! - [`fetcher`]: HTTP client seam with per-attempt timeout and bounded
//!   immediate retries
//! - [`server`]: the JSON endpoints the rendering layer talks to

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) wires the upstream client and the
/// assembler together from one [`Config`](config::Config).
pub mod app;

/// Typed client for the upstream alquran.cloud-style API, including the
/// schema-validated decode of its `{ data: ... }` envelope.
pub mod api;

/// Chapter assembly: concurrent multi-source fetch, required/optional
/// failure policy, and the length-guarded positional audio join.
pub mod assembler;

/// Server configuration, read from `~/.config/mushaf/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`Chapter`](domain::Chapter): chapter metadata with its derived slug
/// - [`Verse`](domain::Verse): one verse with its audio locator
/// - [`ChapterView`](domain::ChapterView): the composite handed to rendering
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait over one HTTP exchange
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
/// - [`ResilientFetcher`](fetcher::ResilientFetcher): timeout + retry policy
pub mod fetcher;

/// UI languages: the supported-locale set, session locale resolution, and
/// the localized UI-string bundles.
pub mod locale;

/// Bismillah normalization for source-script verse text.
pub mod normalizer;

/// Chapter identifier resolution (numeric id or display-name slug).
pub mod resolver;

/// The axum JSON surface consumed by the rendering layer.
pub mod server;
