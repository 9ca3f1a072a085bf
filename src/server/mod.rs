//! The JSON surface consumed by the rendering layer.
//!
//! Three endpoints: the resolved chapter list, the assembled chapter view,
//! and the localized UI-string bundles. Assembly failures stay isolated to
//! the request that hit them; the process never dies with a page view.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::app::{AppContext, MushafError, Result};
use crate::domain::Chapter;
use crate::locale::{strings, Locale};

pub async fn run(ctx: Arc<AppContext>, bind: &str) -> Result<()> {
    let listener = TcpListener::bind(bind).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(ctx))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/api/chapters", get(list_chapters))
        .route("/api/chapters/{identifier}", get(get_chapter))
        .route("/api/translations", get(get_translations))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(ctx)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown handler: {}", e);
    }
}

async fn list_chapters(State(ctx): State<Arc<AppContext>>) -> Response {
    match ctx.api.list_chapters().await {
        Ok(chapters) => {
            let chapters: Vec<Chapter> = chapters.into_iter().map(Chapter::from).collect();
            Json(chapters).into_response()
        }
        Err(e) => error_response(e),
    }
}

#[derive(Debug, Deserialize)]
struct ChapterQuery {
    /// Comma-separated extra translation locales, e.g. `locales=id,ja`.
    locales: Option<String>,
}

async fn get_chapter(
    State(ctx): State<Arc<AppContext>>,
    Path(identifier): Path<String>,
    Query(query): Query<ChapterQuery>,
) -> Response {
    let locales = match parse_locales(query.locales.as_deref()) {
        Ok(locales) => locales,
        Err(e) => return error_response(e),
    };

    match ctx.assembler.assemble(&identifier, &locales).await {
        Ok(view) => Json(view).into_response(),
        Err(e) => error_response(e),
    }
}

fn parse_locales(raw: Option<&str>) -> Result<Vec<Locale>> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

#[derive(Debug, Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

async fn get_translations(Query(query): Query<LangQuery>) -> Response {
    let lang = query.lang.as_deref().unwrap_or("en");

    match lang.parse::<Locale>() {
        Ok(locale) => Json(strings::bundle(locale)).into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Language not found"})),
        )
            .into_response(),
    }
}

fn error_response(err: MushafError) -> Response {
    let status = match &err {
        MushafError::ChapterNotFound(_) | MushafError::UnknownLocale(_) => StatusCode::NOT_FOUND,
        MushafError::Timeout(_)
        | MushafError::Network(_)
        | MushafError::UpstreamStatus { .. }
        | MushafError::Malformed(_)
        | MushafError::RequiredSource { .. } => StatusCode::BAD_GATEWAY,
        MushafError::Config(_) | MushafError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(json!({"error": err.to_string()}))).into_response()
}
