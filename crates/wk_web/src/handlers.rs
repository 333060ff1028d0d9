use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use wk_core::{record, Error, Result};

use crate::AppState;

pub const ARTICLES_PER_PAGE: usize = 10;
pub const MIN_LINKS: usize = 5;
pub const BATCH_SIZE: usize = 100;

/// Any error escaping a handler becomes a plain 500 with a one-line body;
/// the client never sees a partial record stream.
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("request failed: {}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, format!("{}\n", self.0)).into_response()
    }
}

pub async fn get_articles(
    State(state): State<Arc<AppState>>,
) -> std::result::Result<String, ApiError> {
    let articles = state
        .sampler
        .sample(ARTICLES_PER_PAGE, MIN_LINKS, BATCH_SIZE)
        .await?;
    Ok(record::encode(&articles))
}

pub async fn get_url_at_position(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> std::result::Result<String, ApiError> {
    let title_url_safe = require(&params, "title_url_safe")?;
    let x = float_param(&params, "normalized_click_point_x", "x")?;
    let y = float_param(&params, "normalized_click_point_y", "y")?;
    let page_index: usize = require(&params, "page_index")?
        .parse()
        .map_err(|_| Error::MalformedInput("page_index must be an integer".to_string()))?;

    let url = state
        .resolver
        .resolve_link_at_point(title_url_safe, page_index, x, y)
        .await?;
    Ok(url)
}

fn require<'a>(params: &'a HashMap<String, String>, name: &str) -> Result<&'a str> {
    params
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| Error::MalformedInput(format!("missing parameter {}", name)))
}

/// Long parameter name first, short click-point alias as fallback.
fn float_param(params: &HashMap<String, String>, name: &str, alias: &str) -> Result<f64> {
    let raw = params
        .get(name)
        .or_else(|| params.get(alias))
        .ok_or_else(|| Error::MalformedInput(format!("missing parameter {}", name)))?;
    raw.parse()
        .map_err(|_| Error::MalformedInput(format!("{} must be a number, got {:?}", name, raw)))
}
