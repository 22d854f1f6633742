// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::state::AppState;
use crate::variants::VariantCodec;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::path::Path;

/// Gets the path a single-segment request should be redirected to when its segment isn't the token its own decoded
/// variants encode to. Returns `None` for canonical tokens and for paths that aren't a single segment.
pub fn canonical_variants_path(codec: &VariantCodec, path: &str, query: Option<&str>) -> Option<String> {
	let token = path.strip_prefix('/')?;
	if token.is_empty() || token.contains('/') {
		return None;
	}

	let canonical = codec.encode_variants(&codec.decode(token));
	if canonical == token {
		return None;
	}

	Some(match query {
		Some(query) => format!("/{}?{}", canonical, query),
		None => format!("/{}", canonical),
	})
}

/// Redirects variant routes to their canonical token before they reach the renderer.
///
/// Pages for the variant route are written into the site root when first rendered, so only canonical tokens may get
/// that far. Files that exist in the site root are passed through unchanged.
pub async fn canonical_variants_layer(State(state): State<AppState>, request: Request, next: Next) -> Response {
	let path = request.uri().path().to_string();
	let query = request.uri().query().map(str::to_string);

	let Some(target) = canonical_variants_path(&state.codec, &path, query.as_deref()) else {
		return next.run(request).await;
	};

	let file_path = Path::new(&*state.leptos_options.site_root).join(path.trim_start_matches('/'));
	if tokio::fs::metadata(&file_path)
		.await
		.is_ok_and(|metadata| metadata.is_file())
	{
		return next.run(request).await;
	}

	tracing::debug!(path = %path, target = %target, "Redirecting to canonical variants");
	Redirect::permanent(&target).into_response()
}
