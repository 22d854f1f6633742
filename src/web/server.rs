// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::canonical::canonical_variants_layer;
use super::detect::{VariantHints, detect_variants};
use super::pages::shell::shell;
use super::state::AppState;
use crate::config::ConfigData;
use crate::variants::VariantCodec;
use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::{ACCEPT_LANGUAGE, USER_AGENT, VARY};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::middleware::from_fn_with_state;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list_with_ssg, render_app_to_stream_with_context};
use miette::IntoDiagnostic;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::util::ServiceExt;
use tower_http::services::ServeDir;

const PREFERS_COLOR_SCHEME: &str = "sec-ch-prefers-color-scheme";

pub async fn run_server(config: Arc<ConfigData>) -> miette::Result<()> {
	let web_config = get_configuration(None).into_diagnostic()?;
	let site_addr = &config.web.bind_addr;
	let leptos_options = web_config.leptos_options;
	let codec = Arc::new(VariantCodec::default());

	let static_params = codec.static_params(&config.variants.static_locales);
	for params in static_params.iter() {
		tracing::debug!(variants = %params.variants, "Registering static variant");
	}
	let static_variants: Vec<String> = static_params.into_iter().map(|params| params.variants).collect();

	let (routes, static_routes) = generate_route_list_with_ssg({
		let leptos_options = leptos_options.clone();
		let static_variants = static_variants.clone();
		move || shell(leptos_options.clone(), static_variants.clone())
	});
	static_routes.generate(&leptos_options).await;
	tracing::info!(
		count = static_variants.len(),
		locales = ?config.variants.static_locales,
		"Rendered static variants"
	);

	let app_state = AppState {
		leptos_options,
		codec,
		static_variants: Arc::new(static_variants),
	};

	let app = Router::new()
		.leptos_routes_with_context(
			&app_state,
			routes,
			{
				let codec = Arc::clone(&app_state.codec);
				move || provide_context(Arc::clone(&codec))
			},
			{
				let leptos_options = app_state.leptos_options.clone();
				let static_variants = Arc::clone(&app_state.static_variants);
				move || shell(leptos_options.clone(), static_variants.to_vec())
			},
		)
		.route("/", get(variant_redirect))
		.fallback(file_and_error_handler)
		.layer(from_fn_with_state(app_state.clone(), canonical_variants_layer))
		.with_state(app_state);

	tracing::info!("Listening on http://{}", &site_addr);
	let listener = TcpListener::bind(&site_addr).await.into_diagnostic()?;
	axum::serve(listener, app.into_make_service()).await.into_diagnostic()?;

	Ok(())
}

/// Sends requests without a variant segment to the variants that best match the request headers.
async fn variant_redirect(State(state): State<AppState>, headers: HeaderMap) -> Response {
	let header = |name: &str| headers.get(name).and_then(|value| value.to_str().ok());
	let hints = VariantHints {
		accept_language: header(ACCEPT_LANGUAGE.as_str()),
		user_agent: header(USER_AGENT.as_str()),
		prefers_color_scheme: header(PREFERS_COLOR_SCHEME),
	};

	let variants = detect_variants(&state.codec, hints);
	let token = state.codec.encode_variants(&variants);
	tracing::debug!(token = %token, "Redirecting to detected variants");

	(
		[(VARY, "Accept-Language, User-Agent, Sec-CH-Prefers-Color-Scheme")],
		Redirect::temporary(&format!("/{}", token)),
	)
		.into_response()
}

async fn file_and_error_handler(uri: Uri, State(state): State<AppState>, request: Request) -> Response {
	let site_root_dir = state.leptos_options.site_root.clone();
	let response = get_static_file(uri.clone(), &site_root_dir).await;
	let response = match response {
		Ok(response) => response,
		Err(error) => return error.into_response(),
	};

	if response.status() == StatusCode::OK {
		response.into_response()
	} else {
		let handler = render_app_to_stream_with_context(
			{
				let codec = Arc::clone(&state.codec);
				move || provide_context(Arc::clone(&codec))
			},
			{
				let leptos_options = state.leptos_options.clone();
				move || shell(leptos_options.clone(), Vec::new())
			},
		);
		handler(request).await.into_response()
	}
}

async fn get_static_file(uri: Uri, root: &str) -> Result<Response, StatusCode> {
	let Ok(request) = Request::builder().uri(uri.clone()).body(Body::empty()) else {
		return Err(StatusCode::INTERNAL_SERVER_ERROR);
	};

	match ServeDir::new(root).oneshot(request).await {
		Ok(response) => Ok(response.into_response()),
		Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	async fn render_page(path: &str) -> String {
		let _ = any_spawner::Executor::init_tokio();
		let leptos_options = LeptosOptions::builder().output_name("route-variants").build();
		let codec = Arc::new(VariantCodec::default());
		let handler = render_app_to_stream_with_context(
			move || provide_context(Arc::clone(&codec)),
			move || shell(leptos_options.clone(), Vec::new()),
		);

		let request = Request::builder().uri(path).body(Body::empty()).unwrap();
		let response = handler(request).await;
		let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
		String::from_utf8(body.to_vec()).unwrap()
	}

	#[tokio::test]
	async fn arabic_mobile_dark_document() {
		let html = render_page("/ar__1__dark").await;
		assert!(html.contains(r#"lang="ar""#), "{html}");
		assert!(html.contains(r#"dir="rtl""#), "{html}");
		assert!(html.contains(r#"data-theme="dark""#), "{html}");
		assert!(html.contains("maximum-scale=1, user-scalable=no"), "{html}");
		assert!(html.contains(r#"data-device="mobile""#), "{html}");
		assert!(!html.contains("modal_root"), "{html}");
	}

	#[tokio::test]
	async fn english_desktop_light_document() {
		let html = render_page("/en-US__0__light").await;
		assert!(html.contains(r#"lang="en-US""#), "{html}");
		assert!(html.contains(r#"dir="ltr""#), "{html}");
		assert!(html.contains(r#"data-theme="light""#), "{html}");
		assert!(!html.contains("maximum-scale"), "{html}");
		assert!(html.contains("modal_root"), "{html}");
	}
}
