// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Picks route variants for requests that arrive without a variant segment.

use crate::variants::{RouteVariants, ThemeAppearance, VariantCodec};

const MOBILE_USER_AGENT_MARKERS: &[&str] = &[
	"Mobi",
	"Android",
	"iPhone",
	"iPod",
	"iPad",
	"Windows Phone",
	"BlackBerry",
	"Opera Mini",
	"HarmonyOS",
];

/// Header values relevant to choosing variants. Missing headers are `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct VariantHints<'a> {
	pub accept_language: Option<&'a str>,
	pub user_agent: Option<&'a str>,
	pub prefers_color_scheme: Option<&'a str>,
}

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
	MOBILE_USER_AGENT_MARKERS
		.iter()
		.any(|marker| user_agent.contains(marker))
}

pub fn detect_variants(codec: &VariantCodec, hints: VariantHints<'_>) -> RouteVariants {
	let defaults = codec.default_variants();

	let locale = match hints.accept_language {
		Some(accept_language) => codec.locales().negotiate(accept_language).to_string(),
		None => defaults.locale,
	};
	let is_mobile = hints.user_agent.is_some_and(is_mobile_user_agent);
	let theme = hints
		.prefers_color_scheme
		.and_then(|scheme| scheme.trim().trim_matches('"').parse::<ThemeAppearance>().ok())
		.unwrap_or(defaults.theme);

	RouteVariants {
		locale,
		theme,
		is_mobile,
	}
}
