// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::app::App;
use super::viewport::THEME_COLORS;
use leptos::prelude::*;
use leptos_meta::MetaTags;

pub fn shell(options: LeptosOptions, static_variants: Vec<String>) -> impl IntoView {
	view! {
		<!DOCTYPE html>
		<html>
			<head>
				<meta charset="utf-8" />
				{
					THEME_COLORS
						.iter()
						.map(|theme_color| {
							leptos::html::meta()
								.name("theme-color")
								.content(theme_color.color)
								.attr("media", theme_color.media)
						})
						.collect_view()
				}
				<HydrationScripts options />
				<MetaTags />
			</head>
			<body>
				<App static_variants />
			</body>
		</html>
	}
}
