// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::viewport::Viewport;
use crate::variants::{RouteVariants, ThemeAppearance, VariantCodec, text_direction};
use leptos::prelude::*;
use leptos_meta::{Html, Meta};
use leptos_router::hooks::use_params;
use leptos_router::params::Params;
use std::sync::Arc;

#[derive(Params, PartialEq)]
struct VariantsParam {
	variants: Option<String>,
}

/// Gets the codec provided by the server, or one with the built-in locales when none was provided.
pub fn use_variant_codec() -> Arc<VariantCodec> {
	use_context::<Arc<VariantCodec>>().unwrap_or_default()
}

/// Decodes the token returned by `token` each time it changes.
pub fn decoded_variants(
	codec: Arc<VariantCodec>,
	token: impl Fn() -> String + Send + Sync + 'static,
) -> Memo<RouteVariants> {
	Memo::new(move |_| codec.decode(&token()))
}

/// Root layout for every variant route. Decodes the route segment and applies it to the document.
///
/// Navigating between variants stays on the same route, so everything derived from the token is reactive.
#[component]
pub fn VariantLayout() -> impl IntoView {
	let params = use_params::<VariantsParam>();
	let codec = use_variant_codec();

	let variants = decoded_variants(Arc::clone(&codec), move || {
		params
			.read()
			.as_ref()
			.ok()
			.and_then(|params| params.variants.clone())
			.unwrap_or_default()
	});
	provide_context(variants);

	let locale = move || variants.with(|variants| variants.locale.clone());
	let direction = move || variants.with(|variants| text_direction(&variants.locale).as_str());
	let theme = move || variants.with(|variants| variants.theme.as_str());
	let is_mobile = move || variants.with(|variants| variants.is_mobile);
	let viewport_content = move || Viewport::for_device(is_mobile()).content();
	let device = move || if is_mobile() { "mobile" } else { "desktop" };

	view! {
		<Html {..} lang=locale dir=direction data-theme=theme />
		<Meta name="viewport" content=viewport_content />

		<main id="variant_root" data-device=device>
			{move || {
				let codec = Arc::clone(&codec);
				view! { <VariantSwitcher codec variants=variants.get() /> }
			}}
		</main>
		{move || (!is_mobile()).then(|| view! { <div id="modal_root"></div> })}
	}
}

/// Links to the same page with one variant changed.
#[component]
fn VariantSwitcher(codec: Arc<VariantCodec>, variants: RouteVariants) -> impl IntoView {
	let other_theme = match variants.theme {
		ThemeAppearance::Light => ThemeAppearance::Dark,
		ThemeAppearance::Dark => ThemeAppearance::Light,
	};
	let theme_url = format!("/{}", codec.encode(&variants.locale, other_theme, variants.is_mobile));
	let device_url = format!("/{}", codec.encode(&variants.locale, variants.theme, !variants.is_mobile));
	let device_label = if variants.is_mobile { "Desktop layout" } else { "Mobile layout" };

	let locale_links = codec
		.locales()
		.supported()
		.filter(|locale| *locale != variants.locale)
		.map(|locale| {
			let url = format!("/{}", codec.encode(locale, variants.theme, variants.is_mobile));
			let locale = locale.to_string();
			view! {
				<li><a href={url} hreflang={locale.clone()}>{locale.clone()}</a></li>
			}
		})
		.collect_view();

	view! {
		<nav id="variant_switcher">
			<a href={theme_url}>{format!("Use {} theme", other_theme)}</a>
			<a href={device_url}>{device_label}</a>
			<ul id="variant_locales">{locale_links}</ul>
		</nav>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::variants::locale::DEFAULT_LOCALE;

	#[test]
	fn decoded_variants_follow_the_token() {
		let owner = Owner::new();
		owner.with(|| {
			let token = RwSignal::new(String::from("en-US__0__light"));
			let variants = decoded_variants(Arc::new(VariantCodec::default()), move || token.get());
			assert_eq!(variants.get().theme, ThemeAppearance::Light);
			assert!(!variants.get().is_mobile);

			token.set(String::from("ar__1__dark"));
			let updated = variants.get();
			assert_eq!(updated.locale, "ar");
			assert_eq!(updated.theme, ThemeAppearance::Dark);
			assert!(updated.is_mobile);

			token.set(String::from("not-a-token"));
			assert_eq!(variants.get().locale, DEFAULT_LOCALE);
		});
	}
}
