// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::locale::LocaleRegistry;
use super::theme::ThemeAppearance;
use serde::{Deserialize, Serialize};

/// Separates the fields of a variant token. Only unreserved URL characters are used so a token is always a single
/// path segment.
pub const VARIANT_SEPARATOR: &str = "__";

const MOBILE_FLAG: &str = "1";
const DESKTOP_FLAG: &str = "0";

/// The presentation settings a page is rendered with, as carried in the route.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct RouteVariants {
	pub locale: String,
	pub theme: ThemeAppearance,
	pub is_mobile: bool,
}

/// One entry in the list of routes to render ahead of time.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct StaticVariantParams {
	pub variants: String,
}

/// Converts between [RouteVariants] and the route segment token representing them.
///
/// Tokens are laid out as `{locale}__{device}__{theme}`, with the device written as `1` for mobile and `0` for desktop.
/// Decoding only looks at the first three fields, so appending fields later won't change how existing links decode.
#[derive(Clone, Debug, Default)]
pub struct VariantCodec {
	locales: LocaleRegistry,
	default_theme: ThemeAppearance,
}

impl VariantCodec {
	pub fn new(locales: LocaleRegistry, default_theme: ThemeAppearance) -> Self {
		Self { locales, default_theme }
	}

	pub fn locales(&self) -> &LocaleRegistry {
		&self.locales
	}

	/// The variants used for any part of a token that can't be read.
	pub fn default_variants(&self) -> RouteVariants {
		RouteVariants {
			locale: self.locales.default_locale().to_string(),
			theme: self.default_theme,
			is_mobile: false,
		}
	}

	/// Builds the token for a set of variants. The locale is written as given.
	pub fn encode(&self, locale: &str, theme: ThemeAppearance, is_mobile: bool) -> String {
		let device = if is_mobile { MOBILE_FLAG } else { DESKTOP_FLAG };
		[locale, device, theme.as_str()].join(VARIANT_SEPARATOR)
	}

	pub fn encode_variants(&self, variants: &RouteVariants) -> String {
		self.encode(&variants.locale, variants.theme, variants.is_mobile)
	}

	/// Reads a token back into its variants. Each field that is missing or unrecognized is replaced with its default
	/// independently of the others.
	pub fn decode(&self, token: &str) -> RouteVariants {
		let mut fields = token.split(VARIANT_SEPARATOR);
		let locale_field = fields.next().unwrap_or_default();
		let device_field = fields.next();
		let theme_field = fields.next();

		let locale = if self.locales.is_supported(locale_field) {
			locale_field.to_string()
		} else {
			tracing::debug!(token, "Unsupported locale in route variants; using default");
			self.locales.default_locale().to_string()
		};

		let is_mobile = device_field == Some(MOBILE_FLAG);

		let theme = match theme_field.map(str::parse::<ThemeAppearance>) {
			Some(Ok(theme)) => theme,
			_ => {
				tracing::debug!(token, "Unrecognized theme in route variants; using default");
				self.default_theme
			}
		};

		RouteVariants {
			locale,
			theme,
			is_mobile,
		}
	}

	/// Encodes every combination of the given values, iterating locales outermost and device classes innermost.
	pub fn enumerate_static_variants<L: AsRef<str>>(
		&self,
		static_locales: &[L],
		themes: &[ThemeAppearance],
		device_classes: &[bool],
	) -> Vec<String> {
		let mut tokens = Vec::with_capacity(static_locales.len() * themes.len() * device_classes.len());
		for locale in static_locales {
			for theme in themes {
				for is_mobile in device_classes {
					tokens.push(self.encode(locale.as_ref(), *theme, *is_mobile));
				}
			}
		}
		tokens
	}

	/// Gets the pre-render entries for the given locales across every theme and device class.
	pub fn static_params<L: AsRef<str>>(&self, static_locales: &[L]) -> Vec<StaticVariantParams> {
		self.enumerate_static_variants(static_locales, &ThemeAppearance::ALL, &[true, false])
			.into_iter()
			.map(|variants| StaticVariantParams { variants })
			.collect()
	}
}
