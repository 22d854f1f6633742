// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

pub const DEFAULT_LOCALE: &str = "en-US";

pub const SUPPORTED_LOCALES: &[&str] = &[
	"ar", "bg-BG", "de-DE", "en-US", "es-ES", "fa-IR", "fr-FR", "it-IT", "ja-JP", "ko-KR", "nl-NL", "pl-PL", "pt-BR",
	"ru-RU", "tr-TR", "vi-VN", "zh-CN", "zh-TW",
];

/// Locales pre-rendered at startup when the configuration doesn't name any.
pub const DEFAULT_STATIC_LOCALES: &[&str] = &[DEFAULT_LOCALE, "zh-CN"];

/// Primary language subtags written right-to-left.
const RTL_LANGUAGES: &[&str] = &["ar", "arc", "dv", "fa", "ha", "he", "khw", "ks", "ku", "ps", "sd", "ur", "yi"];

/// The set of locales the application can render, plus the one used when a request doesn't name a usable locale.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocaleRegistry {
	default_locale: String,
	supported: Vec<String>,
}

impl LocaleRegistry {
	/// Creates a registry. The default locale is always treated as supported.
	pub fn new(default_locale: impl Into<String>, supported: impl IntoIterator<Item = impl Into<String>>) -> Self {
		let default_locale = default_locale.into();
		let mut supported: Vec<String> = supported.into_iter().map(Into::into).collect();
		if !supported.contains(&default_locale) {
			supported.push(default_locale.clone());
		}
		Self {
			default_locale,
			supported,
		}
	}

	pub fn default_locale(&self) -> &str {
		&self.default_locale
	}

	pub fn supported(&self) -> impl Iterator<Item = &str> {
		self.supported.iter().map(String::as_str)
	}

	pub fn is_supported(&self, locale: &str) -> bool {
		self.supported.iter().any(|supported| supported == locale)
	}

	/// Picks the best supported locale for an `Accept-Language` header value.
	///
	/// Language ranges are tried in order of their quality values. Each range first looks for a supported locale with an
	/// identical language identifier, then for one sharing its language subtag. Ranges that aren't valid language
	/// identifiers (including `*`) are skipped.
	pub fn negotiate(&self, accept_language: &str) -> &str {
		let mut ranges: Vec<(LanguageIdentifier, f32)> = accept_language
			.split(',')
			.filter_map(|range| {
				let mut parts = range.split(';');
				let tag = parts.next()?.trim();
				let lang_id = tag.parse::<LanguageIdentifier>().ok()?;
				let quality = parts
					.find_map(|param| param.trim().strip_prefix("q="))
					.and_then(|q| q.parse::<f32>().ok())
					.unwrap_or(1.0);
				Some((lang_id, quality))
			})
			.filter(|(lang_id, quality)| *quality > 0.0 && !lang_id.language.is_empty())
			.collect();
		// Stable sort keeps header order among equal qualities
		ranges.sort_by(|(_, a), (_, b)| b.total_cmp(a));

		let supported: Vec<(&str, LanguageIdentifier)> = self
			.supported
			.iter()
			.filter_map(|locale| Some((locale.as_str(), locale.parse::<LanguageIdentifier>().ok()?)))
			.collect();

		for (requested, _) in ranges {
			if let Some((locale, _)) = supported.iter().find(|(_, lang_id)| *lang_id == requested) {
				return locale;
			}
			if let Some((locale, _)) = supported
				.iter()
				.find(|(_, lang_id)| lang_id.language == requested.language)
			{
				return locale;
			}
		}

		&self.default_locale
	}
}

impl Default for LocaleRegistry {
	fn default() -> Self {
		Self::new(DEFAULT_LOCALE, SUPPORTED_LOCALES.iter().copied())
	}
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
	Ltr,
	Rtl,
}

impl TextDirection {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Ltr => "ltr",
			Self::Rtl => "rtl",
		}
	}
}

/// Gets the direction text in the given locale is written in. Locales that aren't valid language identifiers are
/// treated as left-to-right.
pub fn text_direction(locale: &str) -> TextDirection {
	match locale.parse::<LanguageIdentifier>() {
		Ok(lang_id) if RTL_LANGUAGES.contains(&lang_id.language.as_str()) => TextDirection::Rtl,
		_ => TextDirection::Ltr,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_locale_is_supported() {
		let registry = LocaleRegistry::new("en-US", ["zh-CN"]);
		assert!(registry.is_supported("en-US"));
		assert!(registry.is_supported("zh-CN"));
		assert!(!registry.is_supported("fr-FR"));
	}

	#[test]
	fn negotiate_prefers_exact_match() {
		let registry = LocaleRegistry::default();
		assert_eq!(registry.negotiate("zh-TW,zh;q=0.9,en;q=0.8"), "zh-TW");
		assert_eq!(registry.negotiate("pt-br"), "pt-BR");
	}

	#[test]
	fn negotiate_matches_primary_language() {
		let registry = LocaleRegistry::default();
		assert_eq!(registry.negotiate("de"), "de-DE");
		assert_eq!(registry.negotiate("ar-EG"), "ar");
	}

	#[test]
	fn negotiate_honors_quality() {
		let registry = LocaleRegistry::default();
		assert_eq!(registry.negotiate("fr-FR;q=0.3, ko-KR;q=0.8"), "ko-KR");
		assert_eq!(registry.negotiate("ja-JP;q=0, it-IT;q=0.1"), "it-IT");
	}

	#[test]
	fn negotiate_without_match_uses_default() {
		let registry = LocaleRegistry::default();
		assert_eq!(registry.negotiate(""), DEFAULT_LOCALE);
		assert_eq!(registry.negotiate("*"), DEFAULT_LOCALE);
		assert_eq!(registry.negotiate("sw-KE, xh"), DEFAULT_LOCALE);
	}

	#[test]
	fn negotiate_skips_malformed_ranges() {
		let registry = LocaleRegistry::default();
		assert_eq!(registry.negotiate("not a tag!!, ja_jp;q=0.5"), "ja-JP");
		assert_eq!(registry.negotiate("*;q=1.0, ;q=0.9, fa"), "fa-IR");
	}

	#[test]
	fn rtl_languages_are_detected() {
		assert_eq!(text_direction("ar"), TextDirection::Rtl);
		assert_eq!(text_direction("fa-IR"), TextDirection::Rtl);
		assert_eq!(text_direction("he_IL"), TextDirection::Rtl);
		assert_eq!(text_direction("AR"), TextDirection::Rtl);
		assert_eq!(text_direction("ur-Arab-PK"), TextDirection::Rtl);
	}

	#[test]
	fn other_languages_are_ltr() {
		assert_eq!(text_direction("en-US"), TextDirection::Ltr);
		assert_eq!(text_direction("zh-CN"), TextDirection::Ltr);
		assert_eq!(text_direction(""), TextDirection::Ltr);
		assert_eq!(text_direction("arabic-but-not-a-tag"), TextDirection::Ltr);
		// "ara" shares a prefix with "ar" but is a different subtag
		assert_eq!(text_direction("ara"), TextDirection::Ltr);
		assert_eq!(TextDirection::Ltr.as_str(), "ltr");
		assert_eq!(TextDirection::Rtl.as_str(), "rtl");
	}
}
