// © 2024 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::variants::LocaleRegistry;
use crate::variants::locale::DEFAULT_STATIC_LOCALES;
use kdl::{KdlDocument, KdlNode};
use miette::{IntoDiagnostic, Result, miette};
use tokio::fs::read_to_string;

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	ConfigData::parse(&config_file_contents, &LocaleRegistry::default())
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigData {
	pub web: WebConfig,
	pub variants: VariantsConfig,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WebConfig {
	pub bind_addr: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VariantsConfig {
	/// Locales whose variants are rendered at startup. Variants for every other locale are rendered on request.
	pub static_locales: Vec<String>,
}

impl Default for VariantsConfig {
	fn default() -> Self {
		Self {
			static_locales: DEFAULT_STATIC_LOCALES.iter().map(|locale| locale.to_string()).collect(),
		}
	}
}

impl ConfigData {
	/// Parses a configuration document, checking the static locales against the locales the application supports.
	pub fn parse(contents: &str, locales: &LocaleRegistry) -> Result<Self> {
		let document: KdlDocument = contents.parse()?;

		let web = match document.get("web") {
			Some(node) => WebConfig::from_node(node)?,
			None => return Err(miette!("Config is missing the `web` block")),
		};
		let variants = match document.get("variants") {
			Some(node) => VariantsConfig::from_node(node, locales)?,
			None => VariantsConfig::default(),
		};

		Ok(Self { web, variants })
	}
}

impl WebConfig {
	fn from_node(node: &KdlNode) -> Result<Self> {
		let bind_addr = node
			.children()
			.and_then(|children| children.get_arg("bind_addr"))
			.and_then(|value| value.as_string())
			.ok_or_else(|| miette!("`web.bind_addr` must be set to a string"))?;
		Ok(Self {
			bind_addr: bind_addr.to_string(),
		})
	}
}

impl VariantsConfig {
	fn from_node(node: &KdlNode, locales: &LocaleRegistry) -> Result<Self> {
		let Some(children) = node.children() else {
			return Ok(Self::default());
		};
		if children.get("static_locales").is_none() {
			return Ok(Self::default());
		}

		let mut static_locales = Vec::new();
		for value in children.iter_args("static_locales") {
			let Some(locale) = value.as_string() else {
				return Err(miette!("`variants.static_locales` entries must be strings"));
			};
			if !locales.is_supported(locale) {
				return Err(miette!("Static locale `{}` is not a supported locale", locale));
			}
			if !static_locales.iter().any(|existing| existing == locale) {
				static_locales.push(locale.to_string());
			}
		}

		Ok(Self { static_locales })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_full_config() {
		let config = ConfigData::parse(
			r#"
			web {
				bind_addr "127.0.0.1:8080"
			}
			variants {
				static_locales "en-US" "ja-JP" "ar"
			}
			"#,
			&LocaleRegistry::default(),
		)
		.unwrap();
		assert_eq!(config.web.bind_addr, "127.0.0.1:8080");
		assert_eq!(config.variants.static_locales, vec!["en-US", "ja-JP", "ar"]);
	}

	#[test]
	fn non_string_static_locale_is_rejected() {
		let result = ConfigData::parse(
			r#"
			web {
				bind_addr "127.0.0.1:8080"
			}
			variants {
				static_locales "en-US" 42
			}
			"#,
			&LocaleRegistry::default(),
		);
		assert!(result.is_err());
	}

	#[test]
	fn static_locales_default_to_reference_set() {
		let config = ConfigData::parse(
			r#"
			web {
				bind_addr "0.0.0.0:3000"
			}
			"#,
			&LocaleRegistry::default(),
		)
		.unwrap();
		assert_eq!(config.variants.static_locales, vec!["en-US", "zh-CN"]);
	}

	#[test]
	fn empty_static_locale_list_is_allowed() {
		let config = ConfigData::parse(
			r#"
			web {
				bind_addr "0.0.0.0:3000"
			}
			variants {
				static_locales
			}
			"#,
			&LocaleRegistry::default(),
		)
		.unwrap();
		assert!(config.variants.static_locales.is_empty());
	}

	#[test]
	fn duplicate_static_locales_are_collapsed() {
		let config = ConfigData::parse(
			r#"
			web {
				bind_addr "0.0.0.0:3000"
			}
			variants {
				static_locales "zh-CN" "zh-CN"
			}
			"#,
			&LocaleRegistry::default(),
		)
		.unwrap();
		assert_eq!(config.variants.static_locales, vec!["zh-CN"]);
	}

	#[test]
	fn unsupported_static_locale_is_rejected() {
		let result = ConfigData::parse(
			r#"
			web {
				bind_addr "0.0.0.0:3000"
			}
			variants {
				static_locales "en-US" "tlh"
			}
			"#,
			&LocaleRegistry::default(),
		);
		assert!(result.is_err());
	}

	#[test]
	fn missing_bind_addr_is_rejected() {
		assert!(ConfigData::parse("web", &LocaleRegistry::default()).is_err());
		assert!(ConfigData::parse("variants", &LocaleRegistry::default()).is_err());
	}
}
