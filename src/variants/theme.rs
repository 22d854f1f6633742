// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The color appearance a page is rendered with.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeAppearance {
	#[default]
	Light,
	Dark,
}

impl ThemeAppearance {
	/// Every appearance, in the order static variants are generated.
	pub const ALL: [ThemeAppearance; 2] = [ThemeAppearance::Dark, ThemeAppearance::Light];

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}
}

impl fmt::Display for ThemeAppearance {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UnknownThemeAppearance;

impl FromStr for ThemeAppearance {
	type Err = UnknownThemeAppearance;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value {
			"light" => Ok(Self::Light),
			"dark" => Ok(Self::Dark),
			_ => Err(UnknownThemeAppearance),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_known_appearances() {
		assert_eq!("light".parse(), Ok(ThemeAppearance::Light));
		assert_eq!("dark".parse(), Ok(ThemeAppearance::Dark));
	}

	#[test]
	fn rejects_other_casing() {
		assert_eq!("Dark".parse::<ThemeAppearance>(), Err(UnknownThemeAppearance));
		assert_eq!("".parse::<ThemeAppearance>(), Err(UnknownThemeAppearance));
	}

	#[test]
	fn default_is_light() {
		assert_eq!(ThemeAppearance::default(), ThemeAppearance::Light);
	}
}
