// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::Serialize;

/// A browser chrome color applied when the OS color scheme matches `media`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ThemeColor {
	pub color: &'static str,
	pub media: &'static str,
}

pub const THEME_COLORS: [ThemeColor; 2] = [
	ThemeColor {
		color: "#f8f8f8",
		media: "(prefers-color-scheme: light)",
	},
	ThemeColor {
		color: "#000",
		media: "(prefers-color-scheme: dark)",
	},
];

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
	pub width: &'static str,
	pub initial_scale: f32,
	pub minimum_scale: f32,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub maximum_scale: Option<f32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_scalable: Option<bool>,
	pub viewport_fit: &'static str,
	pub theme_color: Vec<ThemeColor>,
}

impl Viewport {
	/// Mobile layouts lock zoom; desktop layouts leave the maximum scale and user scaling to the browser.
	pub fn for_device(is_mobile: bool) -> Self {
		let (maximum_scale, user_scalable) = if is_mobile { (Some(1.0), Some(false)) } else { (None, None) };
		Self {
			width: "device-width",
			initial_scale: 1.0,
			minimum_scale: 1.0,
			maximum_scale,
			user_scalable,
			viewport_fit: "cover",
			theme_color: THEME_COLORS.to_vec(),
		}
	}

	/// Gets the value of the `content` attribute for `<meta name="viewport">`.
	pub fn content(&self) -> String {
		let mut parts = vec![
			format!("width={}", self.width),
			format!("initial-scale={}", self.initial_scale),
			format!("minimum-scale={}", self.minimum_scale),
		];
		if let Some(maximum_scale) = self.maximum_scale {
			parts.push(format!("maximum-scale={}", maximum_scale));
		}
		if let Some(user_scalable) = self.user_scalable {
			parts.push(format!("user-scalable={}", if user_scalable { "yes" } else { "no" }));
		}
		parts.push(format!("viewport-fit={}", self.viewport_fit));
		parts.join(", ")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn mobile_locks_zoom() {
		let viewport = Viewport::for_device(true);
		assert_eq!(viewport.maximum_scale, Some(1.0));
		assert_eq!(viewport.user_scalable, Some(false));
		assert_eq!(
			viewport.content(),
			"width=device-width, initial-scale=1, minimum-scale=1, maximum-scale=1, user-scalable=no, viewport-fit=cover"
		);
	}

	#[test]
	fn desktop_leaves_zoom_alone() {
		let viewport = Viewport::for_device(false);
		let json = serde_json::to_value(&viewport).unwrap();
		let object = json.as_object().unwrap();
		assert!(!object.contains_key("maximumScale"));
		assert!(!object.contains_key("userScalable"));
		assert_eq!(object["initialScale"], 1.0);
		assert_eq!(object["minimumScale"], 1.0);
		assert_eq!(object["viewportFit"], "cover");
		assert_eq!(
			viewport.content(),
			"width=device-width, initial-scale=1, minimum-scale=1, viewport-fit=cover"
		);
	}

	#[test]
	fn theme_colors_follow_color_scheme() {
		for is_mobile in [true, false] {
			let viewport = Viewport::for_device(is_mobile);
			assert_eq!(viewport.theme_color.len(), 2);
			assert_eq!(viewport.theme_color[0].color, "#f8f8f8");
			assert_eq!(viewport.theme_color[0].media, "(prefers-color-scheme: light)");
			assert_eq!(viewport.theme_color[1].color, "#000");
			assert_eq!(viewport.theme_color[1].media, "(prefers-color-scheme: dark)");
		}
	}
}
