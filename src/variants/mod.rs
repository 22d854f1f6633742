// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod codec;
pub mod locale;
mod theme;

pub use codec::{RouteVariants, StaticVariantParams, VARIANT_SEPARATOR, VariantCodec};
pub use locale::{LocaleRegistry, TextDirection, text_direction};
pub use theme::{ThemeAppearance, UnknownThemeAppearance};
