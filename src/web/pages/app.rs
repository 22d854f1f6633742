// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::errors::not_found::NotFound;
use super::layout::VariantLayout;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::static_routes::StaticRoute;
use leptos_router::{SsrMode, path};

/// Name of the route parameter holding the variant token.
pub const VARIANTS_PARAM: &str = "variants";

/// The application root.
///
/// `static_variants` lists the variant tokens rendered ahead of time; any other token is rendered when first requested.
#[component]
pub fn App(#[prop(optional)] static_variants: Vec<String>) -> impl IntoView {
	provide_meta_context();

	let static_route = StaticRoute::new().prerender_params(move || {
		let static_variants = static_variants.clone();
		async move { [(VARIANTS_PARAM.to_string(), static_variants)].into_iter().collect() }
	});

	view! {
		<Title text="Route Variants" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/:variants") view=VariantLayout ssr=SsrMode::Static(static_route) />
			</Routes>
		</Router>
	}
}
