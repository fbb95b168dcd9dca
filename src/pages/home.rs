use yew::prelude::*;

use crate::components::{about::AboutSection, hero::{HeroProps, HeroSection}};
use crate::config;

#[function_component(Home)]
pub fn home() -> Html {
    let site = config::site();
    let hero = HeroProps::from_copy(&site.hero, &site.brand, &site.assets.hero_background);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <main class="home-page" lang="he">
            <HeroSection ..hero />
            <AboutSection options={site.about.viewport_options()} />
        </main>
    }
}
