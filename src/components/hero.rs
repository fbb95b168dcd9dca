use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::HeroCopy;
use crate::reveal::use_mount_reveal;
use crate::stagger::{HERO_BADGE, HERO_CARD, HERO_CTA, HERO_HEADLINE, HERO_SUBHEADING, REVEAL_CSS};

pub const DEFAULT_TITLE: &str = "מסעדה מוביל בישראל";
pub const DEFAULT_SUBTITLE: &str = "חווית לקוח מושלמת בכל ביקור";
pub const DEFAULT_CTA_TEXT: &str = "קבע תור עכשיו";
pub const DEFAULT_BRAND: &str = "מסעדה אלפא";
pub const DEFAULT_BACKGROUND: &str = "/assets/restaurant-atmosphere.jpg";

#[derive(Properties, PartialEq, Clone)]
pub struct HeroProps {
    #[prop_or(AttrValue::Static(DEFAULT_TITLE))]
    pub title: AttrValue,
    #[prop_or(AttrValue::Static(DEFAULT_SUBTITLE))]
    pub subtitle: AttrValue,
    #[prop_or(AttrValue::Static(DEFAULT_CTA_TEXT))]
    pub cta_text: AttrValue,
    #[prop_or(AttrValue::Static(DEFAULT_BRAND))]
    pub brand: AttrValue,
    #[prop_or(AttrValue::Static(DEFAULT_BACKGROUND))]
    pub background: AttrValue,
    #[prop_or_default]
    pub on_cta: Callback<MouseEvent>,
}

impl HeroProps {
    /// Props for the configured copy; anything not overridden keeps its default.
    pub fn from_copy(copy: &HeroCopy, brand: &str, background: &str) -> Self {
        let text = |value: &Option<String>, default: &'static str| {
            value
                .clone()
                .map(AttrValue::from)
                .unwrap_or(AttrValue::Static(default))
        };

        Self {
            title: text(&copy.title, DEFAULT_TITLE),
            subtitle: text(&copy.subtitle, DEFAULT_SUBTITLE),
            cta_text: text(&copy.cta_text, DEFAULT_CTA_TEXT),
            brand: AttrValue::from(brand.to_string()),
            background: AttrValue::from(background.to_string()),
            on_cta: Callback::default(),
        }
    }
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroProps) -> Html {
    let reveal = use_mount_reveal();

    let on_cta = {
        let on_cta = props.on_cta.clone();
        Callback::from(move |e: MouseEvent| {
            on_cta.emit(e);
        })
    };

    html! {
        <section class="hero-section" dir="rtl" aria-label="אזור כותרת ראשית">
            <div class="hero-backdrop">
                <img src={props.background.clone()} alt="אווירת מסעדה" class="hero-backdrop-image" />
                <div class="hero-backdrop-overlay"></div>
            </div>

            <div class="hero-frame">
                <div class={classes!("hero-card", HERO_CARD.classes(reveal))} style={HERO_CARD.style()}>
                    <div class="hero-badge-row">
                        <span class={classes!("hero-badge", HERO_BADGE.classes(reveal))} style={HERO_BADGE.style()}>
                            {props.brand.clone()}
                        </span>
                    </div>

                    <h1 class={classes!("hero-title", HERO_HEADLINE.classes(reveal))} style={HERO_HEADLINE.style()}>
                        {props.title.clone()}
                    </h1>

                    <p class={classes!("hero-subtitle", HERO_SUBHEADING.classes(reveal))} style={HERO_SUBHEADING.style()}>
                        {props.subtitle.clone()}
                    </p>

                    <div class={classes!("hero-cta-row", HERO_CTA.classes(reveal))} style={HERO_CTA.style()}>
                        <button class="hero-cta" aria-label="לחץ כדי לקבוע תור" onclick={on_cta}>
                            <span class="hero-cta-glow"></span>
                            <span class="hero-cta-text">{props.cta_text.clone()}</span>
                            <span class="hero-cta-shine"></span>
                        </button>
                    </div>

                    <div class="hero-orb hero-orb-coral"></div>
                    <div class="hero-orb hero-orb-taupe"></div>
                </div>
            </div>

            <style>{REVEAL_CSS}</style>
            <style>
                {r#"
                    .hero-section {
                        position: relative;
                        height: 100vh;
                        width: 100%;
                        overflow: hidden;
                    }
                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }
                    .hero-backdrop-image {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 10s ease-in-out;
                    }
                    .hero-backdrop-image:hover {
                        transform: scale(1.05);
                    }
                    .hero-backdrop-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.3));
                    }
                    .hero-frame {
                        position: relative;
                        z-index: 10;
                        display: flex;
                        height: 100%;
                        align-items: center;
                        justify-content: center;
                        padding: 0 1rem;
                    }
                    .hero-card {
                        position: relative;
                        max-width: 48rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: rgba(255, 255, 255, 0.1);
                        padding: 2rem;
                        backdrop-filter: blur(12px);
                        box-shadow: 0 8px 32px 0 rgba(31, 38, 135, 0.37);
                    }
                    .hero-badge-row {
                        margin-bottom: 0.5rem;
                        text-align: center;
                    }
                    .hero-badge {
                        display: inline-block;
                        border-radius: 9999px;
                        background: linear-gradient(to left, rgba(155, 120, 111, 0.8), rgba(255, 107, 107, 0.8));
                        padding: 0.25rem 1rem;
                        font-size: 1.125rem;
                        font-weight: 500;
                        color: white;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .hero-title {
                        margin-bottom: 1rem;
                        text-align: center;
                        font-family: serif;
                        font-size: 2.25rem;
                        font-weight: 700;
                        line-height: 1.25;
                        background: linear-gradient(to left, white, rgba(255, 255, 255, 0.9));
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero-subtitle {
                        margin-bottom: 2rem;
                        text-align: center;
                        font-weight: 500;
                        color: rgba(255, 255, 255, 0.9);
                    }
                    .hero-cta-row {
                        display: flex;
                        justify-content: center;
                    }
                    .hero-cta {
                        position: relative;
                        overflow: hidden;
                        border-radius: 9999px;
                        background: linear-gradient(to left, #FF6B6B, #9B786F);
                        padding: 0.75rem 2rem;
                        font-size: 1.125rem;
                        font-weight: 700;
                        color: white;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        cursor: pointer;
                        transition: box-shadow 0.3s;
                    }
                    .hero-cta-glow {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to right, rgba(255, 107, 107, 0.8), rgba(155, 120, 111, 0.8));
                        opacity: 0;
                        transition: opacity 0.3s;
                    }
                    .hero-cta:hover .hero-cta-glow {
                        opacity: 1;
                    }
                    .hero-cta-text {
                        position: relative;
                    }
                    .hero-cta-shine {
                        position: absolute;
                        inset: 0;
                        transform: translateX(-100%) skewX(12deg);
                        background: linear-gradient(to right, transparent, rgba(255, 255, 255, 0.3), transparent);
                        transition: transform 1s;
                    }
                    .hero-cta:hover .hero-cta-shine {
                        transform: translateX(100%) skewX(12deg);
                    }
                    .hero-orb {
                        position: absolute;
                        height: 10rem;
                        width: 10rem;
                        border-radius: 9999px;
                        filter: blur(64px);
                    }
                    .hero-orb-coral {
                        left: -2.5rem;
                        top: -2.5rem;
                        background: rgba(255, 107, 107, 0.2);
                    }
                    .hero-orb-taupe {
                        right: -2.5rem;
                        bottom: -2.5rem;
                        background: rgba(155, 120, 111, 0.2);
                    }
                    @media (min-width: 640px) {
                        .hero-card { padding: 3rem; }
                        .hero-title { font-size: 3rem; }
                        .hero-subtitle { font-size: 1.25rem; }
                    }
                    @media (min-width: 768px) {
                        .hero-title { font-size: 3.75rem; }
                        .hero-subtitle { font-size: 1.5rem; }
                    }
                "#}
            </style>
        </section>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn renders_defaults_and_reveals_after_mount() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let handle = yew::Renderer::<HeroSection>::with_root_and_props(root.clone(), yew::props!(HeroProps {})).render();
        TimeoutFuture::new(100).await;

        let text = |selector: &str| root.query_selector(selector).unwrap().unwrap().text_content().unwrap();
        assert_eq!(text("h1").trim(), DEFAULT_TITLE);
        assert_eq!(text(".hero-subtitle").trim(), DEFAULT_SUBTITLE);
        assert_eq!(text(".hero-cta-text").trim(), DEFAULT_CTA_TEXT);

        let headline = root.query_selector("h1").unwrap().unwrap();
        assert!(headline.class_list().contains("reveal-shown"));

        handle.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn ships_its_own_reveal_rules() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let handle = yew::Renderer::<HeroSection>::with_root_and_props(root.clone(), yew::props!(HeroProps {})).render();
        TimeoutFuture::new(100).await;

        let markup = root.inner_html();
        assert!(markup.contains(".reveal-shown"));
        assert!(markup.contains(".fade-in"));

        handle.destroy();
        root.remove();
    }
}
