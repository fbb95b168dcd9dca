use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::config;
use crate::reveal::{use_viewport_reveal, ViewportOptions};
use crate::stagger::{ABOUT_SECTION, REVEAL_CSS};

const CHECK_ICON: &str = "M5 13l4 4L19 7";
const PLUS_ICON: &str = "M12 6v6m0 0v6m0-6h6m-6 0H6";
const SMILE_ICON: &str = "M14.828 14.828a4 4 0 01-5.656 0M9 10h.01M15 10h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z";

const HIGHLIGHTS: [(&str, &str); 3] = [
    (CHECK_ICON, "מעל 15 שנות ניסיון בענף המסעדנות"),
    (PLUS_ICON, "מגוון תפריטים עשיר ואיכותי"),
    (SMILE_ICON, "שירות אדיב ומקצועי"),
];

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub options: ViewportOptions,
}

#[function_component(AboutSection)]
pub fn about_section(props: &AboutProps) -> Html {
    let section_ref = use_node_ref();
    let reveal = use_viewport_reveal(section_ref.clone(), props.options.clone());
    let assets = &config::site().assets;

    html! {
        <section
            ref={section_ref}
            class={classes!("about-section", ABOUT_SECTION.classes(reveal), props.class.clone())}
            dir="rtl"
            aria-labelledby="about-heading"
        >
            <div class="about-gradient"></div>

            <div class="about-glass">
                <div class="about-circle about-circle-top"></div>
                <div class="about-circle about-circle-bottom"></div>

                <div class="about-layout">
                    <div class="about-image-column">
                        <div class="about-image-frame">
                            <FallbackImage
                                src={assets.about_image.clone()}
                                alt="איכות ומקצועיות במסעדה אלפא"
                                fallback={assets.image_fallback.clone()}
                                class="about-image"
                                sizes={Some(AttrValue::Static("(max-width: 768px) 16rem, 20rem"))}
                            />
                        </div>
                    </div>

                    <div class="about-text">
                        <h2 id="about-heading" class="about-heading">
                            {"אודות מסעדה אלפא"}
                        </h2>

                        <p class="about-description">
                            {"אנחנו מסעדה מוביל בתחום השירותים עם ניסיון של שנים רבות. אנחנו מתמחים במתן שירות מקצועי ואיכותי ללקוחותינו."}
                        </p>

                        <div class="about-highlights">
                            { for HIGHLIGHTS.iter().map(|(icon, text)| html! {
                                <div class="about-highlight">
                                    <div class="about-highlight-icon">
                                        <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={*icon} />
                                        </svg>
                                    </div>
                                    <p>{*text}</p>
                                </div>
                            }) }
                        </div>

                        <button class="about-more" aria-label="קרא עוד על מסעדה אלפא">
                            {"קרא עוד"}
                        </button>
                    </div>
                </div>
            </div>

            <style>{REVEAL_CSS}</style>
            <style>
                {r#"
                    .about-section {
                        position: relative;
                        padding: 4rem 1rem;
                        overflow: hidden;
                        transition-duration: 1s;
                        transition-timing-function: ease-out;
                    }
                    .about-gradient {
                        position: absolute;
                        inset: 0;
                        z-index: -10;
                        background: linear-gradient(to bottom right, rgba(255, 107, 107, 0.1), rgba(155, 120, 111, 0.2));
                    }
                    .about-glass {
                        position: relative;
                        max-width: 72rem;
                        margin: 0 auto;
                        overflow: hidden;
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        background: rgba(255, 255, 255, 0.3);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .about-circle {
                        position: absolute;
                        border-radius: 9999px;
                        backdrop-filter: blur(4px);
                    }
                    .about-circle-top {
                        top: -5rem;
                        right: -5rem;
                        width: 10rem;
                        height: 10rem;
                        background: rgba(155, 120, 111, 0.2);
                    }
                    .about-circle-bottom {
                        bottom: -4rem;
                        left: -4rem;
                        width: 8rem;
                        height: 8rem;
                        background: rgba(255, 107, 107, 0.2);
                    }
                    .about-layout {
                        position: relative;
                        z-index: 10;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 2rem;
                    }
                    .about-image-column {
                        width: 100%;
                        display: flex;
                        justify-content: center;
                    }
                    .about-image-frame {
                        position: relative;
                        width: 16rem;
                        height: 16rem;
                        overflow: hidden;
                        border-radius: 9999px;
                        border: 2px solid rgba(255, 255, 255, 0.5);
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                        transition: transform 0.5s;
                    }
                    .about-image-frame:hover {
                        transform: scale(1.05);
                    }
                    .about-image {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .about-text {
                        width: 100%;
                        text-align: right;
                    }
                    .about-heading {
                        margin-bottom: 1.5rem;
                        font-size: 1.875rem;
                        font-weight: 700;
                        color: #9B786F;
                        text-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
                    }
                    .about-description {
                        margin-bottom: 1.5rem;
                        font-size: 1.125rem;
                        line-height: 1.625;
                        color: #1f2937;
                    }
                    .about-highlights {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .about-highlight {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        transition: transform 0.3s;
                    }
                    .about-highlight:hover {
                        transform: translateX(-8px);
                    }
                    .about-highlight p {
                        font-size: 1.125rem;
                        font-weight: 500;
                        color: #1f2937;
                    }
                    .about-highlight-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.5);
                        background: rgba(155, 120, 111, 0.2);
                        color: #9B786F;
                    }
                    .about-highlight-icon svg {
                        width: 1.5rem;
                        height: 1.5rem;
                    }
                    .about-more {
                        margin-top: 2rem;
                        padding: 0.75rem 2rem;
                        border: none;
                        border-radius: 9999px;
                        background: #9B786F;
                        color: white;
                        font-weight: 500;
                        cursor: pointer;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        transition: all 0.3s;
                    }
                    .about-more:hover {
                        background: #FF6B6B;
                        transform: translateY(-0.25rem);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    @media (min-width: 768px) {
                        .about-section { padding: 4rem 2rem; }
                        .about-glass { padding: 3rem; }
                        .about-image-frame { width: 20rem; height: 20rem; }
                        .about-heading { font-size: 2.25rem; }
                        .about-description { font-size: 1.25rem; }
                    }
                    @media (min-width: 1024px) {
                        .about-section { padding: 4rem 4rem; }
                        .about-layout { flex-direction: row; gap: 4rem; }
                        .about-image-column { width: 40%; justify-content: flex-start; }
                        .about-text { width: 60%; }
                        .about-heading { font-size: 3rem; }
                    }
                "#}
            </style>
        </section>
    }
}
