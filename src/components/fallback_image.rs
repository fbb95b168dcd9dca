use log::warn;
use yew::prelude::*;

use crate::config::DEFAULT_IMAGE_FALLBACK;

/// Which source an image is currently showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    Primary(AttrValue),
    Fallback(AttrValue),
}

impl ImageSource {
    pub fn src(&self) -> &AttrValue {
        match self {
            ImageSource::Primary(src) | ImageSource::Fallback(src) => src,
        }
    }

    /// Swaps to `fallback` after a load error. Happens at most once, so a
    /// broken fallback does not loop.
    pub fn on_error(&self, fallback: &AttrValue) -> Option<ImageSource> {
        match self {
            ImageSource::Primary(_) => Some(ImageSource::Fallback(fallback.clone())),
            ImageSource::Fallback(_) => None,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or(AttrValue::Static(DEFAULT_IMAGE_FALLBACK))]
    pub fallback: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub sizes: Option<AttrValue>,
}

#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let source = use_state_eq(|| ImageSource::Primary(props.src.clone()));

    // Follow prop changes.
    {
        let source = source.clone();
        use_effect_with_deps(
            move |src| {
                source.set(ImageSource::Primary(src.clone()));
                || ()
            },
            props.src.clone(),
        );
    }

    let onerror = {
        let source = source.clone();
        let fallback = props.fallback.clone();
        Callback::from(move |_: Event| {
            if let Some(next) = source.on_error(&fallback) {
                warn!("Image {} failed to load, using fallback", source.src());
                source.set(next);
            }
        })
    };

    html! {
        <img
            src={source.src().clone()}
            alt={props.alt.clone()}
            class={props.class.clone()}
            sizes={props.sizes.clone()}
            {onerror}
        />
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn broken_image_gets_fallback_source() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let handle = yew::Renderer::<FallbackImage>::with_root_and_props(
            root.clone(),
            FallbackImageProps {
                src: AttrValue::Static("/does-not-exist.svg"),
                alt: AttrValue::Static("איכות ומקצועיות במסעדה אלפא"),
                fallback: AttrValue::Static(DEFAULT_IMAGE_FALLBACK),
                class: Classes::new(),
                sizes: None,
            },
        )
        .render();

        TimeoutFuture::new(1000).await;

        let img = root.query_selector("img").unwrap().unwrap();
        assert_eq!(img.get_attribute("src").as_deref(), Some(DEFAULT_IMAGE_FALLBACK));

        handle.destroy();
        root.remove();
    }
}
