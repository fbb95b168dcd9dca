use yew::{classes, Classes};

use crate::reveal::Reveal;

/// How an element enters once its section is revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Slides up from an offset while becoming opaque.
    Slide,
    /// Opacity keyframe animation, no movement.
    Fade,
}

/// A statically delayed element inside a revealed section. Every stage is
/// driven by the same `Reveal`; only the delay differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stage {
    pub name: &'static str,
    pub delay_ms: u32,
    pub effect: Effect,
}

impl Stage {
    pub const fn new(name: &'static str, delay_ms: u32, effect: Effect) -> Self {
        Self {
            name,
            delay_ms,
            effect,
        }
    }

    pub fn classes(&self, reveal: Reveal) -> Classes {
        let state = match self.effect {
            Effect::Slide => reveal.pick("reveal-hidden", "reveal-shown"),
            Effect::Fade => reveal.pick("fade-hidden", "fade-in"),
        };
        classes!("reveal-stage", state)
    }

    pub fn style(&self) -> String {
        match self.effect {
            Effect::Slide => format!("transition-delay: {}ms;", self.delay_ms),
            Effect::Fade => format!("animation-delay: {}ms;", self.delay_ms),
        }
    }
}

pub const HERO_CARD: Stage = Stage::new("card", 0, Effect::Slide);
pub const HERO_BADGE: Stage = Stage::new("badge", 0, Effect::Fade);
pub const HERO_HEADLINE: Stage = Stage::new("headline", 300, Effect::Slide);
pub const HERO_SUBHEADING: Stage = Stage::new("subheading", 500, Effect::Slide);
pub const HERO_CTA: Stage = Stage::new("cta", 700, Effect::Slide);

/// Hero stages in document order.
#[cfg(test)]
pub const HERO_STAGES: [Stage; 5] = [HERO_CARD, HERO_BADGE, HERO_HEADLINE, HERO_SUBHEADING, HERO_CTA];

/// Shared rules behind the classes `Stage::classes` hands out.
pub const REVEAL_CSS: &str = r#"
    .reveal-stage {
        transition-property: transform, opacity;
        transition-duration: 1s;
        transition-timing-function: ease-in-out;
    }
    .reveal-hidden {
        opacity: 0;
        transform: translateY(2.5rem);
    }
    .reveal-shown {
        opacity: 1;
        transform: translateY(0);
    }
    .fade-hidden {
        opacity: 0;
    }
    .fade-in {
        animation: fadeIn 1.5s ease-out both;
    }
    @keyframes fadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
"#;

/// The whole about section enters as one block.
pub const ABOUT_SECTION: Stage = Stage::new("about", 0, Effect::Slide);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_delays_follow_document_order() {
        let delays: Vec<u32> = HERO_STAGES.iter().map(|stage| stage.delay_ms).collect();
        assert_eq!(delays, vec![0, 0, 300, 500, 700]);
        assert!(delays.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn one_flag_switches_every_stage() {
        for stage in HERO_STAGES {
            let hidden = stage.classes(Reveal::Hidden);
            let shown = stage.classes(Reveal::Revealed);
            assert_ne!(hidden, shown, "stage {} did not change", stage.name);
        }
    }

    #[test]
    fn slide_classes() {
        assert_eq!(HERO_HEADLINE.classes(Reveal::Hidden), classes!("reveal-stage", "reveal-hidden"));
        assert_eq!(HERO_HEADLINE.classes(Reveal::Revealed), classes!("reveal-stage", "reveal-shown"));
    }

    #[test]
    fn fade_classes() {
        assert_eq!(HERO_BADGE.classes(Reveal::Hidden), classes!("reveal-stage", "fade-hidden"));
        assert_eq!(HERO_BADGE.classes(Reveal::Revealed), classes!("reveal-stage", "fade-in"));
    }

    #[test]
    fn delay_lands_in_style() {
        assert_eq!(HERO_CTA.style(), "transition-delay: 700ms;");
        assert_eq!(HERO_BADGE.style(), "animation-delay: 0ms;");
    }
}
