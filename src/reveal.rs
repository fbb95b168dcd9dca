use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Whether a section is still waiting for its enter transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Hidden,
    Revealed,
}

impl Reveal {
    pub fn is_revealed(self) -> bool {
        matches!(self, Reveal::Revealed)
    }

    /// The only transition there is. Nothing leads back to `Hidden`.
    pub fn advance(self) -> Self {
        Reveal::Revealed
    }

    pub fn pick<T>(self, hidden: T, shown: T) -> T {
        if self.is_revealed() {
            shown
        } else {
            hidden
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewportOptions {
    /// Fraction of the element that has to be visible, in `0.0..=1.0`.
    pub threshold: f64,
    /// CSS margin around the viewport, e.g. `"0px 0px -50px 0px"`.
    pub root_margin: Option<String>,
}

impl ViewportOptions {
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            root_margin: None,
        }
    }

    pub fn with_root_margin(mut self, margin: impl Into<String>) -> Self {
        self.root_margin = Some(margin.into());
        self
    }
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Trigger {
    /// Reveal right after the first render commit.
    Mount,
    /// Reveal the first time the element scrolls into view.
    Viewport(ViewportOptions),
}

/// One observer entry, detached from the browser types.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

pub trait ObserverHandle {
    fn disconnect(&mut self);
}

/// Owns the reveal state of one section and, for viewport triggers, the
/// observer feeding it. The subscriber hears about the transition once.
pub struct RevealController<H: ObserverHandle = BrowserObserver> {
    trigger: Trigger,
    state: Reveal,
    observer: Option<H>,
    on_change: Callback<Reveal>,
}

impl<H: ObserverHandle> RevealController<H> {
    pub fn new(trigger: Trigger, on_change: Callback<Reveal>) -> Self {
        Self {
            trigger,
            state: Reveal::Hidden,
            observer: None,
            on_change,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> Reveal {
        self.state
    }

    #[cfg(test)]
    pub fn active_observers(&self) -> usize {
        usize::from(self.observer.is_some())
    }

    /// Called once the first render has been committed.
    pub fn rendered(&mut self) {
        if self.trigger == Trigger::Mount {
            self.transition();
        }
    }

    /// Starts observing `target`. A missing target is skipped silently, and
    /// an instance never holds more than one observer.
    pub fn attach<T>(
        &mut self,
        target: Option<T>,
        observe: impl FnOnce(T, &ViewportOptions) -> Option<H>,
    ) {
        let Trigger::Viewport(options) = &self.trigger else {
            return;
        };
        if self.observer.is_some() {
            return;
        }
        let Some(target) = target else {
            debug!("Reveal target not attached, skipping observation");
            return;
        };
        self.observer = observe(target, options);
    }

    pub fn observe(&mut self, samples: impl IntoIterator<Item = IntersectionSample>) {
        if !matches!(self.trigger, Trigger::Viewport(_)) {
            return;
        }
        // Keeps listening after the reveal; later entries are no-ops.
        if let Some(sample) = samples.into_iter().find(|sample| sample.is_intersecting) {
            debug!("Intersection at ratio {:.2}", sample.ratio);
            self.transition();
        }
    }

    /// Releases the observer whether or not the reveal already happened.
    pub fn detach(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
        }
    }

    fn transition(&mut self) {
        if self.state.is_revealed() {
            return;
        }
        self.state = self.state.advance();
        debug!("Section revealed ({:?})", self.trigger);
        self.on_change.emit(self.state);
    }
}

impl<H: ObserverHandle> Drop for RevealController<H> {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
thread_local! {
    static LIVE_BROWSER_OBSERVERS: std::cell::Cell<usize> = std::cell::Cell::new(0);
}

/// A browser `IntersectionObserver` watching a single element.
pub struct BrowserObserver {
    observer: IntersectionObserver,
    _on_entries: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl BrowserObserver {
    pub fn observe(
        target: &Element,
        options: &ViewportOptions,
        mut on_samples: impl FnMut(Vec<IntersectionSample>) + 'static,
    ) -> Option<Self> {
        let on_entries = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            let samples = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| IntersectionSample {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                })
                .collect();
            on_samples(samples);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        if let Some(margin) = &options.root_margin {
            init.set_root_margin(margin);
        }

        let observer = match IntersectionObserver::new_with_options(
            on_entries.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(observer) => observer,
            Err(err) => {
                warn!("Could not create intersection observer: {:?}", err);
                return None;
            }
        };
        observer.observe(target);
        #[cfg(test)]
        LIVE_BROWSER_OBSERVERS.with(|live| live.set(live.get() + 1));

        Some(Self {
            observer,
            _on_entries: on_entries,
        })
    }
}

impl ObserverHandle for BrowserObserver {
    fn disconnect(&mut self) {
        self.observer.disconnect();
        #[cfg(test)]
        LIVE_BROWSER_OBSERVERS.with(|live| live.set(live.get() - 1));
    }
}

#[hook]
pub fn use_mount_reveal() -> Reveal {
    let state = use_state_eq(Reveal::default);

    {
        let setter = state.setter();
        // Effects run after the render is committed, so the hidden styles
        // are in the DOM before they get swapped out.
        use_effect_with_deps(
            move |_| {
                let mut controller: RevealController =
                    RevealController::new(Trigger::Mount, Callback::from(move |reveal| setter.set(reveal)));
                controller.rendered();
                || ()
            },
            (),
        );
    }

    *state
}

#[hook]
pub fn use_viewport_reveal(node: NodeRef, options: ViewportOptions) -> Reveal {
    let state = use_state_eq(Reveal::default);

    {
        let setter = state.setter();
        use_effect_with_deps(
            move |(node, options)| {
                let controller: Rc<RefCell<RevealController>> = Rc::new(RefCell::new(
                    RevealController::new(
                        Trigger::Viewport(options.clone()),
                        Callback::from(move |reveal| setter.set(reveal)),
                    ),
                ));

                let weak = Rc::downgrade(&controller);
                controller
                    .borrow_mut()
                    .attach(node.cast::<Element>(), move |element, options| {
                        BrowserObserver::observe(&element, options, move |samples| {
                            if let Some(controller) = weak.upgrade() {
                                controller.borrow_mut().observe(samples);
                            }
                        })
                    });

                move || controller.borrow_mut().detach()
            },
            (node, options),
        );
    }

    *state
}
