//! Scroll Reveal Utilities
//!
//! One-shot entrance animations driven by `IntersectionObserver`.
//! Each observed element is revealed once and then unobserved.
//! Also covers counters, progress bars, lazy images and floating decorations.

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Class added to every revealed element
pub const REVEALED_CLASS: &str = "animate-in";

/// Counter animation length
pub const COUNTER_DURATION_MS: u32 = 2000;
/// Counter update interval (fixed, not frame-locked)
pub const COUNTER_TICK_MS: u32 = 16;
/// Delay before a progress bar is restored to its target width
pub const PROGRESS_DELAY_MS: u32 = 200;

/// Observer configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Visible fraction of the bounding box required to trigger
    pub threshold: f64,
    /// CSS margin applied to the viewport
    pub root_margin: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -60px 0px",
        }
    }
}

/// Whether the host exposes `IntersectionObserver`
pub fn observer_supported() -> bool {
    web_sys::window()
        .map(|win| js_sys::Reflect::has(&win, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Create an observer that calls `on_reveal` once per element.
///
/// The element is unobserved before the callback runs, so an element can
/// never be revealed twice. The returned observer may be given more targets
/// later (e.g. nodes inserted after page load).
pub fn observe_once<F>(options: &RevealOptions, on_reveal: F) -> Result<IntersectionObserver, JsValue>
where
    F: Fn(&Element) + 'static,
{
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                on_reveal(&target);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();
    Ok(observer)
}

/// Default entrance behaviour: mark as revealed, then run the
/// specialised animation for counters and progress bars.
pub fn reveal(element: &Element) {
    let _ = element.class_list().add_1(REVEALED_CLASS);

    let classes = element.class_list();
    if classes.contains("counter") {
        animate_counter(element.clone(), count_target(element));
    }
    if classes.contains("skill-progress") {
        if let Some(bar) = element.dyn_ref::<HtmlElement>() {
            replay_width(bar, PROGRESS_DELAY_MS);
        }
    }
}

// ========================
// Counters
// ========================

/// One step of a counter animation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Intermediate value to display
    Running(u64),
    /// Exact target, animation is over
    Finished(u64),
}

/// Linear 0 → target interpolation in fixed ticks
#[derive(Clone, Debug)]
pub struct CounterTween {
    target: u64,
    ticks: u64,
    done: u64,
}

impl CounterTween {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            ticks: u64::from((COUNTER_DURATION_MS / COUNTER_TICK_MS).max(1)),
            done: 0,
        }
    }

    /// Advance one tick. Values are computed from the tick index, so the
    /// last tick of the window lands exactly on the target.
    pub fn tick(&mut self) -> Tick {
        self.done += 1;
        if self.done >= self.ticks || self.target == 0 {
            return Tick::Finished(self.target);
        }
        let value = u128::from(self.target) * u128::from(self.done) / u128::from(self.ticks);
        Tick::Running(value as u64)
    }
}

/// Read `data-count`; anything missing, negative or unparsable is 0
pub fn count_target(element: &Element) -> u64 {
    element
        .get_attribute("data-count")
        .and_then(|raw| parse_int(&raw))
        .and_then(|n| u64::try_from(n).ok())
        .unwrap_or(0)
}

/// Run a counter animation on `element`'s text
pub fn animate_counter(element: Element, target: u64) {
    wasm_bindgen_futures::spawn_local(async move {
        let mut tween = CounterTween::new(target);
        loop {
            TimeoutFuture::new(COUNTER_TICK_MS).await;
            match tween.tick() {
                Tick::Running(value) => element.set_text_content(Some(&value.to_string())),
                Tick::Finished(value) => {
                    element.set_text_content(Some(&value.to_string()));
                    break;
                }
            }
        }
    });
}

/// Lenient integer parse: optional sign followed by leading digits,
/// trailing garbage ignored. `None` when there are no digits at all.
pub fn parse_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

// ========================
// Progress bars
// ========================

/// Collapse to 0% and restore the inline width after `delay_ms`;
/// the stylesheet's transition does the actual animation.
pub fn replay_width(bar: &HtmlElement, delay_ms: u32) {
    let style = bar.style();
    let width = style.get_property_value("width").unwrap_or_default();
    let _ = style.set_property("width", "0%");

    let bar = bar.clone();
    Timeout::new(delay_ms, move || {
        let _ = bar.style().set_property("width", &width);
    })
    .forget();
}

// ========================
// Lazy images
// ========================

/// Swap `data-src` into `src` once each image is on screen.
/// Without observer support every image is loaded right away.
pub fn lazy_load_images(images: Vec<HtmlImageElement>) {
    if !observer_supported() {
        images.iter().for_each(load_image);
        return;
    }

    let observer = observe_once(&RevealOptions { threshold: 0.0, root_margin: "0px" }, |target| {
        if let Some(img) = target.dyn_ref::<HtmlImageElement>() {
            load_image(img);
        }
    });

    match observer {
        Ok(observer) => images.iter().for_each(|img| observer.observe(img)),
        Err(err) => {
            log::warn!("lazy image observer unavailable: {:?}", err);
            images.iter().for_each(load_image);
        }
    }
}

fn load_image(img: &HtmlImageElement) {
    let Some(src) = img.get_attribute("data-src") else { return };

    let loaded = img.clone();
    let on_load = Closure::<dyn FnMut()>::new(move || {
        let _ = loaded.style().set_property("opacity", "1");
    });
    let _ = img.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
    on_load.forget();

    img.set_src(&src);
    let _ = img.class_list().remove_1("lazy");
}

// ========================
// Floating decorations
// ========================

/// Offset `(x, y)` in px of the `index`-th floating element at `now_ms`
pub fn float_offset(index: usize, now_ms: f64) -> (f64, f64) {
    let i = index as f64;
    let period = 3000.0 + i * 500.0;
    let amplitude = 15.0 + i * 5.0;
    let t = now_ms / period;
    ((t * 0.5).cos() * amplitude * 0.3, t.sin() * amplitude)
}

/// Start the endless float loop for one element
pub fn start_floating(element: HtmlElement, index: usize) {
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(index as u32 * 200).await;
        loop {
            TimeoutFuture::new(COUNTER_TICK_MS).await;
            let (x, y) = float_offset(index, js_sys::Date::now());
            let _ = element.style().set_property("transform", &format!("translate({}px, {}px)", x, y));
        }
    });
}
