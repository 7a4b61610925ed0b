use std::cell::Cell;
use std::rc::Rc;

use web_sys as web;

use super::Subscription;
use crate::input;

/// Live animation gate over the reduced-motion preference and tab
/// visibility.
///
/// Both conditions are re-evaluated whenever either changes, so un-hiding a
/// tab while reduced motion is active still yields 0. When `matchMedia` is
/// unavailable the gate degrades to visibility-only; the animation runs
/// rather than the page failing.
pub struct MotionGate {
    ratio: Rc<Cell<f32>>,
    _subs: Vec<Subscription>,
}

impl MotionGate {
    pub fn wire(window: &web::Window, document: &web::Document) -> Self {
        let ratio = Rc::new(Cell::new(1.0_f32));
        let query = window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten();

        let compute: Rc<dyn Fn()> = {
            let ratio = ratio.clone();
            let query = query.clone();
            let document = document.clone();
            Rc::new(move || {
                let reduced = query.as_ref().map(|q| q.matches()).unwrap_or(false);
                ratio.set(input::motion_ratio(reduced, document.hidden()));
            })
        };
        compute();

        let mut subs = Vec::new();
        if let Some(q) = &query {
            let on_change = compute.clone();
            subs.push(Subscription::listen::<web::MediaQueryListEvent>(
                q.as_ref(),
                "change",
                move |_| on_change(),
            ));
        }
        let on_visibility = compute.clone();
        subs.push(Subscription::listen::<web::Event>(
            document.as_ref(),
            "visibilitychange",
            move |_| on_visibility(),
        ));

        Self { ratio, _subs: subs }
    }

    #[inline]
    pub fn ratio(&self) -> f32 {
        self.ratio.get()
    }
}
