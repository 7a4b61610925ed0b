use std::cell::RefCell;
use std::rc::Rc;

use web_sys as web;

use super::Subscription;
use crate::dom;
use crate::input::PointerState;

/// Wire global pointer/touch/wheel handlers.
///
/// Listeners go on the window, not the canvas: the backdrop sits under the
/// page content, and the effect should follow the pointer even when a card
/// or link is visually on top.
pub fn wire_input_handlers(
    window: &web::Window,
    pointer: &Rc<RefCell<PointerState>>,
) -> Vec<Subscription> {
    vec![
        wire_pointermove(window, pointer),
        wire_pointerdown(window, pointer),
        wire_wheel(window, pointer),
        wire_touchmove(window, pointer),
    ]
}

fn wire_pointermove(window: &web::Window, pointer: &Rc<RefCell<PointerState>>) -> Subscription {
    let pointer = pointer.clone();
    Subscription::listen::<web::PointerEvent>(window.as_ref(), "pointermove", move |ev| {
        let (vw, vh) = dom::viewport_size();
        pointer
            .borrow_mut()
            .set_from_client(ev.client_x() as f32, ev.client_y() as f32, vw, vh);
    })
}

fn wire_pointerdown(window: &web::Window, pointer: &Rc<RefCell<PointerState>>) -> Subscription {
    let pointer = pointer.clone();
    Subscription::listen::<web::PointerEvent>(window.as_ref(), "pointerdown", move |_ev| {
        pointer.borrow_mut().on_down();
    })
}

fn wire_wheel(window: &web::Window, pointer: &Rc<RefCell<PointerState>>) -> Subscription {
    let pointer = pointer.clone();
    Subscription::listen::<web::WheelEvent>(window.as_ref(), "wheel", move |_ev| {
        pointer.borrow_mut().on_wheel();
    })
}

fn wire_touchmove(window: &web::Window, pointer: &Rc<RefCell<PointerState>>) -> Subscription {
    let pointer = pointer.clone();
    Subscription::listen::<web::TouchEvent>(window.as_ref(), "touchmove", move |ev| {
        if let Some(touch) = ev.touches().get(0) {
            let (vw, vh) = dom::viewport_size();
            pointer.borrow_mut().set_from_client(
                touch.client_x() as f32,
                touch.client_y() as f32,
                vw,
                vh,
            );
        }
    })
}
