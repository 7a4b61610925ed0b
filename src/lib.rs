#![cfg(target_arch = "wasm32")]
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::core::constants::POINT_COUNT;
use crate::core::field::PointField;
use crate::core::sim::Simulation;
use crate::input::PointerState;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

fn wire_canvas_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
) -> events::Subscription {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    events::Subscription::listen::<web::Event>(window.as_ref(), "resize", move |_| {
        dom::sync_canvas_backing_size(&canvas_resize);
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starfield-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("bg-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #bg-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    let resize_sub = wire_canvas_resize(&window, &canvas);

    let mut rng = StdRng::from_entropy();
    let field = PointField::generate(&mut rng, POINT_COUNT);
    let sim = Simulation::new(field);
    log::info!("[field] generated {} points", sim.len());

    // Global input: the canvas sits under the page, so listeners go on the
    // window
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let mut input_subs = events::pointer::wire_input_handlers(&window, &pointer);
    input_subs.push(resize_sub);

    let motion = events::motion::MotionGate::wire(&window, &document);

    // Initialize WebGPU; on failure the backdrop stays static instead of
    // taking the page down
    let gpu = frame::init_gpu(&canvas, sim.positions()).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sim,
        pointer,
        motion,
        canvas,
        gpu,
        last_instant: Instant::now(),
        input_subs,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
