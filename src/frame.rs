use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::sim::Simulation;
use crate::events::motion::MotionGate;
use crate::events::Subscription;
use crate::input::PointerState;
use crate::render;

/// Everything the per-frame tick touches.
///
/// The input subscriptions live here so the listeners stay registered exactly
/// as long as the frame loop owns them.
pub struct FrameContext {
    pub sim: Simulation,
    pub pointer: Rc<RefCell<PointerState>>,
    pub motion: MotionGate,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'static>>,

    pub last_instant: Instant,
    pub input_subs: Vec<Subscription>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32();

        let ratio = self.motion.ratio();
        {
            let mut ps = self.pointer.borrow_mut();
            self.sim.advance(dt_sec, &mut ps, ratio);
        }

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            let dirty = self.sim.take_dirty();
            if let Err(e) = g.render(
                self.sim.positions(),
                self.sim.rotation_x(),
                self.sim.rotation_y(),
                self.sim.point_size(),
                dirty,
            ) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    positions: &[Vec3],
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, positions).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
