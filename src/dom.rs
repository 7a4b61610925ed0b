use crate::constants::MAX_DPR;
use web_sys as web;

/// Current viewport size in CSS pixels. Zero when the host APIs are absent;
/// the NDC conversion treats that as "pointer at center".
pub fn viewport_size() -> (f32, f32) {
    match web::window() {
        Some(w) => (
            w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32,
            w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32,
        ),
        None => (0.0, 0.0),
    }
}

/// Keep the canvas backing store at CSS size * devicePixelRatio, capped at
/// `MAX_DPR`.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_DPR);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
