use crate::core::constants::{PULSE_TAP, PULSE_WHEEL};

/// Shared pointer state: normalized device coordinates plus the tap/scroll
/// pulse. Written by the event layer, read (and pulse-decayed) by the frame
/// loop; both run on the UI thread so the frame boundary is the only
/// synchronization needed.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub pulse: f32,
}

impl PointerState {
    /// Update from viewport-space client coordinates.
    #[inline]
    pub fn set_from_client(&mut self, client_x: f32, client_y: f32, vw: f32, vh: f32) {
        let (x, y) = client_to_ndc(client_x, client_y, vw, vh);
        self.x = x;
        self.y = y;
    }

    /// Tap or click: full-strength pulse.
    #[inline]
    pub fn on_down(&mut self) {
        self.pulse = PULSE_TAP;
    }

    /// Scroll: raise the pulse, never lower an already-stronger one.
    #[inline]
    pub fn on_wheel(&mut self) {
        self.pulse = self.pulse.max(PULSE_WHEEL);
    }
}

/// Map client coordinates to normalized device coordinates in [-1,1]².
///
/// y is inverted to match the right-handed scene convention (up is +y). A
/// degenerate viewport maps to the center rather than producing non-finite
/// values.
#[inline]
pub fn client_to_ndc(client_x: f32, client_y: f32, vw: f32, vh: f32) -> (f32, f32) {
    if vw <= 0.0 || vh <= 0.0 {
        return (0.0, 0.0);
    }
    let x = (client_x / vw) * 2.0 - 1.0;
    let y = -((client_y / vh) * 2.0 - 1.0);
    (x, y)
}

/// Animation gate: 0 when the user prefers reduced motion or the page is
/// hidden, else 1.
#[inline]
pub fn motion_ratio(reduced_motion: bool, hidden: bool) -> f32 {
    if reduced_motion || hidden {
        0.0
    } else {
        1.0
    }
}
