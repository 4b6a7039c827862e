//! Wall clock for the animation curves, in milliseconds.

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}
