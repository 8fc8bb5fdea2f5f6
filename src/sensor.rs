use crate::detector::{MotionSample, PermissionState, SensorError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

const MOTION_EVENT: &str = "devicemotion";

/// Log a message to the browser console.
pub fn log_info(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

/// Log a warning message to the browser console.
///
/// Used for sensor failures; the widget itself shows a shorter message.
pub fn log_warning(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

/// Wall-clock milliseconds, the time base of the cooldown gate.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Ask the platform for motion-sensor access.
///
/// # Platform Differences
///
/// - iOS Safari exposes `DeviceMotionEvent.requestPermission()`, which must
///   resolve to `"granted"` before any `devicemotion` event is delivered.
/// - Most other browsers have no such function: access is implicit and this
///   returns [`PermissionState::NotRequired`].
/// - Browsers without `DeviceMotionEvent` at all, a throwing request, or a
///   rejected promise all yield [`SensorError::SensorAccess`].
pub async fn request_access() -> Result<PermissionState, SensorError> {
    let window = web_sys::window().ok_or(SensorError::SensorAccess)?;
    let motion_event = js_sys::Reflect::get(&window, &JsValue::from_str("DeviceMotionEvent"))
        .map_err(|_| SensorError::SensorAccess)?;
    if motion_event.is_undefined() || motion_event.is_null() {
        return Err(SensorError::SensorAccess);
    }

    let request = js_sys::Reflect::get(&motion_event, &JsValue::from_str("requestPermission"))
        .map_err(|_| SensorError::SensorAccess)?;
    let Some(request) = request.dyn_ref::<js_sys::Function>() else {
        return Ok(PermissionState::NotRequired);
    };

    let pending = request
        .call0(&motion_event)
        .map_err(|_| SensorError::SensorAccess)?;
    let response = JsFuture::from(js_sys::Promise::resolve(&pending))
        .await
        .map_err(|_| SensorError::SensorAccess)?;

    // A non-string response is not "granted", so it reads as a refusal
    Ok(PermissionState::from_response(
        &response.as_string().unwrap_or_default(),
    ))
}

/// Read the gravity-inclusive acceleration out of a motion event.
fn sample_from_event(event: &web_sys::DeviceMotionEvent) -> Option<MotionSample> {
    let accel = event.acceleration_including_gravity()?;
    Some(MotionSample::from_axes(accel.x(), accel.y(), accel.z()))
}

/// A `devicemotion` listener on `window`, removed when dropped.
pub struct MotionListener {
    window: web_sys::Window,
    callback: Closure<dyn FnMut(web_sys::DeviceMotionEvent)>,
}

impl MotionListener {
    pub fn attach(mut on_sample: impl FnMut(MotionSample) + 'static) -> Result<Self, SensorError> {
        let window = web_sys::window().ok_or(SensorError::SensorAccess)?;

        let callback = Closure::wrap(Box::new(move |event: web_sys::DeviceMotionEvent| {
            if let Some(sample) = sample_from_event(&event) {
                on_sample(sample);
            }
        }) as Box<dyn FnMut(web_sys::DeviceMotionEvent)>);

        window
            .add_event_listener_with_callback(MOTION_EVENT, callback.as_ref().unchecked_ref())
            .map_err(|_| SensorError::SensorAccess)?;

        Ok(Self { window, callback })
    }
}

impl Drop for MotionListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            MOTION_EVENT,
            self.callback.as_ref().unchecked_ref(),
        );
        log_info("Shake counter: motion listener detached");
    }
}
