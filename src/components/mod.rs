mod app;
mod sensor_error_notice;
mod shake_controls;
mod shake_display;

pub use app::ShakeCounter;
pub use sensor_error_notice::SensorErrorNotice;
pub use shake_controls::ShakeControls;
pub use shake_display::ShakeDisplay;
