// SPDX-License-Identifier: MPL-2.0
pub mod compare_slider;
pub mod reveal_sensor;

pub use compare_slider::CompareSlider;
pub use reveal_sensor::{reveal_sensor, RevealSensor};
