//! Analog clock face with a radial countdown timer.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It draws
//! the dial, ticks and hands into a fixed 1000×1000 logical space, scales
//! that space to the device, and runs a countdown that is armed by clicking
//! one of the minute markers. The remaining time shows as a translucent
//! wedge over the face. The host crate only wires DOM events and the frame
//! loop to [`engine::Engine`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`config`] | Clock layout and behaviour settings |
//! | [`theme`] | Embedded visual theme and its validation |
//! | [`style`] | Per-element stroke/fill/shadow style records |
//! | [`geometry`] | Hand angles, tick directions and the timer wedge |
//! | [`viewport`] | Logical-to-device scaling and pointer conversion |
//! | [`hit`] | Hit-testing pointer positions against minute markers |
//! | [`timer`] | Countdown state machine |
//! | [`input`] | Single/double click disambiguation |
//! | [`surface`] | Drawing-surface trait over `Canvas2D` |
//! | [`render`] | Scene rendering |
//! | [`vector`] | 2D vector math |
//! | [`consts`] | Shared numeric constants |

pub mod config;
pub mod consts;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod render;
pub mod style;
pub mod surface;
pub mod theme;
pub mod timer;
pub mod vector;
pub mod viewport;
