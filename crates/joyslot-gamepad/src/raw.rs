//! Raw button and axis indices as delivered by the device layer.
//!
//! The numbering follows the SDL game controller enums so the SDL2 adapter can
//! forward indices unchanged.

pub const AXIS_LEFT_X: u8 = 0;
pub const AXIS_LEFT_Y: u8 = 1;
pub const AXIS_RIGHT_X: u8 = 2;
pub const AXIS_RIGHT_Y: u8 = 3;
pub const AXIS_TRIGGER_LEFT: u8 = 4;
pub const AXIS_TRIGGER_RIGHT: u8 = 5;

pub const BUTTON_A: u8 = 0;
pub const BUTTON_B: u8 = 1;
pub const BUTTON_X: u8 = 2;
pub const BUTTON_Y: u8 = 3;
pub const BUTTON_BACK: u8 = 4;
pub const BUTTON_GUIDE: u8 = 5;
pub const BUTTON_START: u8 = 6;
pub const BUTTON_LEFT_STICK: u8 = 7;
pub const BUTTON_RIGHT_STICK: u8 = 8;
pub const BUTTON_LEFT_SHOULDER: u8 = 9;
pub const BUTTON_RIGHT_SHOULDER: u8 = 10;
pub const BUTTON_DPAD_UP: u8 = 11;
pub const BUTTON_DPAD_DOWN: u8 = 12;
pub const BUTTON_DPAD_LEFT: u8 = 13;
pub const BUTTON_DPAD_RIGHT: u8 = 14;
pub const BUTTON_MISC1: u8 = 15;
pub const BUTTON_PADDLE1: u8 = 16;
pub const BUTTON_PADDLE2: u8 = 17;
pub const BUTTON_PADDLE3: u8 = 18;
pub const BUTTON_PADDLE4: u8 = 19;
pub const BUTTON_TOUCHPAD: u8 = 20;

/// Number of buttons a game controller reports.
pub const BUTTON_COUNT: u32 = 21;

/// Largest magnitude of an axis sample.
pub const AXIS_MAX: i32 = 32767;
