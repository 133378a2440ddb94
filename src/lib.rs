//! A desktop calculator with a clickable keypad.
//!
//! The arithmetic lives in [`calculator`], a button-driven state machine
//! with no UI dependencies. [`ui`] renders it in a GPUI window.

pub mod calculator;
pub mod clipboard;
pub mod config;
pub mod ui;
