//! UI module - reusable widgets for the board screen

pub mod components;
