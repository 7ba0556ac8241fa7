//! UI module - reusable widgets drawn by the app views

pub mod components;
