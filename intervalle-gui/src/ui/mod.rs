//! # UI Module
//!
//! This module contains all UI components for the Intervalle application.

pub mod fretboard_view;
pub mod main_display;
