//! feedswipe
//!
//! Social timeline with swipe-to-publish composition.
//!
//! The library is a headless core (captions, gestures, markup projection,
//! services) following the Pure Core / Impure Shell split. The `view`
//! module is the terminal shell around it.

pub mod caption;
pub mod config;
pub mod gesture;
pub mod logging;
pub mod markup;
pub mod model;
pub mod render;
pub mod services;
pub mod state;
pub mod view;
