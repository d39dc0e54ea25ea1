//! # Reusable UI Widgets
//!
//! Common widgets used across screens.

pub mod forms;
pub mod icons;
pub mod nav_bar;
pub mod nft_card;
pub mod notifications;
