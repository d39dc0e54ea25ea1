//! # Screen Modules
//!
//! One module per tab, plus the modal dialogs.
//!
//! ## Rendering Pattern
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
//!     // Read from the state snapshot
//!     // Call app.handle_* methods for actions
//! }
//! ```
//!
//! Screens receive a cloned state snapshot, so no lock is held while
//! rendering. Every label comes from the same snapshot, which keeps a frame
//! in a single language.

pub mod about;
pub mod dialogs;
pub mod home;
pub mod profile;
pub mod settings;
pub mod support;
