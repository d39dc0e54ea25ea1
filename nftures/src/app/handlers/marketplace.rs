//! # Marketplace Handlers
//!
//! Local-only marketplace actions: balance top-up, NFT upload, buy and the
//! support form. None of these reach the network.

use crate::app::state::{AppState, Dialog, NotificationKind, TopUpForm, UploadForm};
use crate::core::error::AppError;
use crate::i18n::Notice;
use crate::utils::validation::{SupportInput, TopUpInput, UploadInput};
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle top-up form submit
///
/// Internal handler function - use [`crate::app::App::handle_top_up_submit`] instead.
pub(crate) fn handle_top_up_submit(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();

    if !state.is_authenticated() {
        state.notify_error(&AppError::NotAuthenticated, Notice::GenericError);
        return;
    }

    let parsed = TopUpInput::parse(&state.forms.top_up.card_number, &state.forms.top_up.amount);
    let result = parsed
        .map_err(AppError::from)
        .and_then(|input| state.top_up(input));

    match result {
        Ok(eneftix) => {
            state.forms.top_up = TopUpForm::default();
            state.notify(NotificationKind::Success, Notice::ToppedUp(eneftix));
        }
        Err(e) => state.notify_error(&e, Notice::GenericError),
    }
}

/// Handle upload dialog submit
///
/// Internal handler function - use [`crate::app::App::handle_upload_submit`] instead.
pub(crate) fn handle_upload_submit(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();

    let parsed = {
        let form = &state.forms.upload;
        UploadInput::parse(&form.title, &form.description, &form.image_url, &form.price)
    };
    let result = parsed
        .map_err(AppError::from)
        .and_then(|input| state.upload_nft(input));

    match result {
        Ok(_) => {
            state.forms.upload = UploadForm::default();
            if state.dialog == Some(Dialog::UploadNft) {
                state.dialog = None;
            }
            state.notify(NotificationKind::Success, Notice::NftUploaded);
        }
        Err(e) => state.notify_error(&e, Notice::GenericError),
    }
}

/// Buy a listing.
///
/// Intentionally does nothing: no ownership transfer and no balance change.
/// The button is only offered to logged-in users.
pub(crate) fn handle_buy_click(state: Arc<RwLock<AppState>>, listing_id: u64) {
    let state = state.read();
    let user_id = state.session.current_user.as_ref().map(|u| u.id);
    tracing::debug!(listing_id, ?user_id, "Buy clicked, purchasing is not available");
}

/// Handle support form submit.
///
/// The message never leaves the client; a confirmation is shown and the form
/// is cleared.
pub(crate) fn handle_support_submit(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();

    if !state.is_authenticated() {
        state.notify_error(&AppError::NotAuthenticated, Notice::GenericError);
        return;
    }

    match SupportInput::parse(&state.forms.support_message) {
        Ok(input) => {
            tracing::info!(chars = input.message.chars().count(), "Support message accepted");
            state.forms.support_message.clear();
            state.notify(NotificationKind::Success, Notice::MessageSent);
        }
        Err(e) => state.notify_error(&AppError::Validation(e), Notice::GenericError),
    }
}
