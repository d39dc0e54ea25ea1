//! # Application State Types
//!
//! All state of one UI session: active tab, locale and theme, the auth
//! session, the local marketplace, open dialog, form buffers and pending
//! notifications. The pure state transitions (top-up, upload, logout, error
//! surfacing) live here so they can be tested without a window or a network.

use std::sync::Arc;

use shared::User;

use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::i18n::{self, Label, Locale, Notice};
use crate::utils::validation::{TopUpInput, UploadInput};

/// Listing fee charged on every upload, in eneftix
pub const UPLOAD_FEE: u64 = 15;

/// Currency units per eneftix when topping up
pub const UNITS_PER_ENEFTIX: u64 = 10;

/// Eneftix credited for a top-up of `amount` currency units
pub fn eneftix_for(amount: u64) -> u64 {
    amount / UNITS_PER_ENEFTIX
}

/// Top-level tabs, mutually exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Profile,
    Support,
    About,
    Settings,
}

impl Tab {
    /// Get all tabs in navigation order
    pub fn all() -> &'static [Tab] {
        &[Tab::Home, Tab::Profile, Tab::Support, Tab::About, Tab::Settings]
    }

    /// Label used for the tab button and page heading
    pub fn label(&self) -> Label {
        match self {
            Tab::Home => Label::Home,
            Tab::Profile => Label::Profile,
            Tab::Support => Label::Support,
            Tab::About => Label::About,
            Tab::Settings => Label::Settings,
        }
    }
}

/// Modal dialogs; at most one is open at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    Login,
    Register,
    Verify,
    ForgotPassword,
    ResetPassword,
    UpdateNickname,
    UploadNft,
}

impl Dialog {
    /// Dialogs only reachable with a logged-in user
    pub fn requires_auth(&self) -> bool {
        matches!(self, Dialog::UpdateNickname | Dialog::UploadNft)
    }
}

/// Which secondary factor the verify dialog asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerifyMode {
    #[default]
    Code,
    Password,
}

/// Bridges register/login to the verify dialog
#[derive(Clone, PartialEq, Eq)]
pub struct PendingVerification {
    pub user_id: i64,
    /// Password typed at register/login, reused by verify-with-password
    pub password: String,
    pub mode: VerifyMode,
}

impl std::fmt::Debug for PendingVerification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingVerification")
            .field("user_id", &self.user_id)
            .field("password", &"***")
            .field("mode", &self.mode)
            .finish()
    }
}

/// Coarse session phase derived from [`SessionState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Anonymous,
    PendingVerification,
    PasswordResetPending,
    Authenticated,
}

/// Auth session of the single local user
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub current_user: Option<User>,
    pub pending_verification: Option<PendingVerification>,
    /// User id returned by `forgot_password`, awaiting the reset code
    pub pending_reset: Option<i64>,
}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        if self.current_user.is_some() {
            SessionPhase::Authenticated
        } else if self.pending_verification.is_some() {
            SessionPhase::PendingVerification
        } else if self.pending_reset.is_some() {
            SessionPhase::PasswordResetPending
        } else {
            SessionPhase::Anonymous
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn user(&self) -> Result<&User> {
        self.current_user.as_ref().ok_or(AppError::NotAuthenticated)
    }

    pub fn user_mut(&mut self) -> Result<&mut User> {
        self.current_user.as_mut().ok_or(AppError::NotAuthenticated)
    }
}

/// A listed artwork
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NftListing {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Price in eneftix
    pub price: u64,
    pub owner_id: i64,
    pub creator_id: i64,
}

/// Append-only local listing collection
#[derive(Debug, Clone, Default)]
pub struct Marketplace {
    listings: Vec<NftListing>,
}

impl Marketplace {
    pub fn listings(&self) -> &[NftListing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Append a listing owned and created by `creator_id`; ids are count + 1.
    fn append(&mut self, input: UploadInput, creator_id: i64) -> &NftListing {
        let id = self.listings.len() as u64 + 1;
        self.listings.push(NftListing {
            id,
            title: input.title,
            description: input.description,
            image_url: input.image_url,
            price: input.price,
            owner_id: creator_id,
            creator_id,
        });
        &self.listings[self.listings.len() - 1]
    }
}

/// Login dialog fields
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Register dialog fields
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub nickname: String,
}

/// Verify dialog fields (both modes)
#[derive(Debug, Clone, Default)]
pub struct VerifyForm {
    pub code: String,
    pub password: String,
}

/// Forgot-password dialog fields
#[derive(Debug, Clone, Default)]
pub struct ForgotPasswordForm {
    pub email: String,
}

/// Reset-password dialog fields
#[derive(Debug, Clone, Default)]
pub struct ResetPasswordForm {
    pub code: String,
    pub new_password: String,
}

/// Profile top-up card
#[derive(Debug, Clone, Default)]
pub struct TopUpForm {
    pub card_number: String,
    pub amount: String,
}

/// Upload dialog fields
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: String,
}

/// Raw text buffers behind every form, parsed only on submit
#[derive(Debug, Clone, Default)]
pub struct Forms {
    pub login: LoginForm,
    pub register: RegisterForm,
    pub verify: VerifyForm,
    pub forgot_password: ForgotPasswordForm,
    pub reset_password: ResetPasswordForm,
    pub nickname: String,
    pub top_up: TopUpForm,
    pub upload: UploadForm,
    pub support_message: String,
}

/// Requests sent to the auth endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Register,
    Verify,
    VerifyWithPassword,
    Login,
    ForgotPassword,
    ResetPassword,
    UpdateNickname,
}

impl AuthAction {
    /// Generic message shown when the request fails below the application level
    pub fn generic_error(&self) -> Notice {
        match self {
            AuthAction::Register => Notice::RegistrationError,
            AuthAction::Verify | AuthAction::VerifyWithPassword => Notice::VerificationError,
            AuthAction::Login => Notice::LoginError,
            AuthAction::ForgotPassword | AuthAction::ResetPassword | AuthAction::UpdateNickname => {
                Notice::GenericError
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// Toast waiting to be shown by the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub active_tab: Tab,
    pub locale: Locale,
    pub dark_mode: bool,
    pub session: SessionState,
    pub marketplace: Marketplace,
    pub dialog: Option<Dialog>,
    pub forms: Forms,
    /// Outstanding auth request, if any
    pub in_flight: Option<AuthAction>,
    /// Toasts queued since the last frame
    pub pending_notifications: Vec<Notification>,
    /// Echo server-issued codes in toasts (see `AppConfig::insecure_echo_codes`)
    pub insecure_echo_codes: bool,
    /// API client shared with spawned requests
    pub api_client: Option<Arc<dyn ApiService>>,
}

impl AppState {
    pub fn new(api_client: Option<Arc<dyn ApiService>>, insecure_echo_codes: bool) -> Self {
        Self {
            active_tab: Tab::Home,
            locale: Locale::default(),
            dark_mode: false,
            session: SessionState::default(),
            marketplace: Marketplace::default(),
            dialog: None,
            forms: Forms::default(),
            in_flight: None,
            pending_notifications: Vec::new(),
            insecure_echo_codes,
            api_client,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Localized label in the active locale
    pub fn t(&self, label: Label) -> &'static str {
        i18n::t(self.locale, label)
    }

    /// Queue a localized notice
    pub fn notify(&mut self, kind: NotificationKind, notice: Notice) {
        let message = notice.text(self.locale);
        self.push_notification(kind, message);
    }

    pub fn push_notification(&mut self, kind: NotificationKind, message: String) {
        self.pending_notifications.push(Notification { kind, message });
    }

    /// Surface an error as a toast.
    ///
    /// Server errors are shown verbatim; transport failures collapse to
    /// `fallback` so raw details never reach the user.
    pub fn notify_error(&mut self, err: &AppError, fallback: Notice) {
        match err {
            AppError::Api(message) => {
                self.push_notification(NotificationKind::Error, message.clone());
            }
            AppError::Network(detail) => {
                tracing::warn!(error = %detail, "Request failed below the application level");
                self.notify(NotificationKind::Error, fallback);
            }
            AppError::Validation(v) => {
                let message = i18n::validation_message(self.locale, *v).to_string();
                self.push_notification(NotificationKind::Error, message);
            }
            AppError::Unverified { .. } => {
                self.notify(NotificationKind::Error, Notice::PleaseVerifyEmail);
            }
            AppError::NotAuthenticated => {
                let message = self.t(Label::LoginRequired).to_string();
                self.push_notification(NotificationKind::Error, message);
            }
            AppError::InsufficientBalance { .. } => {
                let message = self.t(Label::NotEnoughBalance).to_string();
                self.push_notification(NotificationKind::Error, message);
            }
            AppError::State(detail) => {
                tracing::warn!(error = %detail, "Invalid state transition");
                self.notify(NotificationKind::Error, fallback);
            }
        }
    }

    /// Take all queued notifications
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending_notifications)
    }

    /// Credit `floor(amount / 10)` eneftix to the current user.
    ///
    /// Returns the credited amount. No payment is executed.
    pub fn top_up(&mut self, input: TopUpInput) -> Result<u64> {
        let user = self.session.user_mut()?;
        let eneftix = eneftix_for(input.amount);
        user.balance = user.balance.saturating_add(eneftix);
        tracing::info!(user_id = user.id, eneftix, balance = user.balance, "Balance topped up");
        Ok(eneftix)
    }

    /// List an artwork for the current user, charging [`UPLOAD_FEE`].
    ///
    /// Returns the new listing id. Nothing changes when the balance is short.
    pub fn upload_nft(&mut self, input: UploadInput) -> Result<u64> {
        let user = self.session.user()?;
        if user.balance < UPLOAD_FEE {
            return Err(AppError::InsufficientBalance {
                balance: user.balance,
                required: UPLOAD_FEE,
            });
        }
        let creator_id = user.id;

        let id = self.marketplace.append(input, creator_id).id;
        let user = self.session.user_mut()?;
        user.balance -= UPLOAD_FEE;
        tracing::info!(listing_id = id, user_id = creator_id, balance = user.balance, "NFT listed");
        Ok(id)
    }

    /// Drop the current user and everything only they could see.
    pub fn logout(&mut self) {
        if let Some(user) = self.session.current_user.take() {
            tracing::info!(user_id = user.id, "Logged out");
        }
        if self.dialog.is_some_and(|d| d.requires_auth()) {
            self.dialog = None;
        }
        self.forms.nickname.clear();
        self.forms.top_up = TopUpForm::default();
        self.forms.upload = UploadForm::default();
        self.forms.support_message.clear();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rstest::rstest;

    pub(crate) fn user(balance: u64) -> User {
        User {
            id: 42,
            email: "artist@example.com".to_string(),
            nickname: Some("artist".to_string()),
            balance,
        }
    }

    fn logged_in(balance: u64) -> AppState {
        let mut state = AppState::new(None, true);
        state.session.current_user = Some(user(balance));
        state
    }

    fn upload(title: &str, price: u64) -> UploadInput {
        UploadInput {
            title: title.to_string(),
            description: String::new(),
            image_url: "https://img.example.com/a.png".to_string(),
            price,
        }
    }

    #[test]
    fn test_tab_all_returns_correct_order() {
        assert_eq!(
            Tab::all(),
            &[Tab::Home, Tab::Profile, Tab::Support, Tab::About, Tab::Settings]
        );
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new(None, true);
        assert_eq!(state.active_tab, Tab::Home);
        assert_eq!(state.locale, Locale::Ru);
        assert!(!state.dark_mode);
        assert_eq!(state.session.phase(), SessionPhase::Anonymous);
        assert!(state.marketplace.is_empty());
        assert!(state.dialog.is_none());
    }

    #[rstest]
    #[case(10, 1)]
    #[case(99, 9)]
    #[case(100, 10)]
    #[case(105, 10)]
    #[case(1_000, 100)]
    fn test_top_up_credits_floor_of_tenth(#[case] amount: u64, #[case] expected: u64) {
        let mut state = logged_in(3);
        let credited = state.top_up(TopUpInput { amount }).unwrap();
        assert_eq!(credited, expected);
        assert_eq!(state.session.user().unwrap().balance, 3 + expected);
    }

    #[test]
    fn test_top_up_requires_login() {
        let mut state = AppState::new(None, true);
        assert_eq!(state.top_up(TopUpInput { amount: 100 }), Err(AppError::NotAuthenticated));
    }

    #[test]
    fn test_upload_rejected_below_fee() {
        let mut state = logged_in(14);
        let err = state.upload_nft(upload("Sunset", 5)).unwrap_err();

        assert_eq!(err, AppError::InsufficientBalance { balance: 14, required: 15 });
        assert!(state.marketplace.is_empty());
        assert_eq!(state.session.user().unwrap().balance, 14);
    }

    #[test]
    fn test_upload_at_exact_fee_succeeds() {
        let mut state = logged_in(15);
        let id = state.upload_nft(upload("Sunset", 5)).unwrap();

        assert_eq!(id, 1);
        assert_eq!(state.session.user().unwrap().balance, 0);
        let listing = &state.marketplace.listings()[0];
        assert_eq!(listing.owner_id, 42);
        assert_eq!(listing.creator_id, 42);
        assert_eq!(listing.price, 5);
    }

    #[test]
    fn test_listing_ids_are_sequential() {
        let mut state = logged_in(100);
        let ids: Vec<u64> = [("A", 1), ("B", 999), ("C", 7)]
            .into_iter()
            .map(|(title, price)| state.upload_nft(upload(title, price)).unwrap())
            .collect();

        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(state.session.user().unwrap().balance, 100 - 3 * UPLOAD_FEE);
    }

    #[test]
    fn test_upload_requires_login() {
        let mut state = AppState::new(None, true);
        assert_eq!(state.upload_nft(upload("A", 1)), Err(AppError::NotAuthenticated));
    }

    #[test]
    fn test_logout_clears_user_and_protected_dialog() {
        let mut state = logged_in(50);
        state.dialog = Some(Dialog::UploadNft);
        state.forms.upload.title = "Draft".to_string();

        state.logout();

        assert!(state.session.current_user.is_none());
        assert_eq!(state.session.phase(), SessionPhase::Anonymous);
        assert!(state.dialog.is_none());
        assert!(state.forms.upload.title.is_empty());
        assert_eq!(state.top_up(TopUpInput { amount: 100 }), Err(AppError::NotAuthenticated));
    }

    #[test]
    fn test_logout_keeps_public_dialog() {
        let mut state = logged_in(0);
        state.dialog = Some(Dialog::ForgotPassword);
        state.logout();
        assert_eq!(state.dialog, Some(Dialog::ForgotPassword));
    }

    #[test]
    fn test_session_phase_transitions() {
        let mut session = SessionState::default();
        assert_eq!(session.phase(), SessionPhase::Anonymous);

        session.pending_reset = Some(4);
        assert_eq!(session.phase(), SessionPhase::PasswordResetPending);

        session.pending_verification = Some(PendingVerification {
            user_id: 4,
            password: "pw".to_string(),
            mode: VerifyMode::Code,
        });
        assert_eq!(session.phase(), SessionPhase::PendingVerification);

        session.current_user = Some(user(0));
        assert_eq!(session.phase(), SessionPhase::Authenticated);
    }

    #[test]
    fn test_notify_error_shows_server_text_verbatim() {
        let mut state = AppState::new(None, true);
        state.notify_error(&AppError::Api("Invalid credentials".to_string()), Notice::LoginError);

        assert_eq!(
            state.drain_notifications(),
            vec![Notification {
                kind: NotificationKind::Error,
                message: "Invalid credentials".to_string(),
            }]
        );
    }

    #[test]
    fn test_notify_error_hides_network_details() {
        let mut state = AppState::new(None, true);
        state.locale = Locale::En;
        state.notify_error(
            &AppError::Network("connection refused (os error 111)".to_string()),
            Notice::RegistrationError,
        );

        let notes = state.drain_notifications();
        assert_eq!(notes[0].message, "Registration error");
        assert!(state.pending_notifications.is_empty());
    }

    #[test]
    fn test_pending_verification_debug_hides_password() {
        let pending = PendingVerification {
            user_id: 1,
            password: "Secret123".to_string(),
            mode: VerifyMode::Code,
        };
        assert!(!format!("{:?}", pending).contains("Secret123"));
    }
}
