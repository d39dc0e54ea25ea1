//! # Localization
//!
//! Static two-locale string table. UI text is looked up by a closed [`Label`]
//! set, toast text by [`Notice`], and validation failures by
//! [`validation_message`]. Nothing here is persisted; the active locale lives
//! in [`crate::app::AppState::locale`].

use crate::utils::validation::ValidationError;

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    pub fn all() -> &'static [Locale] {
        &[Locale::Ru, Locale::En]
    }

    /// Name shown in the language selector, always in its own language
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::Ru => "Русский",
            Locale::En => "English",
        }
    }
}

/// Every static label the UI renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Home,
    Profile,
    Support,
    About,
    Settings,
    Login,
    Register,
    Logout,
    Email,
    Password,
    NewPassword,
    Nickname,
    Balance,
    TopUp,
    UploadNft,
    Title,
    Description,
    Price,
    ImageUrl,
    Send,
    Message,
    Theme,
    Language,
    Light,
    Dark,
    NoNfts,
    AboutText,
    Buy,
    CardNumber,
    Amount,
    UploadCost,
    NotEnoughBalance,
    LoginRequired,
    VerificationCode,
    Verify,
    NoCode,
    UsePassword,
    EnterPasswordToVerify,
    ForgotPassword,
    ResetPassword,
    SendCode,
    VerifyEmail,
    EnterCode,
    UpdateNickname,
    Save,
    Optional,
    PaymentInfo,
    ContactSupport,
    ContactSupportHint,
}

impl Label {
    pub const ALL: &'static [Label] = &[
        Label::Home,
        Label::Profile,
        Label::Support,
        Label::About,
        Label::Settings,
        Label::Login,
        Label::Register,
        Label::Logout,
        Label::Email,
        Label::Password,
        Label::NewPassword,
        Label::Nickname,
        Label::Balance,
        Label::TopUp,
        Label::UploadNft,
        Label::Title,
        Label::Description,
        Label::Price,
        Label::ImageUrl,
        Label::Send,
        Label::Message,
        Label::Theme,
        Label::Language,
        Label::Light,
        Label::Dark,
        Label::NoNfts,
        Label::AboutText,
        Label::Buy,
        Label::CardNumber,
        Label::Amount,
        Label::UploadCost,
        Label::NotEnoughBalance,
        Label::LoginRequired,
        Label::VerificationCode,
        Label::Verify,
        Label::NoCode,
        Label::UsePassword,
        Label::EnterPasswordToVerify,
        Label::ForgotPassword,
        Label::ResetPassword,
        Label::SendCode,
        Label::VerifyEmail,
        Label::EnterCode,
        Label::UpdateNickname,
        Label::Save,
        Label::Optional,
        Label::PaymentInfo,
        Label::ContactSupport,
        Label::ContactSupportHint,
    ];
}

/// Look up a label in the given locale
pub fn t(locale: Locale, label: Label) -> &'static str {
    match locale {
        Locale::Ru => ru(label),
        Locale::En => en(label),
    }
}

fn ru(label: Label) -> &'static str {
    match label {
        Label::Home => "Главная",
        Label::Profile => "Профиль",
        Label::Support => "Поддержка",
        Label::About => "Подробнее",
        Label::Settings => "Настройки",
        Label::Login => "Вход",
        Label::Register => "Регистрация",
        Label::Logout => "Выйти",
        Label::Email => "Email",
        Label::Password => "Пароль",
        Label::NewPassword => "Новый пароль",
        Label::Nickname => "Никнейм",
        Label::Balance => "Баланс",
        Label::TopUp => "Пополнить",
        Label::UploadNft => "Загрузить NFT",
        Label::Title => "Название",
        Label::Description => "Описание",
        Label::Price => "Цена",
        Label::ImageUrl => "URL изображения",
        Label::Send => "Отправить",
        Label::Message => "Сообщение",
        Label::Theme => "Тема",
        Label::Language => "Язык",
        Label::Light => "Светлая",
        Label::Dark => "Тёмная",
        Label::NoNfts => "NFT пока нет. Будьте первым, кто добавит свою работу!",
        Label::AboutText => "Этот сайт создан для того, чтобы художники могли зарабатывать!",
        Label::Buy => "Купить",
        Label::CardNumber => "Номер карты",
        Label::Amount => "Сумма (₽)",
        Label::UploadCost => "Стоимость загрузки: 15 энефтиксов",
        Label::NotEnoughBalance => "Недостаточно энефтиксов",
        Label::LoginRequired => "Войдите в систему",
        Label::VerificationCode => "Код подтверждения",
        Label::Verify => "Подтвердить",
        Label::NoCode => "Не приходит код?",
        Label::UsePassword => "Войти с паролем",
        Label::EnterPasswordToVerify => "Введите пароль для подтверждения",
        Label::ForgotPassword => "Забыли пароль?",
        Label::ResetPassword => "Сбросить пароль",
        Label::SendCode => "Отправить код",
        Label::VerifyEmail => "Подтвердите email",
        Label::EnterCode => "Введите код из письма",
        Label::UpdateNickname => "Изменить никнейм",
        Label::Save => "Сохранить",
        Label::Optional => "необязательно",
        Label::PaymentInfo => "После ввода данных карты средства будут обработаны платёжной системой",
        Label::ContactSupport => "Напишите в поддержку",
        Label::ContactSupportHint => "Отправьте сообщение администрации сайта",
    }
}

fn en(label: Label) -> &'static str {
    match label {
        Label::Home => "Home",
        Label::Profile => "Profile",
        Label::Support => "Support",
        Label::About => "About",
        Label::Settings => "Settings",
        Label::Login => "Login",
        Label::Register => "Register",
        Label::Logout => "Logout",
        Label::Email => "Email",
        Label::Password => "Password",
        Label::NewPassword => "New Password",
        Label::Nickname => "Nickname",
        Label::Balance => "Balance",
        Label::TopUp => "Top Up",
        Label::UploadNft => "Upload NFT",
        Label::Title => "Title",
        Label::Description => "Description",
        Label::Price => "Price",
        Label::ImageUrl => "Image URL",
        Label::Send => "Send",
        Label::Message => "Message",
        Label::Theme => "Theme",
        Label::Language => "Language",
        Label::Light => "Light",
        Label::Dark => "Dark",
        Label::NoNfts => "No NFTs yet. Be the first to add your artwork!",
        Label::AboutText => "This site was created so that artists can earn money!",
        Label::Buy => "Buy",
        Label::CardNumber => "Card Number",
        Label::Amount => "Amount (₽)",
        Label::UploadCost => "Upload cost: 15 eneftix",
        Label::NotEnoughBalance => "Not enough eneftix",
        Label::LoginRequired => "Please login",
        Label::VerificationCode => "Verification Code",
        Label::Verify => "Verify",
        Label::NoCode => "Code not received?",
        Label::UsePassword => "Login with password",
        Label::EnterPasswordToVerify => "Enter password to verify",
        Label::ForgotPassword => "Forgot Password?",
        Label::ResetPassword => "Reset Password",
        Label::SendCode => "Send Code",
        Label::VerifyEmail => "Verify Email",
        Label::EnterCode => "Enter code from email",
        Label::UpdateNickname => "Update Nickname",
        Label::Save => "Save",
        Label::Optional => "optional",
        Label::PaymentInfo => "After entering card details, funds will be processed by payment system",
        Label::ContactSupport => "Contact Support",
        Label::ContactSupportHint => "Send a message to site administration",
    }
}

/// Transient notification texts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Server-issued verification code, shown only with insecure echo on
    VerificationCode(String),
    VerificationCodeSent,
    RegistrationError,
    EmailVerified,
    VerificationError,
    LoggedInWithPassword,
    LoggedIn,
    PleaseVerifyEmail,
    LoginError,
    /// Server-issued reset code, shown only with insecure echo on
    ResetCode(String),
    ResetCodeSent,
    PasswordReset,
    NicknameUpdated,
    GenericError,
    ToppedUp(u64),
    NftUploaded,
    MessageSent,
    RequestInProgress,
}

impl Notice {
    pub fn text(&self, locale: Locale) -> String {
        match (self, locale) {
            (Notice::VerificationCode(code), Locale::Ru) => format!("Код подтверждения: {}", code),
            (Notice::VerificationCode(code), Locale::En) => format!("Verification code: {}", code),
            (Notice::VerificationCodeSent, Locale::Ru) => "Код подтверждения отправлен на email".to_string(),
            (Notice::VerificationCodeSent, Locale::En) => "Verification code sent to your email".to_string(),
            (Notice::RegistrationError, Locale::Ru) => "Ошибка регистрации".to_string(),
            (Notice::RegistrationError, Locale::En) => "Registration error".to_string(),
            (Notice::EmailVerified, Locale::Ru) => "Email подтверждён! Теперь войдите".to_string(),
            (Notice::EmailVerified, Locale::En) => "Email verified! Please login".to_string(),
            (Notice::VerificationError, Locale::Ru) => "Ошибка верификации".to_string(),
            (Notice::VerificationError, Locale::En) => "Verification error".to_string(),
            (Notice::LoggedInWithPassword, Locale::Ru) => "Вход выполнен успешно!".to_string(),
            (Notice::LoggedInWithPassword, Locale::En) => "Logged in successfully!".to_string(),
            (Notice::LoggedIn, Locale::Ru) => "Вход выполнен".to_string(),
            (Notice::LoggedIn, Locale::En) => "Logged in successfully".to_string(),
            (Notice::PleaseVerifyEmail, Locale::Ru) => "Подтвердите email".to_string(),
            (Notice::PleaseVerifyEmail, Locale::En) => "Please verify email".to_string(),
            (Notice::LoginError, Locale::Ru) => "Ошибка входа".to_string(),
            (Notice::LoginError, Locale::En) => "Login error".to_string(),
            (Notice::ResetCode(code), Locale::Ru) => format!("Код для сброса: {}", code),
            (Notice::ResetCode(code), Locale::En) => format!("Reset code: {}", code),
            (Notice::ResetCodeSent, Locale::Ru) => "Код для сброса отправлен на email".to_string(),
            (Notice::ResetCodeSent, Locale::En) => "Reset code sent to your email".to_string(),
            (Notice::PasswordReset, Locale::Ru) => "Пароль изменён".to_string(),
            (Notice::PasswordReset, Locale::En) => "Password reset".to_string(),
            (Notice::NicknameUpdated, Locale::Ru) => "Никнейм обновлён".to_string(),
            (Notice::NicknameUpdated, Locale::En) => "Nickname updated".to_string(),
            (Notice::GenericError, Locale::Ru) => "Ошибка".to_string(),
            (Notice::GenericError, Locale::En) => "Error".to_string(),
            (Notice::ToppedUp(n), Locale::Ru) => format!("Баланс пополнен на {} энефтиксов", n),
            (Notice::ToppedUp(n), Locale::En) => format!("Balance topped up by {} eneftix", n),
            (Notice::NftUploaded, Locale::Ru) => "NFT загружен!".to_string(),
            (Notice::NftUploaded, Locale::En) => "NFT uploaded!".to_string(),
            (Notice::MessageSent, Locale::Ru) => "Сообщение отправлено!".to_string(),
            (Notice::MessageSent, Locale::En) => "Message sent!".to_string(),
            (Notice::RequestInProgress, Locale::Ru) => "Подождите, запрос выполняется".to_string(),
            (Notice::RequestInProgress, Locale::En) => "Please wait, a request is in progress".to_string(),
        }
    }
}

/// Localized text for a rejected form
pub fn validation_message(locale: Locale, err: ValidationError) -> &'static str {
    use ValidationError as V;
    match locale {
        Locale::Ru => match err {
            V::EmailRequired => "Введите email",
            V::InvalidEmail => "Некорректный email",
            V::PasswordRequired => "Введите пароль",
            V::NicknameRequired => "Введите никнейм",
            V::InvalidCode => "Код должен состоять из 6 цифр",
            V::InvalidCardNumber => "Номер карты должен содержать от 12 до 19 цифр",
            V::InvalidAmount => "Сумма должна быть целым числом не меньше 10",
            V::TitleRequired => "Введите название",
            V::InvalidImageUrl => "URL изображения должен начинаться с http:// или https://",
            V::InvalidPrice => "Цена должна быть целым числом не меньше 1",
            V::MessageRequired => "Введите сообщение",
        },
        Locale::En => match err {
            V::EmailRequired => "Email is required",
            V::InvalidEmail => "Invalid email format",
            V::PasswordRequired => "Password is required",
            V::NicknameRequired => "Nickname is required",
            V::InvalidCode => "Code must be 6 digits",
            V::InvalidCardNumber => "Card number must contain 12 to 19 digits",
            V::InvalidAmount => "Amount must be a whole number of at least 10",
            V::TitleRequired => "Title is required",
            V::InvalidImageUrl => "Image URL must start with http:// or https://",
            V::InvalidPrice => "Price must be a whole number of at least 1",
            V::MessageRequired => "Message is required",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_label_translated_in_both_locales() {
        for &label in Label::ALL {
            assert!(!t(Locale::Ru, label).is_empty(), "{:?} missing in ru", label);
            assert!(!t(Locale::En, label).is_empty(), "{:?} missing in en", label);
        }
    }

    #[test]
    fn test_switching_locale_changes_every_language_specific_label() {
        // "Email" is spelled the same in both tables
        let shared_spelling: HashSet<Label> = [Label::Email].into_iter().collect();

        for &label in Label::ALL {
            if shared_spelling.contains(&label) {
                continue;
            }
            assert_ne!(
                t(Locale::Ru, label),
                t(Locale::En, label),
                "{:?} is not localized",
                label
            );
        }
    }

    #[test]
    fn test_label_list_has_no_duplicates() {
        let unique: HashSet<Label> = Label::ALL.iter().copied().collect();
        assert_eq!(unique.len(), Label::ALL.len());
    }

    #[test]
    fn test_notice_formatting() {
        assert_eq!(Notice::ToppedUp(10).text(Locale::En), "Balance topped up by 10 eneftix");
        assert_eq!(Notice::ToppedUp(9).text(Locale::Ru), "Баланс пополнен на 9 энефтиксов");
        assert_eq!(
            Notice::VerificationCode("482913".to_string()).text(Locale::En),
            "Verification code: 482913"
        );
    }

    #[test]
    fn test_validation_messages_differ_per_locale() {
        let err = ValidationError::InvalidEmail;
        assert_ne!(validation_message(Locale::Ru, err), validation_message(Locale::En, err));
    }
}
