//! Validation utilities for user input
//!
//! Every form is parsed into a typed input struct before a handler dispatches
//! anything. Parsing either yields the struct or a [`ValidationError`], which
//! the UI localizes via [`crate::i18n::validation_message`].

use thiserror::Error;

/// Smallest top-up accepted, in currency units (one eneftix)
pub const MIN_TOP_UP: u64 = 10;

/// Reasons a form can be rejected before dispatch
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Nickname is required")]
    NicknameRequired,
    #[error("Code must be 6 digits")]
    InvalidCode,
    #[error("Card number must contain 12 to 19 digits")]
    InvalidCardNumber,
    #[error("Amount must be a whole number of at least 10")]
    InvalidAmount,
    #[error("Title is required")]
    TitleRequired,
    #[error("Image URL must start with http:// or https://")]
    InvalidImageUrl,
    #[error("Price must be a whole number of at least 1")]
    InvalidPrice,
    #[error("Message is required")]
    MessageRequired,
}

type Validated<T> = Result<T, ValidationError>;

/// Validate email format
pub fn validate_email(email: &str) -> Validated<()> {
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::InvalidEmail);
    };

    if local.is_empty() || domain.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }

    if domain.is_empty() || !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Nicknames are free text; only a blank one is rejected
pub fn validate_nickname(nickname: &str) -> Validated<()> {
    if nickname.trim().is_empty() {
        return Err(ValidationError::NicknameRequired);
    }
    Ok(())
}

/// Passwords are only checked for presence.
fn require_password(password: &str) -> Validated<()> {
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    Ok(())
}

/// Verification and reset codes are six ASCII digits
pub fn validate_code(code: &str) -> Validated<()> {
    if code.len() == 6 && code.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCode)
    }
}

/// Card number shape check. Spaces are allowed between digit groups.
pub fn validate_card_number(card_number: &str) -> Validated<()> {
    let mut digits = 0usize;
    for c in card_number.chars() {
        match c {
            '0'..='9' => digits += 1,
            ' ' => {}
            _ => return Err(ValidationError::InvalidCardNumber),
        }
    }

    if (12..=19).contains(&digits) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCardNumber)
    }
}

/// Registration form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub nickname: Option<String>,
}

impl RegisterInput {
    pub fn parse(email: &str, password: &str, nickname: &str) -> Validated<Self> {
        let email = email.trim();
        validate_email(email)?;
        require_password(password)?;

        let nickname = nickname.trim();
        let nickname = if nickname.is_empty() {
            None
        } else {
            validate_nickname(nickname)?;
            Some(nickname.to_string())
        };

        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
            nickname,
        })
    }
}

/// Login form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl LoginInput {
    pub fn parse(email: &str, password: &str) -> Validated<Self> {
        let email = email.trim();
        validate_email(email)?;
        require_password(password)?;
        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

/// Verify dialog, code mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyCodeInput {
    pub code: String,
}

impl VerifyCodeInput {
    pub fn parse(code: &str) -> Validated<Self> {
        let code = code.trim();
        validate_code(code)?;
        Ok(Self { code: code.to_string() })
    }
}

/// Verify dialog, password mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyPasswordInput {
    pub password: String,
}

impl VerifyPasswordInput {
    pub fn parse(password: &str) -> Validated<Self> {
        require_password(password)?;
        Ok(Self { password: password.to_string() })
    }
}

/// Forgot-password dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgotPasswordInput {
    pub email: String,
}

impl ForgotPasswordInput {
    pub fn parse(email: &str) -> Validated<Self> {
        let email = email.trim();
        validate_email(email)?;
        Ok(Self { email: email.to_string() })
    }
}

/// Reset-password dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetPasswordInput {
    pub code: String,
    pub new_password: String,
}

impl ResetPasswordInput {
    pub fn parse(code: &str, new_password: &str) -> Validated<Self> {
        let code = code.trim();
        validate_code(code)?;
        require_password(new_password)?;
        Ok(Self {
            code: code.to_string(),
            new_password: new_password.to_string(),
        })
    }
}

/// Nickname dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NicknameInput {
    pub nickname: String,
}

impl NicknameInput {
    pub fn parse(nickname: &str) -> Validated<Self> {
        let nickname = nickname.trim();
        validate_nickname(nickname)?;
        Ok(Self { nickname: nickname.to_string() })
    }
}

/// Top-up form. The card number is checked for shape and then dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopUpInput {
    pub amount: u64,
}

impl TopUpInput {
    pub fn parse(card_number: &str, amount: &str) -> Validated<Self> {
        validate_card_number(card_number.trim())?;
        let amount: u64 = amount
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidAmount)?;
        if amount < MIN_TOP_UP {
            return Err(ValidationError::InvalidAmount);
        }
        Ok(Self { amount })
    }
}

/// Upload dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadInput {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: u64,
}

impl UploadInput {
    pub fn parse(title: &str, description: &str, image_url: &str, price: &str) -> Validated<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::TitleRequired);
        }

        let image_url = image_url.trim();
        let has_scheme = image_url.starts_with("https://") || image_url.starts_with("http://");
        if !has_scheme || image_url.contains(char::is_whitespace) {
            return Err(ValidationError::InvalidImageUrl);
        }

        let price: u64 = price
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidPrice)?;
        if price == 0 {
            return Err(ValidationError::InvalidPrice);
        }

        Ok(Self {
            title: title.to_string(),
            description: description.trim().to_string(),
            image_url: image_url.to_string(),
            price,
        })
    }
}

/// Support form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportInput {
    pub message: String,
}

impl SupportInput {
    pub fn parse(message: &str) -> Validated<Self> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ValidationError::MessageRequired);
        }
        Ok(Self { message: message.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("user@domain.co.uk").is_ok());
        assert_eq!(validate_email(""), Err(ValidationError::EmailRequired));
        assert_eq!(validate_email("invalid"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("@example.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("test@"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a@b@c.com"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_nickname_validation() {
        assert!(validate_nickname("alice").is_ok());
        assert!(validate_nickname("Jo").is_ok());
        assert!(validate_nickname("user@x").is_ok());
        assert_eq!(validate_nickname(""), Err(ValidationError::NicknameRequired));
        assert_eq!(validate_nickname(" \t "), Err(ValidationError::NicknameRequired));
    }

    #[test]
    fn test_nickname_input_accepts_cyrillic_with_space() {
        let input = NicknameInput::parse("  Иван Петров ").unwrap();
        assert_eq!(input.nickname, "Иван Петров");
        assert_eq!(NicknameInput::parse("   "), Err(ValidationError::NicknameRequired));
    }

    #[test]
    fn test_register_input_accepts_any_nonempty_password() {
        let input = RegisterInput::parse("a@b.co", "password", "").unwrap();
        assert_eq!(input.password, "password");
        assert_eq!(input.nickname, None);

        let input = RegisterInput::parse("a@b.co", "1", "Иван Петров").unwrap();
        assert_eq!(input.nickname.as_deref(), Some("Иван Петров"));

        assert_eq!(
            RegisterInput::parse("a@b.co", "", ""),
            Err(ValidationError::PasswordRequired)
        );
    }

    #[test]
    fn test_reset_input_accepts_any_nonempty_password() {
        let input = ResetPasswordInput::parse(" 123456 ", "qwerty").unwrap();
        assert_eq!(input.code, "123456");
        assert_eq!(input.new_password, "qwerty");
        assert_eq!(
            ResetPasswordInput::parse("123456", ""),
            Err(ValidationError::PasswordRequired)
        );
    }

    #[test]
    fn test_code_validation() {
        assert!(validate_code("123456").is_ok());
        assert!(validate_code("12345").is_err());
        assert!(validate_code("12345a").is_err());
        assert!(validate_code("١٢٣٤٥٦").is_err());
    }

    #[test]
    fn test_register_input_treats_blank_nickname_as_none() {
        let input = RegisterInput::parse(" alice@example.com ", "Secret123", "   ").unwrap();
        assert_eq!(input.email, "alice@example.com");
        assert_eq!(input.nickname, None);

        let input = RegisterInput::parse("alice@example.com", "Secret123", "neo").unwrap();
        assert_eq!(input.nickname.as_deref(), Some("neo"));
    }

    #[test]
    fn test_login_input_only_requires_password_presence() {
        assert!(LoginInput::parse("alice@example.com", "x").is_ok());
        assert_eq!(
            LoginInput::parse("alice@example.com", ""),
            Err(ValidationError::PasswordRequired)
        );
    }

    #[test]
    fn test_top_up_input() {
        assert_eq!(TopUpInput::parse("4242 4242 4242 4242", "105").unwrap().amount, 105);
        assert_eq!(TopUpInput::parse("4242424242424242", "9"), Err(ValidationError::InvalidAmount));
        assert_eq!(TopUpInput::parse("4242424242424242", "ten"), Err(ValidationError::InvalidAmount));
        assert_eq!(TopUpInput::parse("4242-4242", "100"), Err(ValidationError::InvalidCardNumber));
        assert_eq!(TopUpInput::parse("", "100"), Err(ValidationError::InvalidCardNumber));
    }

    #[test]
    fn test_upload_input() {
        let input = UploadInput::parse("Sunset", "Oil on canvas", "https://img.example.com/a.png", "25").unwrap();
        assert_eq!(input.price, 25);

        assert_eq!(
            UploadInput::parse("", "", "https://img.example.com/a.png", "25"),
            Err(ValidationError::TitleRequired)
        );
        assert_eq!(
            UploadInput::parse("Sunset", "", "ftp://img", "25"),
            Err(ValidationError::InvalidImageUrl)
        );
        assert_eq!(
            UploadInput::parse("Sunset", "", "https://img.example.com/a.png", "0"),
            Err(ValidationError::InvalidPrice)
        );
    }

    #[test]
    fn test_support_input_requires_text() {
        assert_eq!(SupportInput::parse("  \n "), Err(ValidationError::MessageRequired));
        assert_eq!(SupportInput::parse(" hi ").unwrap().message, "hi");
    }
}
