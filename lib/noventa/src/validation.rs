//! Form field validators.
//!
//! Every validator returns `None` when the value is acceptable and the
//! user-facing message of the first failing rule otherwise.

use std::sync::LazyLock;

use regex::Regex;
use shared::auth::{LoginRequest, RegisterRequest};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

const PASSWORD_MIN: usize = 6;
const PASSWORD_MAX: usize = 20;
const NAME_MIN: usize = 2;
const PHONE_DIGITS: usize = 10;
const COUNTRY_CODE: &str = "90";

pub fn validate_email(email: &str) -> Option<String> {
    if email.trim().is_empty() {
        return Some("E-mail zorunludur".to_string());
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Some("Geçerli bir e-mail giriniz".to_string());
    }
    None
}

pub fn validate_password(password: &str) -> Option<String> {
    if password.trim().is_empty() {
        return Some("Şifre zorunludur".to_string());
    }

    let length = password.chars().count();
    if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&length) {
        return Some("Şifre 6-20 karakter olmalıdır".to_string());
    }

    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        return Some("Şifre en az 1 harf ve 1 rakam içermelidir".to_string());
    }

    None
}

/// `label` names the field in the message, e.g. "Ad" or "Soyad".
pub fn validate_name(value: &str, label: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some(format!("{label} zorunludur"));
    }
    if value.chars().count() < NAME_MIN {
        return Some(format!("{label} en az 2 karakter olmalıdır"));
    }
    None
}

/// Non-digit characters are ignored, so formatted input validates the same
/// as the bare digits.
pub fn validate_phone(phone: &str) -> Option<String> {
    let digits = only_digits(phone);

    if digits.is_empty() {
        return Some("Telefon numarası zorunludur".to_string());
    }
    if digits.len() != PHONE_DIGITS {
        return Some("Telefon numarası 10 hane olmalıdır (5xx...)".to_string());
    }
    if !digits.starts_with('5') {
        return Some("Telefon 5 ile başlamalıdır".to_string());
    }
    None
}

pub fn validate_password_confirm(password: &str, confirm: &str) -> Option<String> {
    if confirm.trim().is_empty() {
        return Some("Şifre tekrar zorunludur".to_string());
    }
    if password != confirm {
        return Some("Şifreler uyuşmuyor".to_string());
    }
    None
}

/// Normalizes whatever the user typed into the phone field to at most ten
/// national digits, dropping a leading `90` country code.
pub fn extract_phone_digits(input: &str) -> String {
    let digits = only_digits(input);
    let national = digits.strip_prefix(COUNTRY_CODE).unwrap_or(&digits);
    national.chars().take(PHONE_DIGITS).collect()
}

/// Renders national digits as `+90(5xx) xxx-xx-xx`, growing as digits are
/// typed.
pub fn format_phone(digits: &str) -> String {
    let digits: String = only_digits(digits).chars().take(PHONE_DIGITS).collect();
    if digits.is_empty() {
        return String::new();
    }

    let (area, first, second, third) = (
        slice(&digits, 0, 3),
        slice(&digits, 3, 6),
        slice(&digits, 6, 8),
        slice(&digits, 8, 10),
    );

    let mut out = format!("+{COUNTRY_CODE}({area}");
    if area.len() == 3 {
        out.push(')');
    }
    if !first.is_empty() {
        out.push(' ');
        out.push_str(first);
    }
    for group in [second, third] {
        if !group.is_empty() {
            out.push('-');
            out.push_str(group);
        }
    }
    out
}

fn slice(digits: &str, from: usize, to: usize) -> &str {
    let len = digits.len();
    digits.get(from.min(len)..to.min(len)).unwrap_or("")
}

fn only_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

impl LoginForm {
    pub fn errors(&self) -> LoginErrors {
        LoginErrors {
            email: validate_email(&self.email),
            password: validate_password(&self.password),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    /// National digits only, see [`extract_phone_digits`].
    pub phone: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterErrors {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirm: Option<String>,
}

impl RegisterErrors {
    pub fn is_empty(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.phone,
            &self.email,
            &self.password,
            &self.password_confirm,
        ]
        .iter()
        .all(|e| e.is_none())
    }
}

impl RegisterForm {
    pub fn errors(&self) -> RegisterErrors {
        RegisterErrors {
            first_name: validate_name(&self.first_name, "Ad"),
            last_name: validate_name(&self.last_name, "Soyad"),
            phone: validate_phone(&self.phone),
            email: validate_email(&self.email),
            password: validate_password(&self.password),
            password_confirm: validate_password_confirm(&self.password, &self.password_confirm),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.full_name(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}
