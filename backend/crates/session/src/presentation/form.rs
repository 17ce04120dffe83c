//! Registration Form
//!
//! What the registration page posts, before it becomes a
//! [`RegistrationPayload`]. Masking and the password confirmation live here,
//! upstream of the gateway, which only checks email and password.

use serde::Deserialize;
use thiserror::Error;

use crate::domain::entity::registration::RegistrationPayload;

const TAX_ID_DIGITS: usize = 11;
const PHONE_DIGITS: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Registration form as posted by the front end
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tax_id: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub insurance: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Check the confirmation, mask tax id and phone, drop empty insurance.
    pub fn into_payload(self) -> Result<RegistrationPayload, FormError> {
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }

        let insurance = match self.insurance.trim() {
            "" => None,
            _ => Some(self.insurance),
        };

        Ok(RegistrationPayload {
            name: self.name,
            tax_id: format_tax_id(&self.tax_id),
            birth_date: self.birth_date,
            phone: format_phone(&self.phone),
            insurance,
            email: self.email,
            password: self.password,
        })
    }
}

fn digits(raw: &str, max: usize) -> Vec<char> {
    raw.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// Mask a CPF as `000.000.000-00`, growing with the digits typed so far.
pub fn format_tax_id(raw: &str) -> String {
    let d = digits(raw, TAX_ID_DIGITS);
    let mut out = String::with_capacity(14);
    for (i, c) in d.iter().enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(*c);
    }
    out
}

/// Mask a mobile number as `(00) 00000-0000`, growing with the digits typed so far.
pub fn format_phone(raw: &str) -> String {
    let d = digits(raw, PHONE_DIGITS);
    if d.len() <= 2 {
        return d.into_iter().collect();
    }

    let mut out = String::with_capacity(15);
    out.push('(');
    out.extend(&d[..2]);
    out.push_str(") ");
    for (i, c) in d[2..].iter().enumerate() {
        if i == 5 {
            out.push('-');
        }
        out.push(*c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tax_id() {
        assert_eq!(format_tax_id("12345678900"), "123.456.789-00");
        assert_eq!(format_tax_id("123.456.789-00"), "123.456.789-00");
        assert_eq!(format_tax_id("1234567890012345"), "123.456.789-00");
    }

    #[test]
    fn test_format_tax_id_partial() {
        assert_eq!(format_tax_id(""), "");
        assert_eq!(format_tax_id("123"), "123");
        assert_eq!(format_tax_id("1234"), "123.4");
        assert_eq!(format_tax_id("1234567"), "123.456.7");
        assert_eq!(format_tax_id("1234567890"), "123.456.789-0");
    }

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("11999999999"), "(11) 99999-9999");
        assert_eq!(format_phone("(11) 99999-9999"), "(11) 99999-9999");
        assert_eq!(format_phone("119999999991234"), "(11) 99999-9999");
    }

    #[test]
    fn test_format_phone_partial() {
        assert_eq!(format_phone("1"), "1");
        assert_eq!(format_phone("11"), "11");
        assert_eq!(format_phone("119"), "(11) 9");
        assert_eq!(format_phone("1199999"), "(11) 99999");
        assert_eq!(format_phone("11999991"), "(11) 99999-1");
    }

    fn form(password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            name: "Matheus".to_string(),
            tax_id: "12345678900".to_string(),
            birth_date: "1990-01-01".to_string(),
            phone: "11999999999".to_string(),
            insurance: "  ".to_string(),
            email: "paciente@vida.com".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_into_payload_formats_fields() {
        let payload = form("pw", "pw").into_payload().unwrap();
        assert_eq!(payload.tax_id, "123.456.789-00");
        assert_eq!(payload.phone, "(11) 99999-9999");
        assert_eq!(payload.insurance, None);
        assert_eq!(payload.password, "pw");
    }

    #[test]
    fn test_into_payload_rejects_mismatch() {
        assert_eq!(
            form("pw", "other").into_payload(),
            Err(FormError::PasswordMismatch)
        );
    }

    #[test]
    fn test_empty_passwords_match() {
        // Empty credentials are the gateway's call, not the form's.
        let payload = form("", "").into_payload().unwrap();
        assert!(!payload.has_credentials());
    }
}
