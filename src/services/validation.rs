use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::models::{CardInput, Credentials};

pub const CORRECT_HIGHLIGHTED: &str = "Please correct the highlighted fields.";
pub const MISSING_FIELDS: &str = "Please fill in all fields.";
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";

const CARD_NUMBER_LEN: usize = 16;
const CVV_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CustomerName,
    Email,
    TechnicianId,
    BookingDate,
    CardNumber,
    HolderName,
    Expiry,
    Cvv,
    Password,
}

/// The fields that failed validation together with the alert text to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    pub fields: Vec<Field>,
    pub message: String,
}

impl FieldErrors {
    fn new(fields: Vec<Field>, message: &str) -> Self {
        Self {
            fields,
            message: message.to_string(),
        }
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }

    pub fn summary(&self) -> String {
        self.message.clone()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.message, self.fields)
    }
}

/// Checks the required booking fields, then the email. Empty fields win over a bad email.
pub fn validate_booking_fields(
    customer_name: &str,
    email: &str,
    technician_id: &str,
    booking_date: &str,
) -> Result<(), FieldErrors> {
    let missing: Vec<Field> = [
        (Field::CustomerName, customer_name),
        (Field::Email, email),
        (Field::TechnicianId, technician_id),
        (Field::BookingDate, booking_date),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(field, _)| field)
    .collect();

    if !missing.is_empty() {
        return Err(FieldErrors::new(missing, MISSING_FIELDS));
    }

    if !email.contains('@') {
        return Err(FieldErrors::new(vec![Field::Email], INVALID_EMAIL));
    }

    Ok(())
}

/// `local@domain.tld`: one `@`, no whitespace, and a dot inside the domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Length is counted in UTF-16 code units, so a character outside the BMP counts twice.
pub fn is_valid_password(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_PASSWORD_LEN
}

pub fn validate_credentials(credentials: &Credentials) -> Result<(), FieldErrors> {
    let mut fields = Vec::new();
    if !is_valid_email(&credentials.email) {
        fields.push(Field::Email);
    }
    if !is_valid_password(&credentials.password) {
        fields.push(Field::Password);
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(FieldErrors::new(fields, CORRECT_HIGHLIGHTED))
    }
}

/// Sixteen digits starting with `4` once whitespace is removed. No checksum.
pub fn is_valid_card_number(card_number: &str) -> bool {
    let digits: String = card_number.chars().filter(|c| !c.is_whitespace()).collect();
    digits.len() == CARD_NUMBER_LEN
        && digits.starts_with('4')
        && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parses `MM/YY` into (year, month), reading the year as 20YY.
fn parse_expiry(expiry: &str) -> Option<(i32, u32)> {
    let (month, year) = expiry.split_once('/')?;
    if month.len() != 2 || year.len() != 2 {
        return None;
    }
    if !month.bytes().chain(year.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let month: u32 = month.parse().ok()?;
    let year: i32 = year.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some((2000 + year, month))
}

/// A card stays valid through the last day of its expiry month.
pub fn is_valid_expiry(expiry: &str, today: NaiveDate) -> bool {
    match parse_expiry(expiry) {
        Some(expires) => expires >= (today.year(), today.month()),
        None => false,
    }
}

pub fn is_valid_cvv(cvv: &str) -> bool {
    cvv.len() == CVV_LEN && cvv.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_valid_holder_name(holder_name: &str) -> bool {
    !holder_name.trim().is_empty()
}

pub fn validate_card(card: &CardInput, today: NaiveDate) -> Result<(), FieldErrors> {
    let mut fields = Vec::new();
    if !is_valid_card_number(&card.card_number) {
        fields.push(Field::CardNumber);
    }
    if !is_valid_holder_name(&card.holder_name) {
        fields.push(Field::HolderName);
    }
    if !is_valid_expiry(&card.expiry, today) {
        fields.push(Field::Expiry);
    }
    if !is_valid_cvv(&card.cvv) {
        fields.push(Field::Cvv);
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(FieldErrors::new(fields, CORRECT_HIGHLIGHTED))
    }
}
