use crate::domain::entities::collar_request::CollarRequest;
use crate::domain::error::DomainError;
use crate::domain::values::expiration_list::ExpirationList;
use crate::domain::values::form_field::FormField;

/// Mutable form model. Range checks (e.g. put above call) are left to the
/// backend.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    request: CollarRequest,
    expirations: ExpirationList,
}

impl FormState {
    pub fn new(request: CollarRequest) -> Self {
        Self { request, expirations: ExpirationList::default() }
    }

    pub fn request(&self) -> &CollarRequest {
        &self.request
    }

    pub fn expirations(&self) -> &ExpirationList {
        &self.expirations
    }

    /// Update one field from raw input text. Numeric fields treat blank input
    /// as zero; unparseable input is rejected and the field keeps its value.
    pub fn edit(&mut self, field: FormField, raw: &str) -> Result<(), DomainError> {
        match field {
            FormField::Ticker => self.request.ticker = raw.to_string(),
            FormField::Expiration => self.request.expiration = raw.to_string(),
            FormField::Shares => self.request.shares = parse_shares(raw)?,
            FormField::EntryPrice => self.request.entry_price = parse_decimal(field, raw)?,
            FormField::PutStrike => self.request.put_strike = parse_decimal(field, raw)?,
            FormField::CallStrike => self.request.call_strike = parse_decimal(field, raw)?,
        }
        Ok(())
    }

    /// Replace the list wholesale; a non-empty list selects its first date.
    pub fn apply_expirations(&mut self, list: ExpirationList) {
        if let Some(first) = list.first() {
            self.request.expiration = first.to_string();
        }
        self.expirations = list;
    }
}

fn parse_shares(raw: &str) -> Result<u64, DomainError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse::<u64>()
        .map_err(|_| DomainError::Validation(format!("shares must be a whole number, got {raw:?}")))
}

fn parse_decimal(field: FormField, raw: &str) -> Result<f64, DomainError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(DomainError::Validation(format!("{field} must be a number, got {raw:?}"))),
    }
}
