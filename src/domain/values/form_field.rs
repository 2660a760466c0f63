use std::fmt;

/// Editable inputs of the collar form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Ticker,
    Shares,
    EntryPrice,
    PutStrike,
    CallStrike,
    Expiration,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::Ticker => write!(f, "ticker"),
            FormField::Shares => write!(f, "shares"),
            FormField::EntryPrice => write!(f, "entry_price"),
            FormField::PutStrike => write!(f, "put_strike"),
            FormField::CallStrike => write!(f, "call_strike"),
            FormField::Expiration => write!(f, "expiration"),
        }
    }
}
