use super::currency::Currency;

/// A quoted amount. Amounts in different currencies are never converted:
/// thresholds and rankings compare the raw amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price {
    pub amount: f64,
    pub currency: Currency,
}

impl Price {
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn usd(amount: f64) -> Self {
        Self::new(amount, Currency::USD)
    }

    pub fn eur(amount: f64) -> Self {
        Self::new(amount, Currency::EUR)
    }

    pub fn at_least(&self, threshold: f64) -> bool {
        self.amount >= threshold
    }
}
