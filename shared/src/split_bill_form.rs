//! Split-bill form state.
//!
//! Holds the bill value, the user's share and the payer. The friend's share is
//! always derived from the first two and never stored. Submitting yields the
//! signed delta to apply to the selected friend's balance.

use log::debug;

use crate::{FormRejection, Payer};

/// Parsed text input for an amount field
enum AmountInput {
    Empty,
    Value(f64),
    Invalid,
}

impl AmountInput {
    fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return AmountInput::Empty;
        }

        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => AmountInput::Value(value),
            _ => AmountInput::Invalid,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitBillForm {
    bill: Option<f64>,
    your_share: Option<f64>,
    payer: Payer,
}

impl SplitBillForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bill(&self) -> Option<f64> {
        self.bill
    }

    pub fn your_share(&self) -> Option<f64> {
        self.your_share
    }

    pub fn payer(&self) -> Payer {
        self.payer
    }

    /// Bill minus your share, empty fields counting as zero
    pub fn friend_share(&self) -> f64 {
        self.bill.unwrap_or(0.0) - self.your_share.unwrap_or(0.0)
    }

    /// Text for the bill input
    pub fn bill_text(&self) -> String {
        amount_text(self.bill)
    }

    /// Text for the your-share input
    pub fn your_share_text(&self) -> String {
        amount_text(self.your_share)
    }

    /// Update the bill from user input. Returns false when the input was rejected.
    pub fn set_bill(&mut self, input: &str) -> bool {
        match AmountInput::parse(input) {
            AmountInput::Empty => self.bill = None,
            AmountInput::Value(value) => self.bill = Some(value),
            AmountInput::Invalid => {
                debug!("Rejected bill input {:?}", input);
                return false;
            }
        }
        true
    }

    /// Update your share from user input.
    /// A value above the current bill is rejected and the previous value kept.
    pub fn set_your_share(&mut self, input: &str) -> bool {
        match AmountInput::parse(input) {
            AmountInput::Empty => self.your_share = None,
            AmountInput::Value(value) if value > self.bill.unwrap_or(0.0) => {
                debug!("Rejected share {} above bill {:?}", value, self.bill);
                return false;
            }
            AmountInput::Value(value) => self.your_share = Some(value),
            AmountInput::Invalid => {
                debug!("Rejected share input {:?}", input);
                return false;
            }
        }
        true
    }

    pub fn set_payer(&mut self, payer: Payer) {
        self.payer = payer;
    }

    /// Signed balance delta for the selected friend.
    /// Positive when you pay (the friend owes you their share), negative when they pay.
    pub fn submit(&self) -> Result<f64, FormRejection> {
        let bill = self.bill.unwrap_or(0.0);
        if bill == 0.0 {
            return Err(FormRejection::EmptyBill);
        }

        let your_share = self.your_share.unwrap_or(0.0);
        if your_share == 0.0 {
            return Err(FormRejection::EmptyShare);
        }

        Ok(match self.payer {
            Payer::You => self.friend_share(),
            Payer::Friend => -your_share,
        })
    }
}

fn amount_text(amount: Option<f64>) -> String {
    amount.map(|value| value.to_string()).unwrap_or_default()
}
