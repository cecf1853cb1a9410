use rust_decimal::Decimal;

use crate::domain::Error;

pub struct Account {
    pub id: String,
    pub pin: String,
    pub balance: Decimal,
}

impl Account {
    pub fn new(id: impl Into<String>, pin: impl Into<String>, balance: Decimal) -> Self {
        Self {
            id: id.into(),
            pin: pin.into(),
            balance,
        }
    }

    pub fn verify_pin(&self, candidate: &str) -> bool {
        self.pin == candidate
    }
}

// Keeps the PIN out of logs and panic messages.
impl core::fmt::Debug for Account {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("pin", &"****")
            .field("balance", &self.balance)
            .finish()
    }
}

/// A strictly positive amount of money.
///
/// Every operation that moves funds takes one of these, so a zero or negative
/// amount is rejected before it can reach an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PositiveAmount(Decimal);

impl PositiveAmount {
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for PositiveAmount {
    type Error = Error;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(Error::Validation(format!(
                "amount must be greater than 0, got {}",
                value
            )))
        }
    }
}

/// Converts a wire amount. A positive value is never rounded down to zero:
/// values below the smallest `Decimal` increment and values above its range
/// are rejected with their own errors.
impl TryFrom<f64> for PositiveAmount {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !(value > 0.0) {
            return Err(Error::Validation(format!(
                "amount must be greater than 0, got {}",
                value
            )));
        }

        // f64's Display never uses exponent notation, so this parses exactly
        // the digits the caller sent.
        match value.to_string().parse::<Decimal>() {
            Ok(decimal) if decimal > Decimal::ZERO => Ok(Self(decimal)),
            Err(_) if value >= 1.0 => Err(Error::BalanceOverflow),
            _ => Err(Error::Validation(format!(
                "amount {:e} is smaller than the supported precision",
                value
            ))),
        }
    }
}

impl core::fmt::Display for PositiveAmount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
