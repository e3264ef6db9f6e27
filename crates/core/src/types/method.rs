//! Shipping and payment method enums.

use serde::{Deserialize, Serialize};

/// Shipping method chosen at checkout.
///
/// Persisted as the wire strings `standard` and `express`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShippingMethod {
    #[default]
    Standard,
    Express,
}

impl ShippingMethod {
    /// Parse a method name leniently.
    ///
    /// Unknown names fall back to [`Self::Standard`]; a bad stored value
    /// must never block quoting a cart.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "express" => Self::Express,
            _ => Self::Standard,
        }
    }

    /// Wire name for persistence and display.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Express => "express",
        }
    }
}

impl std::fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment method chosen at checkout.
///
/// Selection is presentational in the core: it only decides which payment
/// detail fields are required at submit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash on delivery (the storefront default).
    #[default]
    Cod,
    /// Credit/debit card. Requires card number and CVV.
    Card,
    /// Mobile wallet transfer.
    Wallet,
}

impl PaymentMethod {
    /// Wire name for persistence and display.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cod => "cod",
            Self::Card => "card",
            Self::Wallet => "wallet",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cod" => Ok(Self::Cod),
            "card" => Ok(Self::Card),
            "wallet" => Ok(Self::Wallet),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}
