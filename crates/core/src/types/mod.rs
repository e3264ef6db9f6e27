//! Core types for Twenzee.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod method;
pub mod money;

pub use email::{Email, EmailError};
pub use id::*;
pub use method::{PaymentMethod, ShippingMethod};
pub use money::Money;
