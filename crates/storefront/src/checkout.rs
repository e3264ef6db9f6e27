//! Checkout coordinator: field validation, order submission, prefill.
//!
//! The coordinator is a small state machine. It starts in `Editing`,
//! passes through `Submitting` while a submission attempt runs, and ends
//! in `Completed` once an order is persisted and the cart cleared. A
//! failed validation drops back to `Editing` with one error per invalid
//! field; `Completed` is terminal.

use std::collections::HashMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use twenzee_core::{PaymentMethod, ShippingMethod};

use crate::cart::{CartStore, CartSummary};
use crate::orders::{CustomerDetails, OrderLog, OrderRecord, ShippingAddress, order_id};
use crate::storage::{CUSTOMER_INFO_KEY, StorageBackend, load_or_default};
use crate::validation::{
    FieldError, require, valid_card_number, valid_cvv, valid_email, valid_phone, valid_postal,
};

/// Checkout form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckoutField {
    FullName,
    Email,
    Phone,
    Address,
    City,
    Postal,
    Country,
    CardNumber,
    Cvv,
}

impl CheckoutField {
    /// The form's field name, as used in error reporting.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::City => "city",
            Self::Postal => "postal",
            Self::Country => "country",
            Self::CardNumber => "cardNumber",
            Self::Cvv => "cvv",
        }
    }
}

impl std::fmt::Display for CheckoutField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coordinator lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutState {
    /// Collecting and correcting field values.
    #[default]
    Editing,
    /// A submission attempt is running.
    Submitting,
    /// Order persisted, cart cleared. Terminal.
    Completed,
}

/// Why a submission was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// One entry per invalid field; the coordinator stays in `Editing`.
    #[error("checkout form has {} invalid field(s)", .0.len())]
    Invalid(Vec<(CheckoutField, FieldError)>),

    /// A completed checkout cannot be resubmitted.
    #[error("checkout already completed")]
    AlreadyCompleted,
}

/// Last-entered customer and shipping fields, used only to prefill
/// future checkout forms. Overwritten wholesale on each save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal: String,
}

/// Persisted customer-info prefill cache.
pub struct CustomerInfoCache {
    backend: Box<dyn StorageBackend>,
}

impl CustomerInfoCache {
    /// Open the cache over a storage backend.
    #[must_use]
    pub fn open(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Last saved info, if any. Malformed data reads as absent.
    #[must_use]
    pub fn load(&self) -> Option<CustomerInfo> {
        load_or_default::<Option<CustomerInfo>>(self.backend.as_ref(), CUSTOMER_INFO_KEY)
    }

    /// Overwrite the cache. Returns `false` when the write failed.
    pub fn save(&self, info: &CustomerInfo) -> bool {
        match serde_json::to_string(info) {
            Ok(raw) => match self.backend.write(CUSTOMER_INFO_KEY, &raw) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(error = %e, "Customer info write failed");
                    false
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "Customer info serialization failed");
                false
            }
        }
    }
}

impl std::fmt::Debug for CustomerInfoCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomerInfoCache").finish_non_exhaustive()
    }
}

/// Coordinates the checkout flow against the cart store.
pub struct CheckoutCoordinator {
    state: CheckoutState,
    shipping_method: ShippingMethod,
    payment_method: PaymentMethod,
    fields: HashMap<CheckoutField, String>,
    orders: OrderLog,
    customer_info: CustomerInfoCache,
}

impl CheckoutCoordinator {
    /// Create a coordinator in the `Editing` state.
    #[must_use]
    pub fn new(orders: OrderLog, customer_info: CustomerInfoCache) -> Self {
        Self {
            state: CheckoutState::Editing,
            shipping_method: ShippingMethod::default(),
            payment_method: PaymentMethod::default(),
            fields: HashMap::new(),
            orders,
            customer_info,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> CheckoutState {
        self.state
    }

    /// Currently quoted shipping method.
    #[must_use]
    pub const fn shipping_method(&self) -> ShippingMethod {
        self.shipping_method
    }

    /// Currently selected payment method.
    #[must_use]
    pub const fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Change the quoted shipping method. Cart contents are untouched;
    /// re-read the quote with [`Self::quote`].
    pub fn set_shipping_method(&mut self, method: ShippingMethod) {
        self.shipping_method = method;
    }

    /// Change the payment method. Purely presentational, except that it
    /// selects which payment-detail fields are required at submit time.
    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    /// The displayed order summary for the current shipping method.
    #[must_use]
    pub fn quote(&self, cart: &CartStore) -> CartSummary {
        cart.summary(self.shipping_method)
    }

    /// Set a field's entered value.
    pub fn set_field(&mut self, field: CheckoutField, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    /// The entered value for a field, or empty if never entered.
    #[must_use]
    pub fn field(&self, field: CheckoutField) -> &str {
        self.fields.get(&field).map_or("", String::as_str)
    }

    /// Fields the current payment method requires.
    #[must_use]
    pub fn required_fields(&self) -> Vec<CheckoutField> {
        let mut fields = vec![
            CheckoutField::FullName,
            CheckoutField::Email,
            CheckoutField::Phone,
            CheckoutField::Address,
            CheckoutField::City,
            CheckoutField::Postal,
            CheckoutField::Country,
        ];
        if self.payment_method == PaymentMethod::Card {
            fields.push(CheckoutField::CardNumber);
            fields.push(CheckoutField::Cvv);
        }
        fields
    }

    /// Check one field value. Pure: no submission state changes.
    ///
    /// # Errors
    ///
    /// The failing rule, with its human-readable reason.
    pub fn validate_field(field: CheckoutField, value: &str) -> Result<(), FieldError> {
        require(value)?;
        match field {
            CheckoutField::Email => valid_email(value),
            CheckoutField::Phone => valid_phone(value),
            CheckoutField::Postal => valid_postal(value),
            CheckoutField::CardNumber => valid_card_number(value),
            CheckoutField::Cvv => valid_cvv(value),
            CheckoutField::FullName
            | CheckoutField::Address
            | CheckoutField::City
            | CheckoutField::Country => Ok(()),
        }
    }

    /// Run every required-field check, collecting all failures.
    #[must_use]
    pub fn validate_all(&self) -> Vec<(CheckoutField, FieldError)> {
        self.required_fields()
            .into_iter()
            .filter_map(|field| {
                Self::validate_field(field, self.field(field))
                    .err()
                    .map(|e| (field, e))
            })
            .collect()
    }

    /// Attempt to place the order.
    ///
    /// On success the order record is appended to the log, the cart is
    /// cleared, and the coordinator transitions permanently to
    /// `Completed`. On validation failure nothing is persisted, the
    /// cart is untouched, and the coordinator is back in `Editing`.
    ///
    /// # Errors
    ///
    /// [`SubmitError::Invalid`] with one entry per failing field, or
    /// [`SubmitError::AlreadyCompleted`] after a successful submit.
    pub fn submit(&mut self, cart: &mut CartStore) -> Result<OrderRecord, SubmitError> {
        if self.state == CheckoutState::Completed {
            return Err(SubmitError::AlreadyCompleted);
        }
        self.state = CheckoutState::Submitting;

        let errors = self.validate_all();
        if !errors.is_empty() {
            self.state = CheckoutState::Editing;
            return Err(SubmitError::Invalid(errors));
        }

        let now = Utc::now();
        let record = OrderRecord {
            id: order_id(now),
            date: now,
            customer: CustomerDetails {
                full_name: self.field(CheckoutField::FullName).trim().to_string(),
                email: self.field(CheckoutField::Email).trim().to_string(),
                phone: self.field(CheckoutField::Phone).trim().to_string(),
            },
            shipping: ShippingAddress {
                address: self.field(CheckoutField::Address).trim().to_string(),
                city: self.field(CheckoutField::City).trim().to_string(),
                postal: self.field(CheckoutField::Postal).trim().to_string(),
                country: self.field(CheckoutField::Country).trim().to_string(),
            },
            shipping_method: self.shipping_method,
            payment_method: self.payment_method,
            order: cart.summary(self.shipping_method),
        };

        if !self.orders.append(&record) {
            tracing::warn!(order = %record.id, "Order placed but not durably persisted");
        }
        cart.clear();
        self.state = CheckoutState::Completed;
        tracing::info!(order = %record.id, total = %record.order.total, "Checkout completed");
        Ok(record)
    }

    /// Persist the entered contact fields for future prefill.
    /// Independent of submission success.
    pub fn save_customer_info(&self) -> bool {
        self.customer_info.save(&CustomerInfo {
            full_name: self.field(CheckoutField::FullName).to_string(),
            email: self.field(CheckoutField::Email).to_string(),
            phone: self.field(CheckoutField::Phone).to_string(),
            address: self.field(CheckoutField::Address).to_string(),
            city: self.field(CheckoutField::City).to_string(),
            postal: self.field(CheckoutField::Postal).to_string(),
        })
    }

    /// Fill empty fields from the saved customer info, if any. Returns
    /// whether anything was loaded.
    pub fn prefill(&mut self) -> bool {
        let Some(info) = self.customer_info.load() else {
            return false;
        };

        let pairs = [
            (CheckoutField::FullName, info.full_name),
            (CheckoutField::Email, info.email),
            (CheckoutField::Phone, info.phone),
            (CheckoutField::Address, info.address),
            (CheckoutField::City, info.city),
            (CheckoutField::Postal, info.postal),
        ];
        for (field, value) in pairs {
            if !value.is_empty() && self.field(field).is_empty() {
                self.fields.insert(field, value);
            }
        }
        true
    }
}

impl std::fmt::Debug for CheckoutCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutCoordinator")
            .field("state", &self.state)
            .field("shipping_method", &self.shipping_method)
            .field("payment_method", &self.payment_method)
            .finish_non_exhaustive()
    }
}
