//! Twenzee Storefront - cart, checkout, and catalog engine.
//!
//! This crate is the headless core of the storefront. It owns:
//!
//! - [`cart`] - the cart store: line items merged by (product, size),
//!   pricing summaries, durable persistence
//! - [`checkout`] - the checkout coordinator: field validation, order
//!   submission, customer-info prefill
//! - [`catalog`] - the product catalog: filtering, sorting, pagination,
//!   search
//! - [`orders`] - the append-only order log
//! - [`storage`] - the persistence backend abstraction (file-backed in
//!   production, in-memory in tests)
//!
//! Rendering is out of scope: a presentation layer (the CLI, or anything
//! else) consumes [`cart::CartSummary`] and validation results and never
//! reaches into persistence directly.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod orders;
pub mod storage;
pub mod validation;

pub use error::AppError;
