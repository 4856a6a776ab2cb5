//! Payments module - the mobile-money checkout boundary.
//!
//! Initiating a checkout is not a confirmed deposit. Confirmation is
//! isolated behind [`ConfirmationPolicy`] so the simulated fixed-delay
//! policy can be swapped for a real webhook-driven one.

mod confirmation;
mod deposit_service;
mod payments_client;
mod payments_model;

#[cfg(test)]
mod payments_tests;

pub use confirmation::{ConfirmationPolicy, SimulatedConfirmation};
pub use deposit_service::{DepositRequest, InstantDepositService};
pub use payments_client::{CheckoutClientTrait, HttpCheckoutClient};
pub use payments_model::{CheckoutRequest, CheckoutResponse, CheckoutStatus, PaymentError};
