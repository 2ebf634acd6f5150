//! # Slot Checker
//!
//! Polls the Paris téléservices site for available passport/ID-card
//! appointment slots inside a configured date/time window and sends a
//! Telegram notification when a matching slot appears. It never books
//! anything.
//!
//! ## Features
//! - YAML-configured date window, time window, weekday set, and person count
//! - Fixed-interval polling, tolerant of transient site failures
//! - One Telegram notification per slot for the lifetime of the process
//!
//! The seen-set is not persisted: after a restart, still-available slots are
//! notified again.

/// Configuration loading and validation
pub mod config;
/// Domain types for appointment slots
pub mod models;
/// Outbound notification channels
pub mod notify;
/// Background services: the polling checker and the heartbeat
pub mod services;
/// Access to the booking site
pub mod site;
/// Utility functions for datetime parsing, validation, and errors
pub mod utils;
