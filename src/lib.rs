//! Ticket Service - Ticket purchase validation and pricing
//!
//! This crate validates ticket purchase requests, prices them, and delegates
//! payment and seat reservation to external collaborators behind ports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod observability;
pub mod ports;
