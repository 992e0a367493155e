//! Example applications using the `cinema-tickets` library
//!
//! This crate provides a small box office that sells tickets through a
//! [`TicketService`](cinema_tickets::TicketService) backed by the in-memory
//! payment and seat reservation services.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Box office example: scripted ticket sales with reports
pub mod box_office;
