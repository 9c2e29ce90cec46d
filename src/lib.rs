//! # Astrowise Rust Backend
//!
//! Natal-chart computation engine for the Astrowise API.
//!
//! This crate computes real astronomical charts from a birth date, time and
//! location: it normalizes the birth moment from its source time zone to UTC,
//! derives the Julian Day, evaluates analytic planetary theories for nine
//! tracked bodies, and computes the ascendant with the Placidus house
//! convention. A separate deterministic calendar utility resolves loosely
//! formatted Thai/Gregorian dates to an ISO date and weekday name without
//! touching the system clock. The backend exposes both operations as a REST
//! API via Axum.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Core domain types (birth descriptor, chart result, Julian Day)
//! - [`astro`]: The numeric core: time normalization, ephemeris theories,
//!   sidereal time and house computation
//! - [`services`]: High-level operations consumed by the HTTP layer
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Determinism
//!
//! Every operation in [`astro`] and [`services`] is a pure function of its
//! inputs. The ephemeris is an analytic theory compiled into the binary, so
//! identical inputs yield bit-identical charts across runs and machines.

pub mod astro;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
