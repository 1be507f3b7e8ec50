//! Client-side logic of the member-card QR flow: payload parsing, scan
//! debouncing and the lookup round trip.
//!
//! The camera, the permission prompts and the rendering shell live in the
//! host application, which feeds decoded frames and lifecycle events into
//! this crate through [`controller::ScanController`], or through the
//! lower-level [`session::ScanSession`] and [`lookup::LookupClient`] when it
//! needs to schedule the fetch itself.

pub mod controller;
pub mod debounce;
pub mod error;
pub mod lookup;
pub mod parser;
pub mod session;
mod tools;
