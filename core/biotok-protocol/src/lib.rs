#![no_std] // Hosts may embed the span types without std

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod span;

pub use span::{TokenResult, TokenSpan};
