//! Provider adapters.

pub mod gemini;
