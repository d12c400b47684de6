//! `vitrine-checkout` — order summary formatting and the WhatsApp handoff.
//!
//! Serializes the cart into the human-readable quote message and wraps it in
//! the messaging deep link. Pure string work; the actual navigation to the
//! link is an external concern.

pub mod message;

pub use message::{STORE_WHATSAPP_PHONE, encoded_summary, order_summary, whatsapp_link};
