//! Twilio WhatsApp delivery adapter

pub mod transport;

pub use transport::TwilioTransport;
