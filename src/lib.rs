pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{
    CreateOrderResponse, CreditsValidation, FlashClient, FlashClientBuilder, Serviceability,
    TrackOrderResponse,
};
pub use config::{Config, Environment};
pub use error::{Error, Result};
