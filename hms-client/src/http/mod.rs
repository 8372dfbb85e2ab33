pub mod client;
pub mod navigator;

pub use client::ApiClient;
pub use navigator::Navigator;
