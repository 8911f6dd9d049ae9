//! HTTP client layer — `BrokerHttp` over a pluggable [`Transport`].

pub mod client;
pub mod transport;

pub use client::BrokerHttp;
#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
pub use transport::{HttpRequest, HttpResponse, Method, Transport};
