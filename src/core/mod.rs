//! Core infrastructure: transport adapter and endpoint discovery.

pub mod discovery;
pub mod transport;

pub use discovery::EndpointCache;
pub use transport::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, MockHttpTransport, ReqwestHttpTransport,
};
