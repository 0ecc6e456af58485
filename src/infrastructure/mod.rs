pub mod http_transport;

pub use http_transport::{RawResponse, ReqwestTransport, Transport};
