mod client;

pub use client::EndpointError;
pub use client::StudentService;
