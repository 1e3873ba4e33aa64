use std::net::IpAddr;

/// Provenance of a single form request, as seen by the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Network address of the submitter
    pub client_ip: IpAddr,
    /// Local address of the connection the request arrived on
    pub server_ip: IpAddr,
    /// Value of the `User-Agent` header, if any
    pub user_agent: Option<String>,
    /// Path of the endpoint that served the form
    pub script: String,
}
