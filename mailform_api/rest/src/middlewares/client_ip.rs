use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
};

use axum::{
    extract::{connect_info::Connected, ConnectInfo, Request},
    http::HeaderMap,
    middleware::{from_fn, Next},
    serve::IncomingStream,
    Router,
};
use tracing::{debug, error, warn};

use crate::RealIpConfig;

pub fn add<S: Clone + Send + Sync + 'static>(
    real_ip_config: Option<Arc<RealIpConfig>>,
) -> impl FnOnce(Router<S>) -> Router<S> {
    |router| {
        router.layer(from_fn(
            move |ConnectInfo(addrs): ConnectInfo<ConnectionAddrs>,
                  mut request: Request,
                  next: Next| {
                let client_ip = ClientIp::resolve(
                    addrs.peer.ip(),
                    request.headers(),
                    real_ip_config.as_deref(),
                );
                request.extensions_mut().insert(client_ip);
                request.extensions_mut().insert(ServerIp(addrs.local.ip()));
                next.run(request)
            },
        ))
    }
}

/// Both ends of the connection a request arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionAddrs {
    pub peer: SocketAddr,
    /// Address of the accepted socket, which differs from the listener
    /// address when bound to an unspecified address.
    pub local: SocketAddr,
}

impl Connected<IncomingStream<'_>> for ConnectionAddrs {
    fn connect_info(target: IncomingStream<'_>) -> Self {
        let peer = target.remote_addr();
        let local = target.local_addr().unwrap_or_else(|err| {
            warn!(%peer, "failed to read local address of connection: {err}");
            SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0)
        });
        Self { peer, local }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientIp(pub IpAddr);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServerIp(pub IpAddr);

impl ClientIp {
    fn resolve(peer: IpAddr, headers: &HeaderMap, real_ip_config: Option<&RealIpConfig>) -> Self {
        let Some(RealIpConfig { header, set_from }) = real_ip_config else {
            return Self(peer);
        };

        let header_value = headers.get(header);

        if *set_from != peer {
            if let Some(header_value) = header_value {
                debug!(%peer, ?header_value, "ignoring real ip header value from untrusted source");
            }
            return Self(peer);
        }

        let Some(header_value) = header_value else {
            warn!(%peer, "real ip header not found");
            return Self(peer);
        };

        let Some(real_ip) = header_value
            .to_str()
            .ok()
            .and_then(|real_ip| real_ip.trim().parse().ok())
        else {
            error!(%peer, ?header_value, "failed to parse real ip header value");
            return Self(peer);
        };

        Self(real_ip)
    }
}
