use crate::Error;

/// Split a server address into the host and port to look up.
///
/// An address without a colon is returned as-is with `default_port`.
/// Otherwise the address is split on every colon and only the first two
/// pieces are used, so `a:1:2` resolves to `("a", 1)`. IPv6 literals are
/// therefore not supported.
///
/// The host is not validated; a bad hostname only surfaces once the request
/// is made.
///
/// # Errors
/// If the piece after the first colon is not a valid port number.
pub fn resolve_target(host_spec: &str, default_port: u16) -> Result<(String, u16), Error> {
    if !host_spec.contains(':') {
        return Ok((host_spec.to_owned(), default_port));
    }
    let mut parts = host_spec.split(':');
    let host = parts.next().unwrap_or_default();
    let port = parts
        .next()
        .and_then(|port| port.parse().ok())
        .ok_or(Error::InvalidAddress)?;
    Ok((host.to_owned(), port))
}
