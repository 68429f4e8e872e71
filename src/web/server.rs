//! Blocking HTTP loop around [`handle`](super::handle)

use std::io::{Cursor, Read};

use tiny_http::{Header, Response, Server, StatusCode};

use super::{handle, Reply, ServiceState};

const RESPONSE_HEADERS: [(&str, &str); 4] = [
    ("Content-Type", "application/json"),
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

/// Serve requests on `addr` until the listener fails
///
/// Requests are handled one at a time; generation is a few table lookups.
pub fn serve(
    addr: &str,
    state: ServiceState,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let server = Server::http(addr)?;
    log::info!("listening on http://{}", addr);

    for mut request in server.incoming_requests() {
        let method = request.method().to_string();
        let url = request.url().to_string();

        let reply = read_and_handle(&method, &url, request.as_reader(), &state);
        log::info!("{} {} -> {}", method, url, reply.status);

        if let Err(e) = request.respond(into_response(reply)) {
            log::warn!("failed to send response: {}", e);
        }
    }

    Ok(())
}

/// Read the request body and route it; an unreadable body is a 400
fn read_and_handle(
    method: &str,
    url: &str,
    body: &mut dyn Read,
    state: &ServiceState,
) -> Reply {
    let mut text = String::new();
    match body.read_to_string(&mut text) {
        Ok(_) => handle(method, url, &text, state),
        Err(e) => Reply::error(400, format!("unreadable request body: {}", e)),
    }
}

/// JSON body plus CORS headers
fn into_response(reply: Reply) -> Response<Cursor<Vec<u8>>> {
    let headers = RESPONSE_HEADERS
        .iter()
        .filter_map(|(name, value)| Header::from_bytes(name.as_bytes(), value.as_bytes()).ok())
        .collect();
    let data = reply.body.into_bytes();
    let len = data.len();

    Response::new(StatusCode(reply.status), headers, Cursor::new(data), Some(len), None)
}
