use crate::body::BytesBody;
use crate::http::RemoteAddr;
use crate::resolve::resolve;
use crate::routes::State;
use headers::{ContentType, HeaderMapExt};
use hyper::header::{CONTENT_TYPE, LOCATION};
use hyper::http::HeaderValue;
use hyper::{Request, Response, StatusCode};

const RENDER_FAILED: &str = "Failed to generate page, check logs";
const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

pub fn get<B>(req: &Request<B>, state: &State) -> Response<BytesBody> {
    let query = req.uri().query().map(query_param).unwrap_or_default();
    let remote = match req.extensions().get::<RemoteAddr>() {
        Some(RemoteAddr(addr)) => addr.to_string(),
        None => String::from("[unknown]"),
    };

    let resolution = match resolve(&query, &state.table) {
        Ok(r) => r,
        Err(e) => {
            log::error!(
                "{} {} -> [resolve error] {} (query '{}' from {})",
                req.method(),
                req.uri(),
                e,
                String::from_utf8_lossy(&query),
                remote
            );
            let mut resp = Response::new(BytesBody::empty());
            *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            return resp;
        }
    };

    let (command, argument, url) = match resolution.target() {
        Some(target) => target,
        None => return listing(req, state),
    };

    log::info!(
        "Requested cmd '{}' with args '{}' by {} (raw query: '{}')",
        command.name,
        String::from_utf8_lossy(argument),
        remote,
        String::from_utf8_lossy(&query)
    );

    match HeaderValue::from_str(&url) {
        Ok(location) => {
            log::info!("{} {} -> {}", req.method(), req.uri(), url);
            let mut resp = Response::new(BytesBody::empty());
            *resp.status_mut() = StatusCode::SEE_OTHER;
            resp.headers_mut().insert(LOCATION, location);
            resp
        }
        Err(e) => {
            log::error!(
                "{} {} -> [invalid location] {:?} for cmd '{}': {}",
                req.method(),
                req.uri(),
                url,
                command.name,
                e
            );
            let mut resp = Response::new(BytesBody::empty());
            *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            resp
        }
    }
}

fn listing<B>(req: &Request<B>, state: &State) -> Response<BytesBody> {
    match state.directory.render_listing(&state.table) {
        Ok(html) => {
            log::info!(
                "{} {} -> [listing {} commands]",
                req.method(),
                req.uri(),
                state.table.commands().len()
            );
            let mut resp = Response::new(BytesBody::from(html));
            resp.headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(HTML_CONTENT_TYPE));
            resp
        }
        Err(e) => {
            log::error!("{} {} -> [render error] {}", req.method(), req.uri(), e);
            render_failed()
        }
    }
}

/// The first `q` parameter, form-decoded to bytes.
///
/// Decoding doesn't go through `str`, so escapes that aren't UTF-8 (`%FF`) reach the
/// target url unchanged instead of turning into replacement characters.
fn query_param(query: &str) -> Vec<u8> {
    query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| form_decode(key) == b"q")
        .map(|(_, value)| form_decode(value))
        .unwrap_or_default()
}

fn form_decode(s: &str) -> Vec<u8> {
    urlencoding::decode_binary(s.replace('+', " ").as_bytes()).into_owned()
}

pub fn render_failed() -> Response<BytesBody> {
    let mut resp = Response::new(BytesBody::from(RENDER_FAILED));
    *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    resp.headers_mut().typed_insert(ContentType::text_utf8());
    resp
}
