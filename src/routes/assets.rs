use crate::body::BytesBody;
use crate::routes::State;
use crate::routes::query::render_failed;
use headers::{CacheControl, ContentType, HeaderMapExt};
use hyper::header::CONTENT_TYPE;
use hyper::http::HeaderValue;
use hyper::{Request, Response};
use std::time::Duration;

const OPENSEARCH_CONTENT_TYPE: &str = "application/opensearchdescription+xml";
const ICON_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

pub fn icon<B>(req: &Request<B>, state: &State) -> Response<BytesBody> {
    let icon = state.directory.icon();
    log::info!("{} {} -> [icon {} bytes]", req.method(), req.uri(), icon.len());
    let mut resp = Response::new(BytesBody::new(icon));
    resp.headers_mut().typed_insert(ContentType::png());
    resp.headers_mut()
        .typed_insert(CacheControl::new().with_max_age(ICON_MAX_AGE));
    resp
}

pub fn opensearch<B>(req: &Request<B>, state: &State) -> Response<BytesBody> {
    match state.directory.render_opensearch() {
        Ok(xml) => {
            log::info!("{} {} -> [opensearch description]", req.method(), req.uri());
            let mut resp = Response::new(BytesBody::from(xml));
            resp.headers_mut().insert(
                CONTENT_TYPE,
                HeaderValue::from_static(OPENSEARCH_CONTENT_TYPE),
            );
            resp
        }
        Err(e) => {
            log::error!("{} {} -> [render error] {}", req.method(), req.uri(), e);
            render_failed()
        }
    }
}
