use crate::body::BytesBody;
use crate::directory::{Directory, ICON_PATH};
use crate::table::CommandTable;
use headers::{Allow, HeaderMapExt};
use hyper::body::Incoming;
use hyper::{Method, Request, Response, StatusCode};

mod assets;
mod query;

pub const OPENSEARCH_PATH: &str = "/opensearch.xml";

pub struct State {
    pub table: CommandTable,
    pub directory: Directory,
}

pub async fn respond_to_request(req: Request<Incoming>, state: &State) -> Response<BytesBody> {
    respond(&req, state)
}

fn respond<B>(req: &Request<B>, state: &State) -> Response<BytesBody> {
    match *req.method() {
        Method::GET | Method::HEAD => match req.uri().path() {
            ICON_PATH => assets::icon(req, state),
            OPENSEARCH_PATH => assets::opensearch(req, state),
            _ => query::get(req, state),
        },
        _ => {
            log::warn!("{} {} -> [method not allowed]", req.method(), req.uri());
            let mut resp = Response::new(BytesBody::empty());
            *resp.status_mut() = StatusCode::METHOD_NOT_ALLOWED;
            resp.headers_mut()
                .typed_insert([Method::GET, Method::HEAD].into_iter().collect::<Allow>());
            resp
        }
    }
}
