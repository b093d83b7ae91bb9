//! Request dispatch.
//!
//! Maps (method, path prefix) to exactly one response: root ping, echo,
//! User-Agent echo, file fetch from the configured root, generic file fetch
//! from the working directory, or file store. Everything else is 404/501.

use tracing::{error, info};

use crate::config::Config;
use crate::http::mime;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};
use crate::store::{self, FetchError};

const ECHO_PREFIX: &str = "echo/";
const USER_AGENT_PREFIX: &str = "user-agent";
const FILES_PREFIX: &str = "files/";

/// Routes a parsed request to its response.
pub async fn dispatch(req: &Request, cfg: &Config) -> Response {
    let response = match &req.method {
        Method::Get => dispatch_get(req, cfg).await,
        Method::Post => dispatch_post(req, cfg).await,
        Method::Other(_) => Response::empty(StatusCode::NotImplemented),
    };

    info!("{} /{} -> {}", req.method, req.path, response.status.as_u16());
    response
}

async fn dispatch_get(req: &Request, cfg: &Config) -> Response {
    if req.path.is_empty() {
        return Response::empty(StatusCode::Ok);
    }

    if let Some(text) = req.path.strip_prefix(ECHO_PREFIX) {
        return Response::plain_text(text);
    }

    if req.path.starts_with(USER_AGENT_PREFIX) {
        return Response::plain_text(req.user_agent());
    }

    if let Some(name) = req.path.strip_prefix(FILES_PREFIX) {
        return fetch_from_root(name, cfg).await;
    }

    if store::is_servable(&req.path).await {
        return fetch_from_cwd(&req.path).await;
    }

    Response::empty(StatusCode::NotFound)
}

async fn dispatch_post(req: &Request, cfg: &Config) -> Response {
    let Some(name) = req.path.strip_prefix(FILES_PREFIX) else {
        return Response::empty(StatusCode::NotImplemented);
    };

    match store::store(name, &cfg.files_root(), &req.body).await {
        Ok(()) => {
            info!("Stored {} under {}", name, cfg.files_root().display());
            Response::empty(StatusCode::Created)
        }
        Err(e) => {
            error!("Error saving file {}: {}", name, e);
            Response::empty(StatusCode::InternalServerError)
        }
    }
}

/// GET `files/<name>`: contents served from the configured root, always as
/// application/octet-stream. Any fetch failure reads as 404 on the wire; a
/// genuine I/O error (e.g. the name is a directory) is logged as such.
async fn fetch_from_root(name: &str, cfg: &Config) -> Response {
    match store::fetch_under_root(name, &cfg.files_root()).await {
        Ok(body) => Response::file(body, "application/octet-stream"),
        Err(FetchError::NotFound) => Response::empty(StatusCode::NotFound),
        Err(FetchError::Io(e)) => {
            error!("Error reading {} from files root: {}", name, e);
            Response::empty(StatusCode::NotFound)
        }
    }
}

/// GET of any other path that names a readable file below the working
/// directory; content type resolved from the extension. Fetch failures read
/// as 404, with I/O errors logged distinctly.
async fn fetch_from_cwd(path: &str) -> Response {
    match store::fetch(path).await {
        Ok(body) => Response::file(body, mime::content_type_for(path)),
        Err(FetchError::NotFound) => Response::empty(StatusCode::NotFound),
        Err(FetchError::Io(e)) => {
            error!("Error reading {}: {}", path, e);
            Response::empty(StatusCode::NotFound)
        }
    }
}
