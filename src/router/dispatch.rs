use crate::http::encoding;
use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::router::files;

/// Selects and runs the handler for a request.
///
/// Dispatch tests the path in a fixed order and the first match wins:
/// the bare root, `/echo/`, `/user-agent`, `/files`, then 404 for
/// everything else.
pub async fn dispatch(request: &Request, directory: &str) -> Response {
    if request.path == "/" {
        Response::plain_text("")
    } else if let Some(content) = request.path.strip_prefix("/echo/") {
        echo(request, content)
    } else if request.path.starts_with("/user-agent") {
        Response::plain_text(request.user_agent())
    } else if request.path.starts_with("/files") {
        match request.method {
            Method::GET => files::download(directory, &request.path).await,
            Method::POST => files::upload(directory, &request.path, request).await,
            _ => Response::method_not_allowed(),
        }
    } else {
        Response::not_found()
    }
}

/// Echoes the path suffix back, gzip-compressed when the client negotiated
/// it, plain otherwise.
fn echo(request: &Request, content: &str) -> Response {
    if !request.accepts_gzip() {
        return Response::plain_text(content);
    }

    match encoding::compress(content.as_bytes()) {
        Ok(compressed) => Response::gzip_text(compressed),
        Err(e) => {
            tracing::error!("Error compressing echo body: {}", e);
            Response::internal_error()
        }
    }
}
