use std::path::{Component, Path};

use crate::http::request::Request;
use crate::http::response::Response;

/// Resolves a `/files/...` request path against the configured directory.
///
/// The file name is everything after the `/files/` prefix and must consist
/// of normal path segments only: names with `.` or `..` components, a
/// rooted prefix, or no segments at all do not resolve. The join never
/// produces a double slash, whether or not the directory carries a trailing
/// one.
pub fn resolve_file_path(directory: &str, request_path: &str) -> Option<String> {
    let name = request_path.strip_prefix("/files/")?;

    if name.is_empty() || !is_plain_relative(name) {
        return None;
    }

    if directory.ends_with('/') {
        Some(format!("{directory}{name}"))
    } else {
        Some(format!("{directory}/{name}"))
    }
}

fn is_plain_relative(name: &str) -> bool {
    Path::new(name)
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
}

/// GET handler: the file's bytes as an octet-stream body, or 404 when the
/// name does not resolve or the read fails.
pub async fn download(directory: &str, request_path: &str) -> Response {
    let path = match resolve_file_path(directory, request_path) {
        Some(path) => path,
        None => {
            tracing::warn!("Rejected file path: {}", request_path);
            return Response::not_found();
        }
    };

    match tokio::fs::read(&path).await {
        Ok(contents) => Response::octet_stream(contents),
        Err(e) => {
            tracing::warn!("Error reading file {}: {}", path, e);
            Response::not_found()
        }
    }
}

/// POST handler: stores the request body at the resolved path and answers
/// 201 with the path in Location, or 500 when the write fails. NUL bytes
/// are stripped from the body before it is persisted.
pub async fn upload(directory: &str, request_path: &str, request: &Request) -> Response {
    let path = match resolve_file_path(directory, request_path) {
        Some(path) => path,
        None => {
            tracing::warn!("Rejected file path: {}", request_path);
            return Response::not_found();
        }
    };

    let mut contents = request.body.clone();
    contents.retain(|&b| b != 0);

    match tokio::fs::write(&path, &contents).await {
        Ok(()) => Response::created(request.content_type(), &path, contents),
        Err(e) => {
            tracing::error!("Error writing file {}: {}", path, e);
            Response::internal_error()
        }
    }
}
