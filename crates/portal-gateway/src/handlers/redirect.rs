use axum::extract::{OriginalUri, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use percent_encoding::percent_decode_str;
use portal_redirector::Resolution;
use tracing::debug;

use crate::error::Result;
use crate::state::AppState;

pub const HOME_PAGE: &str =
    "This is the home page of url shortener, where all unregistered paths get redirected to.\n";

/// Default answer for paths no mapping knows.
pub fn home_page(_path: &str) -> Response {
    (StatusCode::OK, HOME_PAGE).into_response()
}

pub async fn redirect_handler(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<Response> {
    let path = decode_path(uri.path());
    let path = path.as_str();

    let response = match state.chain().resolve(path).await? {
        Resolution::Redirect(url) => {
            debug!(path = %path, url = %url, "redirecting");
            (StatusCode::FOUND, [(header::LOCATION, url)]).into_response()
        }
        Resolution::Handled(response) => response,
        Resolution::Unhandled => home_page(path),
    };

    Ok(response)
}

/// Percent-decodes the request path. Paths that do not decode to UTF-8 are
/// looked up as received.
fn decode_path(raw: &str) -> String {
    percent_decode_str(raw)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_paths_are_decoded() {
        assert_eq!(decode_path("/caf%C3%A9"), "/café");
        assert_eq!(decode_path("/a%20b"), "/a b");
        assert_eq!(decode_path("/plain"), "/plain");
    }

    #[test]
    fn invalid_utf8_keeps_the_raw_path() {
        assert_eq!(decode_path("/bad%FF"), "/bad%FF");
    }
}
