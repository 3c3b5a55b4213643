//! Authorization URL construction and CSRF state generation
//!
//! The user is redirected to the authorization URL, consents, and LINE calls
//! back the redirect URI with `code` and the unchanged `state`. The caller
//! checks `state` against the value it generated, then exchanges the code via
//! `NotifyClient::exchange_code`.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngExt;

use crate::constants::SCOPE;

/// Generate a random `state` value for the authorization request.
///
/// 32 random bytes encoded as URL-safe base64 without padding (43 chars), so
/// it can be placed in the query string without escaping.
pub fn generate_state() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Build the authorization URL.
///
/// Values are concatenated as given; `state` and `redirect_uri` are not
/// percent-encoded. With `form_post`, LINE delivers the callback as a POST
/// form instead of query parameters.
pub fn build_authorization_url(
    oauth_base: &str,
    client_id: &str,
    redirect_uri: &str,
    state: &str,
    form_post: bool,
) -> String {
    let mut url = format!(
        "{oauth_base}/authorize?response_type=code&scope={SCOPE}&client_id={client_id}&redirect_uri={redirect_uri}&state={state}"
    );
    if form_post {
        url.push_str("&response_mode=form_post");
    }
    url
}
