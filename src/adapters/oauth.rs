//! OAuth 1.0a request signing (HMAC-SHA1) for the Twitter v2 API.
//!
//! JSON request bodies contribute no parameters to the signature base
//! string; only the oauth_* protocol parameters are signed.

use crate::domain::model::Credentials;
use crate::utils::error::{BotError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::{distributions::Alphanumeric, Rng};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

// RFC 3986 unreserved characters stay literal; everything else is encoded.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn percent(value: &str) -> String {
    utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

/// Builds the `Authorization: OAuth ...` header for one request, with a
/// fresh nonce and the current Unix timestamp.
pub fn signed_header(method: &str, url: &str, credentials: &Credentials) -> Result<String> {
    let nonce: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect();
    authorization_header(method, url, credentials, &nonce, Utc::now().timestamp())
}

/// Deterministic variant of [`signed_header`]; nonce and timestamp are
/// caller-supplied so tests can pin the signature.
pub fn authorization_header(
    method: &str,
    url: &str,
    credentials: &Credentials,
    nonce: &str,
    timestamp: i64,
) -> Result<String> {
    let timestamp = timestamp.to_string();
    let oauth_params = [
        ("oauth_consumer_key", credentials.app_key.as_str()),
        ("oauth_nonce", nonce),
        ("oauth_signature_method", "HMAC-SHA1"),
        ("oauth_timestamp", timestamp.as_str()),
        ("oauth_token", credentials.access_token.as_str()),
        ("oauth_version", "1.0"),
    ];

    let base = signature_base_string(method, url, &oauth_params);
    let oauth_signature = sign(&base, &credentials.app_secret, &credentials.access_secret)?;

    let mut header = String::from("OAuth ");
    for (name, value) in oauth_params
        .iter()
        .map(|(k, v)| (*k, percent(v)))
        .chain(std::iter::once(("oauth_signature", percent(&oauth_signature))))
    {
        header.push_str(&format!("{}=\"{}\", ", name, value));
    }
    header.truncate(header.len() - 2);
    Ok(header)
}

/// Percent-encodes every pair, sorts, and joins into the base string.
fn signature_base_string(method: &str, url: &str, params: &[(&str, &str)]) -> String {
    let mut pairs: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent(k), percent(v)))
        .collect();
    pairs.sort();

    let param_string = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent(url),
        percent(&param_string)
    )
}

fn sign(base: &str, consumer_secret: &str, token_secret: &str) -> Result<String> {
    let signing_key = format!("{}&{}", percent(consumer_secret), percent(token_secret));
    let mut mac =
        HmacSha1::new_from_slice(signing_key.as_bytes()).map_err(|e| BotError::SigningError {
            message: e.to_string(),
        })?;
    mac.update(base.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
