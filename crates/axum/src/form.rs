//! `application/x-www-form-urlencoded` parsing.
//!
//! Parsing is strict: a malformed percent escape or a `;` separator fails the
//! whole form, matching how browsers' servers usually reject such input.

use adminbridge_core::{FormData, FormError};
use percent_encoding::percent_decode_str;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Collect form values for a request.
///
/// For `POST`, `PUT` and `PATCH` requests with a URL-encoded body, the body
/// pairs come first, followed by the query string pairs. All other requests
/// only contribute their query string.
pub fn parse_form(
    method: &str,
    content_type: Option<&str>,
    query: Option<&str>,
    body: &[u8],
) -> Result<FormData, FormError> {
    let mut form = FormData::new();

    if matches!(method, "POST" | "PUT" | "PATCH") && is_form_content_type(content_type)? {
        append_pairs(&mut form, &String::from_utf8_lossy(body))?;
    }

    if let Some(query) = query {
        append_pairs(&mut form, query)?;
    }

    Ok(form)
}

/// First value for `name` in a query string, skipping malformed pairs.
pub fn query_value(query: &str, name: &str) -> Option<String> {
    query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| parse_segment(segment).ok())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

fn is_form_content_type(content_type: Option<&str>) -> Result<bool, FormError> {
    let Some(content_type) = content_type else {
        return Ok(false);
    };

    let media_type = content_type.split(';').next().unwrap_or_default().trim();
    if media_type.is_empty() || !media_type.contains('/') {
        return Err(FormError::InvalidContentType(content_type.to_string()));
    }

    Ok(media_type.eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}

fn append_pairs(form: &mut FormData, raw: &str) -> Result<(), FormError> {
    for segment in raw.split('&').filter(|segment| !segment.is_empty()) {
        let (key, value) = parse_segment(segment)?;
        form.entry(key).or_default().push(value);
    }
    Ok(())
}

fn parse_segment(segment: &str) -> Result<(String, String), FormError> {
    if segment.contains(';') {
        return Err(FormError::Semicolon);
    }

    let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
    Ok((decode_component(key)?, decode_component(value)?))
}

fn decode_component(raw: &str) -> Result<String, FormError> {
    check_escapes(raw)?;
    let spaced = raw.replace('+', " ");
    Ok(percent_decode_str(&spaced).decode_utf8_lossy().into_owned())
}

fn check_escapes(raw: &str) -> Result<(), FormError> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                let end = (i + 3).min(bytes.len());
                return Err(FormError::InvalidEscape(
                    String::from_utf8_lossy(&bytes[i..end]).into_owned(),
                ));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}
