// Response filter behaviour with http types

use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_ENCODING, CONTENT_LENGTH, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue, Response};
use htmlpress::filter::{FilterConfig, FilterOutcome, HtmlResponseFilter, SkipReason};
use htmlpress::Compressor;
use rstest::rstest;

const BODY: &str = "<html>\n  <body>\n    <p>Hi</p>\n  </body>\n</html>";
const COMPRESSED: &str = "<html><body><p>Hi</p></body></html>";

fn request_headers(accept: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_str(accept).unwrap());
    headers
}

fn html_response(body: &str) -> Response<Bytes> {
    Response::builder()
        .status(200)
        .header(CONTENT_TYPE, "text/html; charset=utf-8")
        .header(CONTENT_LENGTH, body.len())
        .body(Bytes::from(body.to_string()))
        .unwrap()
}

#[test]
fn test_html_response_is_compressed_and_length_updated() {
    let filter = HtmlResponseFilter::default();
    let mut response = html_response(BODY);

    let outcome = filter.apply(&request_headers("text/html,*/*;q=0.8"), &mut response);

    assert_eq!(
        outcome,
        FilterOutcome::Compressed {
            original_size: BODY.len(),
            compressed_size: COMPRESSED.len(),
        }
    );
    assert_eq!(response.body().as_ref(), COMPRESSED.as_bytes());
    assert_eq!(
        response.headers().get(CONTENT_LENGTH).unwrap(),
        &COMPRESSED.len().to_string()
    );
}

#[test]
fn test_content_length_byte_count_for_multibyte_text() {
    let body = "<p>\n  héllo wörld</p>";
    let filter = HtmlResponseFilter::default();
    let mut response = html_response(body);

    filter.apply(&request_headers("text/html"), &mut response);

    let expected = "<p>héllo wörld</p>";
    assert_eq!(response.body().as_ref(), expected.as_bytes());
    assert_eq!(
        response.headers().get(CONTENT_LENGTH).unwrap(),
        &expected.len().to_string()
    );
}

#[test]
fn test_missing_content_length_not_added_by_default() {
    let filter = HtmlResponseFilter::default();
    let mut response = Response::new(Bytes::from(BODY));

    let outcome = filter.apply(&request_headers("text/html"), &mut response);

    assert!(outcome.is_compressed());
    assert!(response.headers().get(CONTENT_LENGTH).is_none());
}

#[test]
fn test_always_set_content_length() {
    let config = FilterConfig {
        always_set_content_length: true,
        ..FilterConfig::default()
    };
    let filter = HtmlResponseFilter::new(Compressor::default(), config);
    let mut response = Response::new(Bytes::from(BODY));

    filter.apply(&request_headers("text/html"), &mut response);

    assert_eq!(
        response.headers().get(CONTENT_LENGTH).unwrap(),
        &COMPRESSED.len().to_string()
    );
}

#[rstest]
#[case("application/json", "text/html", SkipReason::NotAcceptedByClient)]
#[case("text/html", "application/json", SkipReason::NonHtmlContentType)]
#[case("text/html", "text/html; charset=iso-8859-1", SkipReason::UnsupportedCharset)]
fn test_skipped_responses_untouched(
    #[case] accept: &str,
    #[case] content_type: &str,
    #[case] reason: SkipReason,
) {
    let filter = HtmlResponseFilter::default();
    let mut response = html_response(BODY);
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());

    let outcome = filter.apply(&request_headers(accept), &mut response);

    assert_eq!(outcome, FilterOutcome::Skipped(reason));
    assert_eq!(response.body().as_ref(), BODY.as_bytes());
    assert_eq!(
        response.headers().get(CONTENT_LENGTH).unwrap(),
        &BODY.len().to_string()
    );
}

#[test]
fn test_missing_accept_header_skipped() {
    let filter = HtmlResponseFilter::default();
    let mut response = html_response(BODY);
    let outcome = filter.apply(&HeaderMap::new(), &mut response);
    assert_eq!(outcome, FilterOutcome::Skipped(SkipReason::NotAcceptedByClient));
}

#[test]
fn test_encoded_response_skipped() {
    let filter = HtmlResponseFilter::default();
    let mut response = html_response(BODY);
    response
        .headers_mut()
        .insert(CONTENT_ENCODING, HeaderValue::from_static("gzip"));

    let outcome = filter.apply(&request_headers("text/html"), &mut response);
    assert_eq!(outcome, FilterOutcome::Skipped(SkipReason::AlreadyEncoded));
}

#[test]
fn test_binary_body_passes_through() {
    let filter = HtmlResponseFilter::default();
    let binary = Bytes::from_static(&[0xff, 0xfe, b'\n', b'\n']);
    let mut response = Response::builder()
        .header(CONTENT_TYPE, "text/html")
        .body(binary.clone())
        .unwrap();

    let outcome = filter.apply(&request_headers("text/html"), &mut response);

    assert_eq!(outcome, FilterOutcome::Skipped(SkipReason::NonUtf8Body));
    assert_eq!(response.body(), &binary);
}

#[test]
fn test_empty_body_skipped() {
    let filter = HtmlResponseFilter::default();
    let mut response = html_response("");
    let outcome = filter.apply(&request_headers("text/html"), &mut response);
    assert_eq!(outcome, FilterOutcome::Skipped(SkipReason::EmptyBody));
}

#[test]
fn test_disabled_filter_skips() {
    let config = FilterConfig {
        enabled: false,
        ..FilterConfig::default()
    };
    let filter = HtmlResponseFilter::new(Compressor::default(), config);
    let mut response = html_response(BODY);

    let outcome = filter.apply(&request_headers("text/html"), &mut response);

    assert_eq!(outcome, FilterOutcome::Skipped(SkipReason::Disabled));
    assert_eq!(response.body().as_ref(), BODY.as_bytes());
}
