/*
[INPUT]:  Every combination of response / request-sent / local-error flags
[OUTPUT]: Test results for error classification precedence
[POS]:    Integration tests - normalized error totality
[UPDATE]: When classification order or fallback messages change
*/

use clipper_client::http::error::{
    ErrorEnvelope, FailedResponse, GENERIC_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE,
    UNEXPECTED_ERROR_MESSAGE,
};
use clipper_client::{ErrorCode, TransportFailure};
use rstest::rstest;
use serde_json::json;

fn failure(has_response: bool, request_sent: bool, is_error: bool) -> TransportFailure {
    TransportFailure {
        response: has_response.then(|| FailedResponse {
            status: 404,
            envelope: ErrorEnvelope::parse(
                json!({
                    "error": { "code": "NOT_FOUND", "message": "Campaign not found" }
                })
                .to_string()
                .as_bytes(),
            ),
            transport_message: Some("Request failed with status code 404".to_string()),
        }),
        request_sent,
        source_message: is_error.then(|| "local failure".to_string()),
    }
}

#[rstest]
#[case(true, true, true, ErrorCode::NotFound, 404)]
#[case(true, true, false, ErrorCode::NotFound, 404)]
#[case(true, false, true, ErrorCode::NotFound, 404)]
#[case(true, false, false, ErrorCode::NotFound, 404)]
#[case(false, true, true, ErrorCode::NetworkError, 0)]
#[case(false, true, false, ErrorCode::NetworkError, 0)]
#[case(false, false, true, ErrorCode::ClientError, 0)]
#[case(false, false, false, ErrorCode::UnknownError, 0)]
fn test_every_combination_maps_to_one_code(
    #[case] has_response: bool,
    #[case] request_sent: bool,
    #[case] is_error: bool,
    #[case] expected_code: ErrorCode,
    #[case] expected_status: u16,
) {
    let err = failure(has_response, request_sent, is_error).normalize();
    assert_eq!(err.code, expected_code);
    assert_eq!(err.status, expected_status);
}

#[rstest]
#[case(false, true, NETWORK_ERROR_MESSAGE)]
#[case(false, false, "local failure")]
fn test_message_per_branch(
    #[case] request_sent: bool,
    #[case] is_error: bool,
    #[case] expected: &str,
) {
    let err = failure(false, request_sent, is_error).normalize();
    assert_eq!(err.message, expected);
}

#[test]
fn test_fallback_message() {
    assert_eq!(
        TransportFailure::unrecognized().normalize().message,
        UNEXPECTED_ERROR_MESSAGE
    );
}

#[rstest]
#[case(Some("Structured"), Some("Transport"), "Structured")]
#[case(None, Some("Transport"), "Transport")]
#[case(Some(""), Some("Transport"), "Transport")]
#[case(None, None, GENERIC_ERROR_MESSAGE)]
fn test_message_fallback_chain(
    #[case] structured: Option<&str>,
    #[case] transport: Option<&str>,
    #[case] expected: &str,
) {
    let body = json!({ "error": { "code": "CONFLICT", "message": structured } }).to_string();
    let envelope = ErrorEnvelope::parse(body.as_bytes());
    let failure = TransportFailure {
        response: Some(FailedResponse {
            status: 409,
            envelope,
            transport_message: transport.map(str::to_string),
        }),
        request_sent: true,
        source_message: None,
    };

    let err = failure.normalize();
    assert_eq!(err.code, ErrorCode::Conflict);
    assert_eq!(err.message, expected);
}

#[rstest]
#[case(400, "VALIDATION_ERROR", ErrorCode::ValidationError)]
#[case(401, "UNAUTHORIZED", ErrorCode::Unauthorized)]
#[case(403, "FORBIDDEN", ErrorCode::Forbidden)]
#[case(404, "NOT_FOUND", ErrorCode::NotFound)]
#[case(409, "CONFLICT", ErrorCode::Conflict)]
fn test_envelope_codes(#[case] status: u16, #[case] code: &str, #[case] expected: ErrorCode) {
    let body = json!({ "error": { "code": code, "message": "m" } }).to_string();
    let err = TransportFailure::from_response(status, body.as_bytes()).normalize();
    assert_eq!(err.code, expected);
    assert_eq!(err.status, status);
    assert_eq!(err.message, "m");
}
