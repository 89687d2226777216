/// Closed status table, ordered by code.
const HTTP_STATUS_EXPLANATIONS: &[(u16, &str)] = &[
    (
        400,
        "Bad Request - The server couldn't understand the request. Check request format.",
    ),
    (
        401,
        "Unauthorized - Authentication required. Check API keys or login credentials.",
    ),
    (
        403,
        "Forbidden - Access denied. Check permissions and authorization.",
    ),
    (404, "Not Found - The resource doesn't exist. Verify the URL."),
    (
        405,
        "Method Not Allowed - Wrong HTTP method. Check if using GET/POST/PUT/DELETE correctly.",
    ),
    (
        408,
        "Request Timeout - The request took too long. Try again or increase timeout.",
    ),
    (
        429,
        "Too Many Requests - Rate limited. Implement backoff and retry logic.",
    ),
    (
        500,
        "Internal Server Error - Server-side issue. Check server logs.",
    ),
    (
        502,
        "Bad Gateway - Proxy/load balancer issue. Check upstream services.",
    ),
    (
        503,
        "Service Unavailable - Server is overloaded or under maintenance.",
    ),
    (
        504,
        "Gateway Timeout - Upstream server didn't respond in time.",
    ),
];

/// Explanation for an HTTP status code.
///
/// Codes outside the table get a generic message; this never fails.
pub fn http_status_explanation(status: u16) -> String {
    HTTP_STATUS_EXPLANATIONS
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, explanation)| (*explanation).to_string())
        .unwrap_or_else(|| generic_http_explanation(&status.to_string()))
}

/// Explanation for a captured status string that may not parse as a code.
pub(crate) fn explain_status_text(status: &str) -> String {
    status
        .parse::<u16>()
        .map(http_status_explanation)
        .unwrap_or_else(|_| generic_http_explanation(status))
}

fn generic_http_explanation(status: &str) -> String {
    format!("HTTP error {status}. Check the API documentation.")
}

/// Status codes with a dedicated explanation, in table order.
pub fn known_status_codes() -> impl Iterator<Item = u16> {
    HTTP_STATUS_EXPLANATIONS.iter().map(|(code, _)| *code)
}
