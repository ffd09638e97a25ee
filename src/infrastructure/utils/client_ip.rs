use actix_web::HttpRequest;

/// Rate-limit identifier for the caller: the first hop in `X-Forwarded-For`,
/// trimmed. Requests without the header all share one "unknown" bucket.
///
/// The header is client-suppliable, so this is best-effort identification;
/// a deployment behind a trusted proxy should rely on that proxy setting it.
pub fn client_identifier(req: &HttpRequest) -> String {
    req.headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn takes_the_first_forwarded_hop() {
        let req = TestRequest::default()
            .insert_header(("x-forwarded-for", "203.0.113.7, 10.0.0.1"))
            .to_http_request();
        assert_eq!(client_identifier(&req), "203.0.113.7");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let req = TestRequest::default()
            .insert_header(("x-forwarded-for", "  203.0.113.7 , 10.0.0.1"))
            .to_http_request();
        assert_eq!(client_identifier(&req), "203.0.113.7");
    }

    #[test]
    fn missing_or_empty_header_falls_back_to_unknown() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(client_identifier(&req), "unknown");

        let req = TestRequest::default()
            .insert_header(("x-forwarded-for", ""))
            .to_http_request();
        assert_eq!(client_identifier(&req), "unknown");
    }
}
