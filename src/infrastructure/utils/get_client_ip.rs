use actix_web::HttpRequest;

/// Key used to rate limit a submitter.
///
/// The first `X-Forwarded-For` hop is used only when the deployment sits
/// behind a trusted proxy; otherwise the socket peer address is used.
pub fn get_client_ip(req: &HttpRequest, trust_x_forwarded_for: bool) -> String {
    if trust_x_forwarded_for {
        let forwarded = req
            .headers()
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(str::trim)
            .filter(|ip| !ip.is_empty());

        if let Some(ip) = forwarded {
            return ip.to_string();
        }
    }

    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn forwarded_header_is_ignored_unless_trusted() {
        let req = TestRequest::default()
            .insert_header(("x-forwarded-for", "203.0.113.7, 10.0.0.1"))
            .peer_addr("192.0.2.1:5000".parse().unwrap())
            .to_http_request();

        assert_eq!(get_client_ip(&req, false), "192.0.2.1");
        assert_eq!(get_client_ip(&req, true), "203.0.113.7");
    }

    #[test]
    fn blank_forwarded_header_falls_back_to_peer() {
        let req = TestRequest::default()
            .insert_header(("x-forwarded-for", " "))
            .peer_addr("192.0.2.1:5000".parse().unwrap())
            .to_http_request();

        assert_eq!(get_client_ip(&req, true), "192.0.2.1");
    }
}
