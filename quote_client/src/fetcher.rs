//! Request the current quote from the quote server.
use std::time::Duration;

use log::{debug, info, warn};
use quote_common::{ErrorBody, ErrorKind, QuoteError, QuoteResponse, Result};

/// Perform one GET against `url`, bounded by `timeout`, and decode the quote.
///
/// Any non-success reply is surfaced as `QuoteError::Server`. When the body is
/// not an `ErrorBody`, the reply is classified as an invalid response and its
/// raw text becomes the message.
pub fn fetch_quote(url: &str, timeout: Duration) -> Result<QuoteResponse> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;

    info!("Requesting quote from {} (deadline {:?})", url, timeout);
    let response = client.get(url).send()?;
    let status = response.status();
    let body = response.bytes()?;

    if !status.is_success() {
        warn!("Server answered {}", status);
        return Err(match serde_json::from_slice::<ErrorBody>(&body) {
            Ok(err) => QuoteError::Server {
                status: status.as_u16(),
                kind: err.kind,
                message: err.message,
            },
            Err(_) => QuoteError::Server {
                status: status.as_u16(),
                kind: ErrorKind::InvalidResponse,
                message: String::from_utf8_lossy(&body).into_owned(),
            },
        });
    }

    let quote: QuoteResponse = serde_json::from_slice(&body)?;
    debug!("Received quote: {:?}", quote);
    Ok(quote)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    const GENEROUS: Duration = Duration::from_secs(2);

    /// Answer a single HTTP request with `status_line` and `body` after `delay`.
    fn serve_once(status_line: &'static str, body: &'static str, delay: Duration) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                thread::sleep(delay);
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}/cotacao", addr)
    }

    #[test]
    fn decodes_the_quote() {
        let url = serve_once("200 OK", r#"{"cotacao":"5.43"}"#, Duration::ZERO);

        let quote = fetch_quote(&url, GENEROUS).unwrap();
        assert_eq!(quote.bid, "5.43");
    }

    #[test]
    fn structured_server_error_is_reported() {
        let url = serve_once(
            "504 Gateway Timeout",
            r#"{"kind":"timeout","message":"HTTP request error: operation timed out"}"#,
            Duration::ZERO,
        );

        let err = fetch_quote(&url, GENEROUS).unwrap_err();
        assert!(matches!(err, QuoteError::Server { status: 504, .. }));
        assert_eq!(err.kind(), ErrorKind::Timeout);
    }

    #[test]
    fn unstructured_server_error_is_an_invalid_response() {
        let url = serve_once("500 Internal Server Error", "Internal Server Error", Duration::ZERO);

        let err = fetch_quote(&url, GENEROUS).unwrap_err();
        match &err {
            QuoteError::Server {
                status,
                kind,
                message,
            } => {
                assert_eq!(*status, 500);
                assert_eq!(*kind, ErrorKind::InvalidResponse);
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().starts_with("Server responded 500"));
    }

    #[test]
    fn slow_server_hits_the_deadline() {
        let url = serve_once("200 OK", r#"{"cotacao":"5.43"}"#, Duration::from_secs(1));

        let err = fetch_quote(&url, Duration::from_millis(300)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Timeout);
    }

    #[test]
    fn unexpected_body_is_a_decode_error() {
        let url = serve_once("200 OK", r#"{"bid":"5.43"}"#, Duration::ZERO);

        let err = fetch_quote(&url, GENEROUS).unwrap_err();
        assert!(matches!(err, QuoteError::Json(_)));
    }
}
