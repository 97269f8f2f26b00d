//! Request span construction for `TraceLayer`.
//!
//! Spans record the method and the path only. The query string is dropped
//! because `RequireAdmin` accepts the admin password as `?password=`, and
//! path segments that carry a password candidate are replaced.

use std::borrow::Cow;

use axum::{body::Body, http::Request};
use tracing::Span;

/// Route prefixes whose remaining path is a secret.
const SECRET_PATH_PREFIXES: &[&str] = &["/checkPass/"];

const REDACTED: &str = "[redacted]";

/// `path` with any secret segment replaced.
#[must_use]
pub fn redact_path(path: &str) -> Cow<'_, str> {
    for prefix in SECRET_PATH_PREFIXES {
        if let Some(rest) = path.strip_prefix(prefix)
            && !rest.is_empty()
        {
            return Cow::Owned(format!("{prefix}{REDACTED}"));
        }
    }
    Cow::Borrowed(path)
}

/// Span for one HTTP request; `request_id` is filled in by the request-id
/// middleware.
pub fn request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %redact_path(request.uri().path()),
        request_id = tracing::field::Empty,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    #[test]
    fn test_plain_paths_are_untouched() {
        assert_eq!(redact_path("/menu/espresso"), "/menu/espresso");
        assert_eq!(redact_path("/deleteCat/4"), "/deleteCat/4");
        assert!(matches!(redact_path("/products"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_check_pass_candidate_is_redacted() {
        let redacted = redact_path("/checkPass/Fl4tWh1te!");
        assert_eq!(redacted, "/checkPass/[redacted]");
        assert!(!redacted.contains("Fl4tWh1te"));
    }

    #[test]
    fn test_bare_check_pass_prefix_is_kept() {
        assert_eq!(redact_path("/checkPass/"), "/checkPass/");
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn logged_line(uri: &str) -> String {
        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_ansi(false)
            .finish();
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

        tracing::subscriber::with_default(subscriber, || {
            let span = request_span(&request);
            let _entered = span.enter();
            tracing::info!("handled");
        });

        let bytes = capture.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_span_omits_query_password() {
        let line = logged_line("/deleteCat/1?password=Fl4tWh1te!");
        assert!(line.contains("path=/deleteCat/1"), "{line}");
        assert!(!line.contains("Fl4tWh1te"), "{line}");
    }

    #[test]
    fn test_span_omits_check_pass_candidate() {
        let line = logged_line("/checkPass/Fl4tWh1te!");
        assert!(line.contains("/checkPass/[redacted]"), "{line}");
        assert!(!line.contains("Fl4tWh1te"), "{line}");
    }
}
