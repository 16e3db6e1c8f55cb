use once_cell::sync::OnceCell;
use tracing::Span;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

static INIT: OnceCell<()> = OnceCell::new();

/// Installs the global subscriber. Safe to call more than once; only the
/// first call has any effect. The filter comes from `RUST_LOG` (default `info`).
pub fn init_tracing() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .finish();

        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("Failed to set global tracing subscriber: {}", e);
        }
    });
}

/// Span wrapping a single invocation, so every event logged while handling it
/// carries the request id and the CloudWatch log location.
pub fn invocation_span(request_id: &str, log_group: &str, log_stream: &str) -> Span {
    tracing::info_span!(
        "invocation",
        request_id = %request_id,
        log_group = %log_group,
        log_stream = %log_stream
    )
}
