// Installing a global subscriber can only happen once per process, which is why this lives in
// its own test binary.
#[cfg(not(target_arch = "wasm32"))]
#[test]
fn tracing_initializes_once() {
    use nostr_pubkey::logging::{init_tracing, LoggingError};
    use tracing::Level;

    let guard = init_tracing(Level::DEBUG).expect("first initialization to succeed");
    tracing::info!("logging initialized");

    let second_attempt = init_tracing(Level::INFO);
    assert!(matches!(
        second_attempt,
        Err(LoggingError::AlreadyInitialized(_))
    ));

    drop(guard);
}
