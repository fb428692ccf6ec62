pub mod inputs;

#[cfg(test)]
mod depth;
#[cfg(test)]
mod scenarios;
#[cfg(test)]
mod traversal;

/// Route the library's `tracing` output through the test harness' captured writer.
pub fn init_tracing() {
    // a second call in the same process finds the subscriber already installed
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
