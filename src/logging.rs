use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::EnvFilter;

/// Installs a compact `fmt` subscriber on stderr. The level comes from
/// `RUST_LOG`, falling back to `info`.
pub fn install_logger() -> Result<(), SetGlobalDefaultError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
