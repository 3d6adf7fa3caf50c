use tracing::warn;

/// Hostname of this machine, `localhost` when it cannot be read.
pub fn local_hostname() -> String {
    match hostname::get() {
        Ok(name) => name.into_string().unwrap_or_else(|raw| {
            warn!(hostname = ?raw, "Hostname is not valid UTF-8, using localhost");
            "localhost".to_string()
        }),
        Err(e) => {
            warn!(error = %e, "Could not read hostname, using localhost");
            "localhost".to_string()
        }
    }
}
