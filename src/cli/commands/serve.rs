use anyhow::Result;

use reqmine::implementations::server;
use reqmine::ReqmineConfig;

use crate::cli::ui;

/// Prover API command
pub async fn execute(
    config: &ReqmineConfig,
    host: Option<&str>,
    port: Option<u16>,
    timeout_ms: Option<u64>,
) -> Result<()> {
    let server_config = config.resolve_server(host, port, timeout_ms)?;
    ui::print_info(
        &format!(
            "Prover API on http://{}:{}/api/prove (timeout {} ms)",
            server_config.host,
            server_config.port,
            server_config.timeout_ms
        )
    );
    server::run(&server_config).await?;
    Ok(())
}
