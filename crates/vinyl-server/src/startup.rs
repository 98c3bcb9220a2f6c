//! Server startup output.

use tracing::info;
use vinyl_config::AppConfig;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
        _             __
 _   __(_)___  __  __/ /
| | / / / __ \/ / / / /
| |/ / / / / / /_/ / /
|___/_/_/ /_/\__, /_/
            /____/   album service
    "#);
}

/// Lines describing where the server can be reached.
pub fn startup_lines(config: &AppConfig) -> Vec<String> {
    let base = format!("http://{}", config.server.addr());
    vec![
        format!("REST API:  {}/api/v1", base),
        format!("Health:    {}/health", base),
        format!("API Docs:  {}/swagger-ui", base),
        format!("Database:  {}", config.database.driver),
        format!(
            "Cache:     {}",
            if config.redis.enabled {
                config.redis.addr.as_str()
            } else {
                "disabled"
            }
        ),
    ]
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    for line in startup_lines(config) {
        info!("{}", line);
    }
    info!("{}", separator);
}
