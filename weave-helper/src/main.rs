use eyre::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;

    // stdout carries the plugin response
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,protoweave_plugin=debug".into()),
        )
        .init();

    protoweave_helper::helper_plugin().run()?;
    Ok(())
}
