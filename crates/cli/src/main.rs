use std::io::Write;

use anyhow::Context;

use shelfview_cli::{CliConfig, load_relations, parse_actions, run};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::from_env();
    shelfview_observability::init(config.log_format);

    if let Some(err) = &config.log_format_error {
        tracing::warn!(error = %err, "falling back to json logs");
    }

    let actions = parse_actions(std::env::args().skip(1))?;
    let relations = load_relations(&config)?;

    tracing::info!(
        data_dir = ?config.data_dir,
        actions = actions.len(),
        "rendering product table"
    );

    let screen = run(&relations, actions)?;

    std::io::stdout()
        .lock()
        .write_all(screen.as_bytes())
        .context("failed to write table to stdout")?;

    Ok(())
}
