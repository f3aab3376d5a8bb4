//! `shelfview-cli`
//!
//! Terminal presentation for the product table: loads the relations, replays the
//! actions given on the command line and prints the resulting table.

pub mod config;
pub mod render;

pub use config::CliConfig;

use anyhow::Context;
use shelfview_catalog::Relations;
use shelfview_table::{ProductTable, SelectionAction};

/// Load the relations named by `config` (embedded seed data when no directory is set).
pub fn load_relations(config: &CliConfig) -> anyhow::Result<Relations> {
    match &config.data_dir {
        Some(dir) => Relations::from_dir(dir)
            .with_context(|| format!("failed to load relations from {}", dir.display())),
        None => Relations::seed().context("embedded seed data is malformed"),
    }
}

/// Parse every argument as an action, failing on the first malformed one.
pub fn parse_actions<I, S>(args: I) -> anyhow::Result<Vec<SelectionAction>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|arg| {
            let arg = arg.as_ref();
            arg.parse::<SelectionAction>()
                .with_context(|| format!("invalid action {arg:?}"))
        })
        .collect()
}

/// Build the table, replay `actions` and render the final screen.
pub fn run(relations: &Relations, actions: Vec<SelectionAction>) -> anyhow::Result<String> {
    let mut table = ProductTable::new(relations).context("relations do not join")?;

    for action in actions {
        table.dispatch(action);
    }

    Ok(render::screen(&table))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_actions_reports_the_bad_argument() {
        let err = parse_actions(["owner=Anna", "sort=Price"]).unwrap_err();
        assert!(err.to_string().contains("sort=Price"));
    }

    #[test]
    fn run_replays_actions_in_order() {
        let relations = Relations::seed().unwrap();
        let actions = parse_actions(["owner=Roma", "query=lap"]).unwrap();
        let screen = run(&relations, actions).unwrap();

        assert!(screen.contains("Laptop"));
        assert!(!screen.contains("Milk"));
    }

    #[test]
    fn seed_is_used_without_data_dir() {
        let relations = load_relations(&CliConfig::default()).unwrap();
        assert_eq!(relations, Relations::seed().unwrap());
    }
}
