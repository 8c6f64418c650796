use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version, about = "Product inventory registration web app")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    Server {
        #[command(subcommand)]
        action: ServerActions
    },

    Database {
        #[command(subcommand)]
        action: DatabaseActions
    }
}

#[derive(Subcommand)]
pub enum ServerActions {
    /// Serve the web app
    Start,

    /// Load the config, build the router and check the database, then exit
    DryStart
}

#[derive(Subcommand)]
pub enum DatabaseActions {
    Migrate
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_server_start() {
        let cli = Cli::try_parse_from(["inventario", "server", "start"]).expect("valid arguments");
        assert!(matches!(cli.command, Command::Server { action: ServerActions::Start }));
    }

    #[test]
    fn parses_dry_start_and_migrate() {
        let cli = Cli::try_parse_from(["inventario", "server", "dry-start"]).expect("valid arguments");
        assert!(matches!(cli.command, Command::Server { action: ServerActions::DryStart }));

        let cli = Cli::try_parse_from(["inventario", "database", "migrate"]).expect("valid arguments");
        assert!(matches!(cli.command, Command::Database { action: DatabaseActions::Migrate }));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["inventario"]).is_err());
    }
}
