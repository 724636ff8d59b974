mod render;

use crate::Cli;
use crate::CommandResult;
use render::RenderCmd;

/// A subcommand that can be run once its arguments are parsed. `cli` carries
/// the global flags.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: &Cli) -> CommandResult;
}

#[derive(Debug, clap::Parser)]
#[command(name = "querydsl")]
pub(crate) enum CommandEnum {
    /// Render a query fragment as a standalone JSON document.
    Render(Box<RenderCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: &Cli) -> CommandResult {
        match self {
            Self::Render(cmd) => cmd.run(cli).await
        }
    }
}
