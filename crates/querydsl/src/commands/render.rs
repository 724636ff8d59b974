use super::RunnableCommand;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use libquerydsl_core::query::ExistsQueryBuilder;
use libquerydsl_core::query::MissingQueryBuilder;
use libquerydsl_core::query::QueryBuilder;

#[derive(Debug, clap::Args)]
pub(crate) struct RenderCmd {
    #[arg(
        global=true,
        help="Pretty-print the rendered JSON document.",
        long,
    )]
    pretty: bool,

    #[command(subcommand)]
    query: RenderQuery,
}

#[derive(Debug, clap::Subcommand)]
enum RenderQuery {
    /// Documents that have no value for a field.
    Missing {
        #[arg(help="Name of the field to test.", long)]
        field: String,

        #[arg(
            help="Whether documents holding the mapping's `null_value` for the \
                 field count as missing.",
            long,
        )]
        null_value: Option<bool>,

        #[arg(
            help="Whether documents without the field at all count as missing.",
            long,
        )]
        existence: Option<bool>,

        #[arg(
            help="Label reported back for hits matched by this query.",
            long="name",
        )]
        result_label: Option<String>,
    },

    /// Documents that have a value for a field.
    Exists {
        #[arg(help="Name of the field to test.", long)]
        field: String,

        #[arg(
            help="Label reported back for hits matched by this query.",
            long="name",
        )]
        result_label: Option<String>,
    },
}
impl RenderQuery {
    fn build(self) -> anyhow::Result<Box<dyn QueryBuilder>> {
        Ok(match self {
            Self::Missing { field, null_value, existence, result_label } => {
                let mut query = MissingQueryBuilder::new(field)?;
                if let Some(null_value) = null_value {
                    query.set_null_value(null_value);
                }
                if let Some(existence) = existence {
                    query.set_existence(existence);
                }
                if let Some(label) = result_label {
                    query.set_result_label(label);
                }
                Box::new(query)
            },

            Self::Exists { field, result_label } => {
                let mut query = ExistsQueryBuilder::new(field)?;
                if let Some(label) = result_label {
                    query.set_result_label(label);
                }
                Box::new(query)
            },
        })
    }
}

impl RenderCmd {
    fn render(self) -> anyhow::Result<String> {
        let query = self.query.build()?;
        log::debug!("Rendering a `{}` query: {query:?}", query.name());

        Ok(if self.pretty {
            serde_json::to_string_pretty(&query.to_json_value()?)?
        } else {
            query.to_json_string()?
        })
    }
}

#[inherent::inherent]
impl RunnableCommand for RenderCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        match self.render() {
            Ok(json) => CommandResult::stdout(format_args!("{json}")),
            Err(e) => CommandResult::stderr(format_args!(
                "{} Failed to render query: {e}",
                output_utils::RED_X,
            )),
        }
    }
}
