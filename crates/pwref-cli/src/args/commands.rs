use clap::Subcommand;

use super::enums::ProtocolArg;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show command tables (one category, or every category)")]
    List {
        #[arg(long, help = "Show only the named category")]
        category: Option<String>,

        #[arg(long, help = "Narrow the tables to commands matching a query")]
        query: Option<String>,
    },

    #[command(about = "Search commands across every category")]
    Search {
        query: String,
    },

    #[command(about = "Show global per-protocol command totals")]
    Stats,

    #[command(about = "Show the MCP vs CLI head-to-head comparison")]
    Compare,

    #[command(about = "Show quick-setup instructions for each protocol")]
    Setup,

    #[command(about = "Browse complete workflow examples")]
    Workflow {
        #[command(subcommand)]
        command: WorkflowCommand,
    },

    #[command(about = "Open the interactive reference")]
    Tui,
}

#[derive(Subcommand)]
pub enum WorkflowCommand {
    #[command(about = "List the workflow examples")]
    List,

    #[command(about = "Show one workflow's code sample")]
    Show {
        id: String,

        #[arg(long, value_enum, help = "Which protocol's sample to show")]
        protocol: Option<ProtocolArg>,

        #[arg(long, help = "Copy the code sample to the system clipboard")]
        copy: bool,
    },
}
