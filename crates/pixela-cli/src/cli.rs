//! Command-line surface: one Pixela operation per invocation.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use pixela::{
    graph_page_url, ApiResponse, GraphDefinition, GraphType, Operation, Pixel, PixelDate,
    PixelaClient, PixelaResult, Quantity, DEFAULT_GRAPH_ID,
};

#[derive(Parser, Debug)]
#[command(
    name = "pixela",
    about = "Create Pixela users, graphs, and pixels from the command line",
    version
)]
pub struct Cli {
    /// Service root (default https://pixe.la/v1).
    /// Also reads from PIXELA_ENDPOINT env var.
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register the user from PIXELA_USER_TOKEN / PIXELA_USERNAME.
    CreateUser,

    /// Create a graph for the user.
    CreateGraph {
        #[arg(long, default_value = DEFAULT_GRAPH_ID)]
        id: String,

        #[arg(long, default_value = "Coding Graph")]
        name: String,

        #[arg(long, default_value = "hours")]
        unit: String,

        /// Value type (int or float).
        #[arg(long = "type", default_value = "float")]
        kind: GraphType,

        #[arg(long, default_value = "ajisai")]
        color: String,
    },

    /// Record a quantity for a date (today by default).
    CreatePixel {
        #[arg(long, default_value = DEFAULT_GRAPH_ID)]
        graph: String,

        /// Date as YYYYMMDD; omit for today.
        #[arg(long)]
        date: Option<PixelDate>,

        #[arg(long)]
        quantity: Quantity,
    },

    /// Replace the quantity recorded for a date.
    UpdatePixel {
        #[arg(long, default_value = DEFAULT_GRAPH_ID)]
        graph: String,

        /// Date as YYYYMMDD.
        #[arg(long)]
        date: PixelDate,

        #[arg(long)]
        quantity: Quantity,
    },

    /// Remove the pixel recorded for a date.
    DeletePixel {
        #[arg(long, default_value = DEFAULT_GRAPH_ID)]
        graph: String,

        /// Date as YYYYMMDD.
        #[arg(long)]
        date: PixelDate,
    },

    /// Print the address of the graph's web page.
    GraphUrl {
        #[arg(long, default_value = DEFAULT_GRAPH_ID)]
        graph: String,
    },

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   pixela completions bash > ~/.local/share/bash-completion/completions/pixela
    ///   pixela completions zsh > ~/.zfunc/_pixela
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

/// What a command does once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Request(Operation),
    GraphUrl { graph_id: String },
    Completions(Shell),
}

impl Commands {
    pub fn action(&self) -> Action {
        let op = match self {
            Commands::CreateUser => Operation::CreateUser,
            Commands::CreateGraph {
                id,
                name,
                unit,
                kind,
                color,
            } => Operation::CreateGraph(GraphDefinition {
                id: id.clone(),
                name: name.clone(),
                unit: unit.clone(),
                kind: *kind,
                color: color.clone(),
            }),
            Commands::CreatePixel {
                graph,
                date,
                quantity,
            } => Operation::CreatePixel {
                graph_id: graph.clone(),
                pixel: Pixel::new(date.unwrap_or_else(PixelDate::today), quantity.clone()),
            },
            Commands::UpdatePixel {
                graph,
                date,
                quantity,
            } => Operation::UpdatePixel {
                graph_id: graph.clone(),
                date: *date,
                quantity: quantity.clone(),
            },
            Commands::DeletePixel { graph, date } => Operation::DeletePixel {
                graph_id: graph.clone(),
                date: *date,
            },
            Commands::GraphUrl { graph } => {
                return Action::GraphUrl {
                    graph_id: graph.clone(),
                }
            }
            Commands::Completions { shell } => return Action::Completions(*shell),
        };
        Action::Request(op)
    }

    /// The API operation this command maps to, if it makes a request.
    pub fn operation(&self) -> Option<Operation> {
        match self.action() {
            Action::Request(op) => Some(op),
            Action::GraphUrl { .. } | Action::Completions(_) => None,
        }
    }
}

/// Completion script for `shell`.
pub fn completion_script(shell: Shell) -> String {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "pixela", &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// What a command produced for stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Response(ApiResponse),
    Text(String),
}

impl Outcome {
    pub fn text(&self) -> &str {
        match self {
            Outcome::Response(resp) => &resp.body,
            Outcome::Text(text) => text,
        }
    }
}

/// Run one command. Only [`Action::Request`] touches the network.
pub async fn execute(command: &Commands, client: &PixelaClient) -> PixelaResult<Outcome> {
    let operation = match command.action() {
        Action::Request(operation) => operation,
        Action::GraphUrl { graph_id } => {
            let username = &client.credentials().username;
            let url = graph_page_url(client.endpoint(), username, &graph_id);
            return Ok(Outcome::Text(url));
        }
        Action::Completions(shell) => return Ok(Outcome::Text(completion_script(shell))),
    };

    match &operation {
        Operation::CreatePixel { pixel, .. } => warn_on_quantity(&pixel.quantity),
        Operation::UpdatePixel { quantity, .. } => warn_on_quantity(quantity),
        _ => {}
    }

    let resp = client.execute(&operation).await?;
    if !resp.is_success() {
        tracing::warn!(status = resp.status, "{} was not accepted", operation.name());
    }
    Ok(Outcome::Response(resp))
}

fn warn_on_quantity(quantity: &Quantity) {
    if !quantity.looks_numeric() {
        tracing::warn!("Quantity '{quantity}' is not a plain decimal; sending it anyway");
    }
}
