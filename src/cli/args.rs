//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum, ValueHint};

use crate::domain::Order;

/// Prefix expression trees: build, evaluate, and render in prefix, infix, and postfix notation
#[derive(Parser, Debug)]
#[command(name = "exptree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Config file (overrides the global config)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Reject expressions that leave operands without an operator
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate and show all three renderings (sample expression if omitted)
    Eval {
        /// Prefix expression, e.g. "+12"
        #[arg(allow_hyphen_values = true)]
        expression: Option<String>,
    },

    /// Show a single rendering
    Render {
        /// Prefix expression
        #[arg(allow_hyphen_values = true)]
        expression: String,
        /// Traversal order
        #[arg(short, long, value_enum, default_value_t = OrderArg::Infix)]
        order: OrderArg,
    },

    /// Show the tree shape
    Tree {
        /// Prefix expression
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },

    /// Ask for an expression on stdin (default)
    Interactive,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,

    /// Create config template
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderArg {
    Prefix,
    Infix,
    Postfix,
}

impl From<OrderArg> for Order {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Prefix => Order::Prefix,
            OrderArg::Infix => Order::Infix,
            OrderArg::Postfix => Order::Postfix,
        }
    }
}
