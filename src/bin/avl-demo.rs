//! Builds an AVL tree from the command line and prints it.
//!
//! ```text
//! avl-demo 3 1 4 0 2 5 --remove 3 --order pre
//! ```
//!
//! With no values it replays the classic walkthrough: ascending inserts, then a few more
//! inserts and a removal.

use std::process::ExitCode;

use avl::{InvariantError, Tree};
use clap::{ArgAction, Parser, ValueEnum};
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Insert values into an AVL tree, remove some, and print the result
#[derive(Parser, Debug)]
#[command(name = "avl-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Values to insert, in order
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Value to remove after inserting (may be repeated)
    #[arg(short, long, allow_negative_numbers = true)]
    remove: Vec<i64>,

    /// Traversal to print below the diagram
    #[arg(short, long, value_enum, default_value_t = Order::In)]
    order: Order,

    /// Raise log verbosity (-d info, -dd debug, -ddd trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    debug: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Order {
    /// Left, node, right
    In,
    /// Node, left, right
    Pre,
    /// Left, right, node
    Post,
}

#[derive(Error, Debug)]
enum DemoError {
    #[error("tree is corrupt after {step}: {source}")]
    Corrupt {
        step: &'static str,
        #[source]
        source: InvariantError,
    },
}

type DemoResult<T> = Result<T, DemoError>;

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let result = if cli.values.is_empty() && cli.remove.is_empty() {
        walkthrough()
    } else {
        run(&cli)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    if let Err(e) = subscriber.try_init() {
        eprintln!("Error: Failed to set up logging: {e}");
    }
}

fn run(cli: &Cli) -> DemoResult<()> {
    let mut tree = Tree::new();

    for &value in &cli.values {
        tree.insert(value);
    }
    info!(len = tree.len(), height = ?tree.height(), "inserted values");
    check(&tree, "inserting")?;

    for value in &cli.remove {
        if tree.remove(value).is_none() {
            debug!(value, "value was not in the tree");
        }
    }
    check(&tree, "removing")?;

    // The diagram ends in a newline but the empty message doesn't.
    print!("{tree}");
    if tree.is_empty() {
        println!();
    }
    println!("{}", traversal(&tree, cli.order));
    Ok(())
}

/// The original playground's two examples, run against one tree.
fn walkthrough() -> DemoResult<()> {
    let mut tree = Tree::new();

    example("repeated insertions in sequence", || {
        for value in 0..15 {
            tree.insert(value);
        }
        print!("{tree}");
    });
    check(&tree, "inserting")?;

    example("removing a value", || {
        tree.insert(15);
        tree.insert(16);
        tree.insert(18);
        print!("{tree}");
        tree.remove(&10);
        print!("{tree}");
    });
    check(&tree, "removing")?;

    Ok(())
}

fn example(title: &str, execute: impl FnOnce()) {
    println!("----Example Of '{title}' ----");
    execute();
}

fn check(tree: &Tree<i64>, step: &'static str) -> DemoResult<()> {
    tree.check_invariants()
        .map_err(|source| DemoError::Corrupt { step, source })
}

fn traversal(tree: &Tree<i64>, order: Order) -> String {
    let mut values = Vec::with_capacity(tree.len());
    let visit = |v: &i64| values.push(v.to_string());
    match order {
        Order::In => tree.traverse_in_order(visit),
        Order::Pre => tree.traverse_pre_order(visit),
        Order::Post => tree.traverse_post_order(visit),
    }
    values.join(" ")
}
