#![allow(clippy::multiple_crate_versions)]

mod commands;
mod mcp_server;

use clap::{Arg, ArgAction, Command};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    let matches = Command::new("airis")
        .version(VERSION)
        .about("Airis Agent - confidence gating, repository indexing, and research planning for coding agents")
        .subcommand(Command::new("mcp").about("Start the MCP server over stdio"))
        .subcommand(
            Command::new("confidence")
                .about("Run a pre-implementation confidence assessment")
                .arg(
                    Arg::new("task")
                        .short('t')
                        .long("task")
                        .value_name("TASK")
                        .help("Description of the task to assess")
                        .required(true),
                )
                .arg(
                    Arg::new("complexity")
                        .long("complexity")
                        .value_name("LEVEL")
                        .help("Task complexity: simple, medium, or complex")
                        .default_value("medium"),
                )
                .arg(
                    Arg::new("duplicate-check")
                        .long("duplicate-check")
                        .action(ArgAction::SetTrue)
                        .help("Duplicate work has been checked"),
                )
                .arg(
                    Arg::new("architecture-check")
                        .long("architecture-check")
                        .action(ArgAction::SetTrue)
                        .help("Architecture compliance has been verified"),
                )
                .arg(
                    Arg::new("docs-verified")
                        .long("docs-verified")
                        .action(ArgAction::SetTrue)
                        .help("Official documentation has been reviewed"),
                )
                .arg(
                    Arg::new("oss-reference")
                        .long("oss-reference")
                        .action(ArgAction::SetTrue)
                        .help("OSS references have been consulted"),
                )
                .arg(
                    Arg::new("root-cause")
                        .long("root-cause")
                        .action(ArgAction::SetTrue)
                        .help("Root cause has been identified (for bugs)"),
                )
                .arg(
                    Arg::new("has-docs")
                        .long("has-docs")
                        .action(ArgAction::SetTrue)
                        .help("Official documentation exists for the task"),
                )
                .arg(
                    Arg::new("has-examples")
                        .long("has-examples")
                        .action(ArgAction::SetTrue)
                        .help("Similar implementations exist as reference"),
                ),
        )
        .subcommand(
            Command::new("index")
                .about("Generate a PROJECT_INDEX for a repository")
                .arg(
                    Arg::new("repo_path")
                        .value_name("REPO_PATH")
                        .help("Path to the repository to index")
                        .required(true),
                )
                .arg(
                    Arg::new("mode")
                        .short('m')
                        .long("mode")
                        .value_name("MODE")
                        .help("Indexing depth: quick, full, update")
                        .default_value("full"),
                )
                .arg(
                    Arg::new("max-entries")
                        .long("max-entries")
                        .value_name("N")
                        .help("Maximum entries per category")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("10"),
                )
                .arg(
                    Arg::new("output-dir")
                        .short('o')
                        .long("output-dir")
                        .value_name("DIR")
                        .help("Directory to write PROJECT_INDEX.{md,json}"),
                )
                .arg(
                    Arg::new("skip-docs")
                        .long("skip-docs")
                        .action(ArgAction::SetTrue)
                        .help("Leave documentation files out of the index"),
                )
                .arg(
                    Arg::new("skip-tests")
                        .long("skip-tests")
                        .action(ArgAction::SetTrue)
                        .help("Leave test files out of the index"),
                ),
        )
        .subcommand(
            Command::new("research")
                .about("Plan a multi-wave research run")
                .arg(
                    Arg::new("query")
                        .value_name("QUERY")
                        .help("Research query to investigate")
                        .required(true),
                )
                .arg(
                    Arg::new("depth")
                        .short('d')
                        .long("depth")
                        .value_name("DEPTH")
                        .help("Research depth: quick, standard, deep, exhaustive")
                        .default_value("standard"),
                )
                .arg(
                    Arg::new("constraint")
                        .long("constraint")
                        .value_name("CONSTRAINT")
                        .help("Constraint or focus area (repeatable)")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_name("SOURCE")
                        .help("Seed source to start from (repeatable)")
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(Command::new("doctor").about("Check environment health"))
        .get_matches();

    match matches.subcommand() {
        Some(("mcp", _)) => {
            if let Err(e) = mcp_server::start_mcp_server().await {
                eprintln!("MCP server failed: {}", e);
                std::process::exit(1);
            }
        }
        Some(("confidence", sub_matches)) => commands::confidence::run(sub_matches).await,
        Some(("index", sub_matches)) => commands::index::run(sub_matches).await,
        Some(("research", sub_matches)) => commands::research::run(sub_matches).await,
        Some(("doctor", _)) => commands::doctor::run().await,
        _ => {
            println!("Airis Agent v{}", VERSION);
            println!("Use --help for available commands");
        }
    }
}
