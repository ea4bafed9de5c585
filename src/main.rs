use clap::{crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use treeseed::{AnalyzeOptions, BuildOptions};

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("build")
                .about("Builds the tree described by structure.txt inside a directory")
                .arg(
                    Arg::new("directory")
                        .help("Directory holding structure.txt, and where the tree is created")
                        .default_value("."),
                )
                .arg(
                    Arg::new("no-create")
                        .help("Only read or seed structure.txt, do not create anything")
                        .long("no-create")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("interactive")
                        .help("Preview the tree and ask before creating it")
                        .short('i')
                        .long("interactive")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("analyze")
                .about("Draws an existing directory as a tree")
                .arg(
                    Arg::new("directory")
                        .help("The project directory to draw")
                        .required(true),
                )
                .arg(
                    Arg::new("output")
                        .help("Save the tree to this file")
                        .short('o')
                        .long("output"),
                )
                .arg(
                    Arg::new("interactive")
                        .help("Ask where to save the tree")
                        .short('i')
                        .long("interactive")
                        .action(ArgAction::SetTrue),
                ),
        )
        .get_matches();

    init_logger(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("build", args)) => handle_build(args),
        Some(("analyze", args)) => handle_analyze(args),
        // no subcommand: build from structure.txt in the working directory
        _ => {
            treeseed::seed_and_build(&PathBuf::from("."), &BuildOptions::default())?;
            Ok(())
        }
    }
}

fn init_logger(is_verbose: bool) {
    let level = if is_verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    log::debug!("executing in verbose mode");
}

fn handle_build(args: &ArgMatches) -> miette::Result<()> {
    let directory = args
        .get_one::<String>("directory")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let options = BuildOptions {
        create: !args.get_flag("no-create"),
        interactive: args.get_flag("interactive"),
    };

    treeseed::seed_and_build(&directory, &options)?;

    Ok(())
}

fn handle_analyze(args: &ArgMatches) -> miette::Result<()> {
    let Some(directory) = args.get_one::<String>("directory") else {
        unreachable!("directory is a required argument");
    };

    let options = AnalyzeOptions {
        output: args.get_one::<String>("output").map(PathBuf::from),
        interactive: args.get_flag("interactive"),
    };

    treeseed::analyze(&PathBuf::from(directory), &options)?;

    Ok(())
}
