use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command as ClapCommand};
use log::error;
use std::process;

use slidekit::commands::{CommandFactory, SlidekitCommandFactory};
use slidekit::utils::logger::Logger;

fn cli() -> ClapCommand {
    ClapCommand::new("SlideKit")
        .version("0.1")
        .author("Maurice Schilpp")
        .about("Analyze SIS/ETS and WTP slide container structure and extract tiles")
        .arg(
            Arg::new("input")
                .help("Input container file (.ets or .wtp)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Dump every tile record during analysis")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("extract")
                .short('e')
                .long("extract")
                .help("Extract level-0 tile payloads")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .help("Directory to write tile files into")
                .value_name("DIR")
                .default_value(".")
                .required(false),
        )
        .arg(
            Arg::new("prefix")
                .long("prefix")
                .help("Filename prefix for extracted tiles")
                .value_name("NAME")
                .default_value("tile")
                .required(false),
        )
}

fn main() {
    // Usage errors share exit code 1 with file-open failures; clap's
    // default exit code would collide with the malformed-header code
    let matches = match cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit();
        }
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    let logger = match Logger::new("slidekit.log") {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("slidekit-global.log") {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = SlidekitCommandFactory::new();

    match factory.create_command(&matches, &logger) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(e.exit_code());
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    };
}
