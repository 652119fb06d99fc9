use std::{net::SocketAddr, path::PathBuf};

use clap::{value_parser, Arg, Command};

pub fn arg_parser() -> Command {
    Command::new("folio")
        .about("Bookstore catalog and review service")
        .subcommand_required(true)
        .subcommand(
            Command::new("serve")
                .about("Start the HTTP server")
                .arg(
                    Arg::new("bind")
                        .long("bind")
                        .value_name("ADDR")
                        .help("Address to listen on, overrides the config")
                        .value_parser(value_parser!(SocketAddr)),
                )
                .arg(
                    Arg::new("catalog")
                        .long("catalog")
                        .value_name("PATH")
                        .help("JSON file to seed the catalog from")
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
        .subcommand(Command::new("config").about("Print the default configuration"))
}
