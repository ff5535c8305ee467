use clap_verbosity_flag::Verbosity;
use rsbt_metainfo::RsbtConfig;
use std::path::PathBuf;
use structopt::StructOpt;

/// Inspect torrent files and compose local daemon URIs
#[derive(StructOpt)]
pub(crate) struct Cli {
    #[structopt(subcommand)]
    pub command: Command,
    #[structopt(flatten)]
    pub verbose: Verbosity,
    #[structopt(flatten)]
    pub config: RsbtConfig,
}

#[derive(StructOpt)]
pub(crate) enum Command {
    /// Print name, info hash and files of torrents
    Info {
        /// Paths to torrents
        #[structopt(parse(from_os_str), required = true)]
        torrents: Vec<PathBuf>,
    },
    /// Print URI with localclient credentials from the auth file
    AuthUri {
        /// URI of the daemon, e.g. http://localhost:58846
        uri: String,
    },
}

pub(crate) fn from_args() -> Cli {
    Cli::from_args()
}
