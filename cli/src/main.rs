use env_logger::Builder as LoggerBuilder;
use exitfailure::ExitFailure;
use failure::format_err;
use log::{debug, Level};
use rsbt_metainfo::{
    localhost_auth_uri, torrent_summary, RsbtAuthFile, RsbtProperties, RsbtSettings,
};

mod cli;

use cli::Command;

fn main() -> Result<(), ExitFailure> {
    let cli = cli::from_args();

    if let Some(level_filter) = cli.verbose.log_level().map(|x| x.to_level_filter()) {
        LoggerBuilder::new()
            .filter(
                Some(&env!("CARGO_PKG_NAME").replace("-", "_")),
                level_filter,
            )
            .filter(Some("rsbt_metainfo"), level_filter)
            .filter(None, Level::Warn.to_level_filter())
            .try_init()?;
    }

    let properties: RsbtProperties = (
        load_settings()?.override_with(cli.config),
        rsbt_metainfo::default_app_dir(),
    )
        .into();

    debug!("calculated properties {:#?}", properties);

    match cli.command {
        Command::Info { torrents } => {
            let options = properties.parse_options();
            for path in torrents {
                let summary = torrent_summary(&path, &options)?;
                println!("{}", summary.filename);
                println!("  name:      {}", summary.name);
                println!("  encoding:  {}", summary.encoding);
                println!("  info hash: {}", summary.info_hash);
                for file in &summary.files {
                    println!("  {:>14}  {}", file.size, file.path);
                }
            }
        }
        Command::AuthUri { uri } => {
            let auth = RsbtAuthFile::resolve(&properties.config_dir());
            let auth_uri = localhost_auth_uri(&uri, &auth).ok_or_else(|| {
                format_err!(
                    "no localclient credentials in {}",
                    auth.path().display()
                )
            })?;
            println!("{}", auth_uri);
        }
    }

    Ok(())
}

fn load_settings() -> Result<RsbtSettings, confy::ConfyError> {
    debug!("loading settings");

    confy::load(env!("CARGO_PKG_NAME"))
}
