// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, paths, Flags};

const HELP: &str = "\
iced_gallery - event photo gallery

USAGE:
  iced_gallery [OPTIONS]

OPTIONS:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --data-dir <PATH>      Directory for favorites and session state
  --config-dir <PATH>    Directory holding settings.toml
  -h, --help             Print this help
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or_else(|err| {
            log::warn!("Ignoring --lang: {err}");
            None
        }),
        data_dir: args.opt_value_from_str("--data-dir").unwrap_or_else(|err| {
            log::warn!("Ignoring --data-dir: {err}");
            None
        }),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            log::warn!("Ignoring --config-dir: {err}");
            None
        }),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}
