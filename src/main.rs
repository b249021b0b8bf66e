// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Iced Toast - one toast on screen at a time

USAGE:
  iced_toast [OPTIONS]

OPTIONS:
  -h, --help               Print this help
  --capacity <N>           Maximum number of waiting toasts (1-1000)
  --config-dir <PATH>      Directory holding settings.toml
  --save-config            Store the effective capacity in settings.toml

ENVIRONMENT:
  ICED_TOAST_CONFIG_DIR    Same as --config-dir
  RUST_LOG                 Log filter, e.g. iced_toast=debug
";

fn main() -> iced::Result {
    init_tracing();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let save_config = args.contains("--save-config");
    let parsed: Result<(Option<usize>, Option<String>), pico_args::Error> = (|| {
        Ok((
            args.opt_value_from_str("--capacity")?,
            args.opt_value_from_str("--config-dir")?,
        ))
    })();
    let (capacity, config_dir) = match parsed {
        Ok(values) => values,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(config_dir);
    app::run(Flags {
        capacity,
        save_config,
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("iced_toast=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
