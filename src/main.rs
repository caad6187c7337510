// SPDX-License-Identifier: MPL-2.0
use iced_carousel::app::{self, paths, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
iced_carousel - cinematic image carousel

USAGE:
  iced_carousel [OPTIONS]

OPTIONS:
  -h, --help               Print this help and exit
      --lang <LOCALE>      UI language (e.g. en-US, ru)
      --config-dir <DIR>   Read settings.toml from DIR
      --paused             Start with autoplay paused
      --fullscreen         Start in the fullscreen overlay

ENVIRONMENT:
  RUST_LOG                 Log filter (default: iced_carousel=warn)
  ICED_CAROUSEL_CONFIG_DIR Config directory when --config-dir is absent
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    init_logging();

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!("ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> =
        args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            tracing::warn!("ignoring --config-dir: {err}");
            None
        });
    let paused = args.contains("--paused");
    let fullscreen = args.contains("--fullscreen");

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "unrecognised arguments");
    }

    paths::init_cli_overrides(config_dir);

    app::run(Flags {
        lang,
        paused,
        fullscreen,
    })
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iced_carousel=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
