// SPDX-License-Identifier: MPL-2.0
use iced_toaster::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_toaster demo

USAGE:
  iced_toaster [OPTIONS]

OPTIONS:
  --kind <TYPE>          warning | error | success | info
  --position <EDGE>      top | bottom
  --title <TEXT>         Toast title
  --message <TEXT>       Toast message
  --duration <SECS>      Auto-dismiss delay in seconds
  --persist              Do not auto-dismiss
  --custom               Start with the custom slide-over example
  --config-dir <PATH>    Read settings.toml from PATH
  -h, --help             Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        kind: args.opt_value_from_str("--kind")?,
        position: args.opt_value_from_str("--position")?,
        title: args.opt_value_from_str("--title")?,
        message: args.opt_value_from_str("--message")?,
        duration_secs: args.opt_value_from_str("--duration")?,
        persist: args.contains("--persist"),
        custom: args.contains("--custom"),
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok(flags)
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
