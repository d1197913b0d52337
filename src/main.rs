// SPDX-License-Identifier: MPL-2.0
use prompt_editor::app::{self, Flags};

const HELP: &str = "\
prompt_editor - edit images with natural-language instructions

USAGE:
  prompt_editor [OPTIONS]

OPTIONS:
  --lang <LOCALE>          UI language (e.g. en-US, fr)
  --service-url <URL>      Editing service origin (default http://127.0.0.1:8000)
  --config-dir <DIR>       Directory holding settings.toml
  -h, --help               Print this help

ENVIRONMENT:
  PROMPT_EDITOR_SERVICE_URL   Editing service origin
  PROMPT_EDITOR_CONFIG_DIR    Directory holding settings.toml
  PROMPT_EDITOR_LOG           Log filter (default: info)
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    app::logging::init();

    let flags = Flags {
        lang: parse_opt(&mut args, "--lang"),
        service_url: parse_opt(&mut args, "--service-url"),
        config_dir: parse_opt(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    app::run(flags)
}

/// Reads an optional `--key value` pair, logging malformed values instead of aborting.
fn parse_opt(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%key, error = %err, "ignoring invalid argument");
            None
        }
    }
}
