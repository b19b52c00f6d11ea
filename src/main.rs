// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, paths, Flags};
use iced_gallery::logging;

const HELP: &str = "\
IcedGallery - image gallery with lightbox

USAGE:
  iced_gallery [OPTIONS] [GALLERY_DIR]

OPTIONS:
  --lang <id>          Interface language (e.g. en-US, fr, fa)
  --config-dir <dir>   Directory holding settings.toml
  -h, --help           Print this help

ARGS:
  GALLERY_DIR          Directory with images or a gallery.toml (default: .)

ENVIRONMENT:
  ICED_GALLERY_CONFIG_DIR   Same as --config-dir
  RUST_LOG                  Log filter (default: info)
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    logging::init();

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|error| {
        tracing::warn!(%error, "ignoring invalid --lang");
        None
    });
    let config_dir: Option<String> = args
        .opt_value_from_str("--config-dir")
        .unwrap_or_else(|error| {
            tracing::warn!(%error, "ignoring invalid --config-dir");
            None
        });
    paths::init_cli_override(config_dir);

    let flags = Flags {
        lang,
        gallery_dir: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
