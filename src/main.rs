// SPDX-License-Identifier: MPL-2.0
use vault_lens::app::{self, Flags};

const USAGE: &str = "\
Usage: vault_lens [OPTIONS] [FOLDER]

Options:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --start <INDEX>       Zero-based index of the first image
  -h, --help            Print this help";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("[cli] {error}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let start_index = args.opt_value_from_str("--start")?;
    let folder = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Flags {
        lang,
        folder,
        config_dir,
        start_index,
    })
}
