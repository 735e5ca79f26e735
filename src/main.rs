// SPDX-License-Identifier: MPL-2.0
use coast_gallery::app::{self, Flags};
use pico_args;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        base_url: args.opt_value_from_str("--base-url").unwrap(),
    };

    app::run(flags)
}
