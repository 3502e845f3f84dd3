// SPDX-License-Identifier: MPL-2.0
use marquee::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        theme_dir: args.opt_value_from_str("--theme").unwrap_or(None),
        catalog: args.opt_value_from_str("--catalog").unwrap_or(None),
    };

    app::run(flags)
}
