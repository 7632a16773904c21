// SPDX-License-Identifier: MPL-2.0
use essence_clinic::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let flags = Flags::parse(pico_args::Arguments::from_env());

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
