use clap::Parser;
use core_update::{arguments::Arguments, report};
use log::LevelFilter;
use std::process;
use std::time::Instant;

fn main() {
    let started = Instant::now();
    report::banner();

    // Wrong invocation shape shows usage and exits 1; --help takes the
    // same path since the tool has no flag surface of its own.
    let args = Arguments::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        process::exit(1);
    });

    pretty_env_logger::env_logger::builder()
        .filter_level(LevelFilter::Info)
        .format_timestamp(None)
        .parse_default_env()
        .init();

    match core_update::run(&args) {
        Ok(()) => report::done(started.elapsed()),
        Err(e) => {
            report::error(&e.to_string());
            process::exit(e.exit_code());
        }
    }
}
