use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    about,
    bin_name = "core-update",
    after_help = "e.g. core-update 6.2.0-beta0001 D:\\Repos\\MySolution"
)]
pub struct Arguments {
    /// The Harcourts Core nuget version to use.
    pub version: String,
    /// The path to the solution (optional). Defaults to the current directory.
    #[arg(default_value = "./")]
    pub path: String,
}
