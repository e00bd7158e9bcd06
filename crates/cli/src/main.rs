use clap::Parser;

mod args;
mod pick;
mod strip;
mod svg;

use args::{Args, Commands};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match args.command {
        Commands::Strip(args) => strip::strip_command(args),
        Commands::Svg(args) => svg::svg_command(args),
        Commands::Pick(args) => pick::pick_command(args),
    }
}
