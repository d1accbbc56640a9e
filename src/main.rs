use clap::Parser;

use bikeshare::cli::{Cli, Commands};
use bikeshare::commands::{run_explore, run_init, run_sample, run_stats};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Explore(args) => run_explore(args, &cli),
        Commands::Stats(args) => run_stats(args, &cli),
        Commands::Sample(args) => run_sample(args, &cli),
        Commands::Init(args) => run_init(args, cli.color, cli.quiet),
    };

    std::process::exit(exit_code);
}
