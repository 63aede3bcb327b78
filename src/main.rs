use clap::Parser;

fn main() {
    let cli = profile_builder::cli::Cli::parse();

    if let Err(err) = profile_builder::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
