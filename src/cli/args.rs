use clap::Parser;

/// Command-line arguments for cicdez
#[derive(Parser, Debug, Clone)]
#[command(name = "cicdez")]
#[command(
    about = "Load a compose file with CI/CD extensions and print the validated model"
)]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Compose file path
    #[arg(short, long, value_name = "PATH", default_value = "./compose.yaml", env = "CICDEZ_FILE")]
    pub file: String,

    /// Output format: json or yaml
    #[arg(long = "format", value_name = "FORMAT", default_value = "yaml")]
    pub output_format: String,

    /// Print the model even when some services have invalid extensions
    #[arg(long)]
    pub lenient: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}
