use clap::Parser;
use interest_frontend::{app::telemetry, run, Config, Variant};

#[derive(Parser, Debug)]
#[command(version, about = "Interest quote frontend")]
struct Args {
    /// Which frontend to serve
    #[arg(long, env = "FRONTEND_VARIANT", value_enum, default_value_t = Variant::Membership)]
    variant: Variant,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let args = Args::parse();
    run(Config::from_env(args.variant)).await
}
