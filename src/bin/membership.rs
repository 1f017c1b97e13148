use interest_frontend::{app::telemetry, run, Config, Variant};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();
    run(Config::from_env(Variant::Membership)).await
}
