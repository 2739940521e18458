use anyhow::Result;
use std::io;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    cfutil::watermelon::solve(io::stdin().lock(), io::stdout().lock())
}
