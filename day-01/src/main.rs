use day_01::{input, solve};
use miette::Context;
use tracing_subscriber::EnvFilter;

#[tracing::instrument]
fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let file = input::read_input(input::INPUT_FILE).context("read puzzle input")?;
    let answers = solve(&file).context("solve puzzle")?;
    println!("{}", answers);
    Ok(())
}
