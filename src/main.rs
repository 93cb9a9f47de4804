use anyhow::Context;

use blackjack::{StdinConsole, Table};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let mut table = Table::new(StdinConsole::new());
    table.run().context("game aborted")?;
    Ok(())
}
