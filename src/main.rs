use dotenv::dotenv;
use hallpass::{commands::Cli, libs::logging::init_tracing};

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    Cli::menu()
}
