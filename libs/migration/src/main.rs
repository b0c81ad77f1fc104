//! Migration CLI for the products schema, e.g. `cargo run -p migration -- up`.
//! Reads `DATABASE_URL` like the API does.

use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
