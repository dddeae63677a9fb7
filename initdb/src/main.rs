//! A helper program to apply the registration and message migrations.

use std::env;

use movine::Movine;
use postgres::{Client, NoTls};

use log::{debug, info, initialize_logger};

const MIGRATIONS_DIR_VARIABLE: &str = "BACKEND_MIGRATIONS_DIR";
const DEFAULT_MIGRATIONS_DIR: &str = "./migrations";

fn main() {
    dotenv::dotenv().ok();

    let logger = initialize_logger();
    let connection_string = env::var("BACKEND_DB_CONNECTION_STRING")
        .expect("could not read BACKEND_DB_CONNECTION_STRING");
    let migrations_dir =
        env::var(MIGRATIONS_DIR_VARIABLE).unwrap_or_else(|_| DEFAULT_MIGRATIONS_DIR.to_owned());

    debug!(logger, "Connecting to database...");

    let client = Client::connect(&connection_string, NoTls).expect("could not connect to database");

    let mut movine = Movine::new(client);
    movine.set_migration_dir(&migrations_dir);

    if movine.status().is_err() {
        debug!(logger, "Initializing movine...");
        movine.initialize().expect("failed to initialize movine")
    }

    info!(logger, "Running migrations..."; "dir" => &migrations_dir);
    movine.up().expect("failed to run migrations");

    info!(logger, "Completed initialization.");
}
