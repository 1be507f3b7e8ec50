use crate::database::DbPool;
use rocket::{Build, Rocket};

mod api;
mod server;

pub fn build_server(pool: DbPool) -> Rocket<Build> {
    server::build_server(pool)
}
