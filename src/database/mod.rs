use crate::database::error::DatabaseError;
use crate::database::error::DatabaseError::{ConnectionFailed, MissingDatabaseUrl};
use crate::database::migrations::run_migrations;
use crate::tools::env_args::retrieve_arg_value;
use crate::tools::log_error_and_return;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::{Connection, SqliteConnection};
use std::env;

pub mod dao;
pub(crate) mod error;
mod migrations;
mod model;
mod schema;

const DATABASE_URL_ARG: &str = "--database-url";
const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Build the process-wide connection pool and bring the schema up to date.
/// Called once at startup; a database that can't be reached here aborts the
/// server.
pub fn init_pool() -> Result<DbPool, DatabaseError> {
    let database_url = get_database_url()?;

    let mut connection = SqliteConnection::establish(&database_url)
        .map_err(log_error_and_return(ConnectionFailed))?;
    run_migrations(&mut connection)?;

    Pool::builder()
        .build(ConnectionManager::new(database_url))
        .map_err(log_error_and_return(ConnectionFailed))
}

fn get_database_url() -> Result<String, DatabaseError> {
    retrieve_arg_value(DATABASE_URL_ARG)
        .or_else(|| env::var(DATABASE_URL_ENV_VAR).ok())
        .ok_or(MissingDatabaseUrl)
}

#[cfg(test)]
pub fn with_temp_database<F, T>(test: F) -> T
where
    F: FnOnce(DbPool) -> T,
{
    use crate::tools::env_args::with_env_args;
    use crate::tools::test::tests::temp_dir;

    let database_url = temp_dir().join("database.db").to_str().unwrap().to_owned();
    with_env_args(vec![format!("{DATABASE_URL_ARG}={database_url}")], || {
        let pool = init_pool().unwrap();
        test(pool)
    })
}
