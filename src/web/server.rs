use crate::database::DbPool;
use crate::tools::env_args::retrieve_arg_value;
use crate::web::api::clients_controller;
use rocket::{Build, Rocket};

const PORT_ENV_ARG: &str = "--port";
const DEFAULT_PORT: i32 = 8000;

pub fn build_server(pool: DbPool) -> Rocket<Build> {
    rocket::build()
        .configure(rocket::Config::figment().merge(("port", get_port())))
        .manage(pool)
        .mount(
            "/",
            routes![
                clients_controller::obtain_client,
                clients_controller::obtain_client_without_document,
            ],
        )
}

fn get_port() -> i32 {
    retrieve_arg_value(PORT_ENV_ARG)
        .map(|port| port.parse::<i32>().ok())
        .unwrap_or(None)
        .unwrap_or(DEFAULT_PORT)
}
