mod database;
mod tools;
mod web;

#[macro_use]
extern crate rocket;

use log::error;

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let pool = match database::init_pool() {
        Ok(pool) => pool,
        Err(error) => {
            error!("{error:#?}");
            panic!("Initialization failed, aborting.");
        }
    };

    web::build_server(pool)
}
