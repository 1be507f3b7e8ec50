pub mod clients_controller;
