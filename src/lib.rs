pub mod health;
pub mod migrations;
pub mod shell;
pub mod utils;
