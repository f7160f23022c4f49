pub mod app_data;
pub mod config;
pub mod error;
pub mod game;
pub mod io;
pub mod league;
pub mod names;
pub mod person;
pub mod processor;
pub mod random;
pub mod schedule;
pub mod season;
pub mod team;
pub mod time;
pub mod types;
