pub mod db;
pub mod logic;
