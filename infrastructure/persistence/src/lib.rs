pub mod client;
pub mod db;
