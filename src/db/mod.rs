pub mod connection;
pub mod job_post_repository;
pub mod migrations;
pub mod models;
