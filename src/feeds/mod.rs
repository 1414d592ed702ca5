pub mod worker_api;
