pub mod bad_count;
pub mod catch_all;
pub mod get_data;
pub mod health;
pub mod query_run;
pub mod write_blob;

pub use bad_count::bad_count_handler;
pub use catch_all::catch_all_handler;
pub use get_data::get_data_handler;
pub use health::health_handler;
pub use query_run::query_run_handler;
pub use write_blob::write_blob_handler;
