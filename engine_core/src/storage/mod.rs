pub mod engine_config;
pub mod map_storage;
pub mod path_utils;
