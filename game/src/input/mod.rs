pub mod input_snapshot;
