pub mod assets;
pub mod constants;
pub mod logging;
pub mod physics;
pub mod rendering;
pub mod storage;
pub mod tiles;
