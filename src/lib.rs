pub mod game_filter;
pub mod model_config;
pub mod paths;
pub mod qc_assembler;
pub mod surfaceprop_catalog;
