pub mod cli_main;
pub mod cli_parameters;
