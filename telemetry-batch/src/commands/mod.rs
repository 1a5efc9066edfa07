pub mod import;
pub mod run;
