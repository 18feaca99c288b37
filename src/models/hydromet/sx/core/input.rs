mod efficiencies;
mod electrolyte;
mod pls;
mod process;

pub use efficiencies::StageEfficiencies;
pub use electrolyte::Electrolyte;
pub use pls::PlsFeed;
pub use process::ProcessInputs;
