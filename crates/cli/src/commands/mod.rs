mod info;
mod run;

pub use info::Info;
pub use run::Run;
