pub mod greeter;
pub mod interpreter_info;
pub mod personal_data;

pub use greeter::Greeter;
pub use interpreter_info::InterpreterInfo;
pub use personal_data::PersonalData;
