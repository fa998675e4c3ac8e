//! The command language: loading program text and running it in order.

pub mod command;
pub mod interpreter;
pub mod loading;

pub use command::{Command, Parameter, Program};
pub use interpreter::{GoalOutcome, Interpreter, Settings};
pub use loading::parse_program;
