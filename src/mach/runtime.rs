use super::{Operation, Val, Var};
use crate::error;
use crate::lang::{lex, parse_literal, parse_operands, Command, Error, Operator, Register};
use std::collections::VecDeque;
use tracing::debug;

/// ## Calculator session
///
/// Lines go in through `enter`, output comes back out of `execute` as
/// events. One line is fully handled before the next is accepted.

#[derive(Debug)]
pub enum Event {
    Stopped,
    Input(String),
    Print(String),
    Errors(Vec<Error>),
    Menu,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Command,
    Assign(Register),
    Operands(Operator),
    Quit,
}

#[derive(Debug)]
pub struct Runtime {
    var: Var,
    state: State,
    events: VecDeque<Event>,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime {
            var: Var::default(),
            state: State::Command,
            events: VecDeque::new(),
        }
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn registers(&self) -> &Var {
        &self.var
    }

    /// Feeds one line of input. Returns true when the line is worth
    /// keeping in history.
    pub fn enter(&mut self, line: &str) -> bool {
        match self.state {
            State::Command => self.enter_command(line),
            State::Assign(register) => {
                self.state = State::Command;
                self.assign(register, line);
            }
            State::Operands(op) => {
                self.state = State::Command;
                self.operate(op, line);
            }
            State::Quit => return false,
        }
        !line.trim().is_empty()
    }

    /// Next thing for the terminal to do.
    pub fn execute(&mut self) -> Event {
        if let Some(event) = self.events.pop_front() {
            return event;
        }
        match self.state {
            State::Command => Event::Stopped,
            State::Assign(register) => Event::Input(format!(
                "Enter a number or string for register {}: ",
                register
            )),
            State::Operands(_) => Event::Input("Enter two registers (e.g., A B): ".to_string()),
            State::Quit => Event::Quit,
        }
    }

    /// Abandons a pending operand prompt.
    pub fn interrupt(&mut self) {
        if let State::Assign(_) | State::Operands(_) = self.state {
            debug!(state = ?self.state, "interrupted");
            self.state = State::Command;
        }
    }

    fn enter_command(&mut self, line: &str) {
        let (command, rest) = match lex(line) {
            Ok(lexed) => lexed,
            Err(error) => return self.error(error),
        };
        debug!(?command, "command");
        match command {
            Command::Set(register) => self.state = State::Assign(register),
            Command::Apply(op) => {
                if rest.trim().is_empty() {
                    self.state = State::Operands(op);
                } else {
                    self.operate(op, rest);
                }
            }
            Command::Clear(register) => {
                self.var.clear(register);
                self.print(format!("Cleared register {}\n", register));
            }
            Command::Menu => self.events.push_back(Event::Menu),
            Command::Print => {
                let listing: String = self
                    .var
                    .iter()
                    .map(|(register, val)| format!("Register {}: {}\n", register, val))
                    .collect();
                self.print(listing);
            }
            Command::Quit => self.state = State::Quit,
        }
    }

    fn assign(&mut self, register: Register, line: &str) {
        if line.is_empty() {
            return self.error(error!(EmptyInput));
        }
        let value: Val = parse_literal(line);
        self.print(format!("Register {} set to {}\n", register, value));
        self.var.store(register, value);
    }

    fn operate(&mut self, op: Operator, operands: &str) {
        let (lhs, rhs) = match parse_operands(operands) {
            Ok(pair) => pair,
            Err(error) => return self.error(error),
        };
        self.print(format!("{} {} {} = ", lhs, op, rhs));
        match Operation::apply(op, self.var.fetch(lhs), self.var.fetch(rhs)) {
            Ok(s) => self.print(s + "\n"),
            Err(error) => self.error(error),
        }
    }

    fn print(&mut self, s: String) {
        self.events.push_back(Event::Print(s));
    }

    fn error(&mut self, error: Error) {
        debug!(%error, "command failed");
        self.events.push_back(Event::Errors(vec![error]));
    }
}
