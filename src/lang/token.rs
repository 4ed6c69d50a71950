pub use super::ident::Register;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    Set(Register),
    Apply(Operator),
    Clear(Register),
    Menu,
    Print,
    Quit,
}

impl Command {
    pub fn from_char(ch: char) -> Option<Command> {
        use Command::*;
        if let Some(register) = Register::from_char(ch) {
            return Some(Set(register));
        }
        if let Some(op) = Operator::from_char(ch) {
            return Some(Apply(op));
        }
        match ch.to_ascii_lowercase() {
            '1' => Some(Clear(Register::A)),
            '2' => Some(Clear(Register::B)),
            '3' => Some(Clear(Register::C)),
            '4' => Some(Clear(Register::D)),
            'm' => Some(Menu),
            'p' => Some(Print),
            'q' => Some(Quit),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        use Operator::*;
        match ch {
            '+' => Some(Plus),
            '-' => Some(Minus),
            '*' => Some(Multiply),
            '/' => Some(Divide),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
        }
    }
}
