#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    detail: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).detail($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            detail: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn detail<S: Into<String>>(&self, detail: S) -> Error {
        debug_assert!(self.detail.is_empty());
        Error {
            code: self.code,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidRegister,
    DivisionByZero,
    InvalidOperandCombination,
    InvalidStringMultiplication,
    StringDivisionUnsupported,
    StringTooLong,
    EmptyCommand,
    EmptyInput,
    InvalidInput,
    UnknownCommand,
}

impl ErrorCode {
    fn message(self) -> &'static str {
        use ErrorCode::*;
        match self {
            InvalidRegister => "Invalid registers",
            DivisionByZero => "Division by zero",
            InvalidOperandCombination => "Invalid operation between string and number",
            InvalidStringMultiplication => "Invalid string multiplication",
            StringDivisionUnsupported => "Cannot divide strings",
            StringTooLong => "String too long",
            EmptyCommand => "Empty command",
            EmptyInput => "Empty input",
            InvalidInput => "Invalid input",
            UnknownCommand => "Unknown command",
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {:?}: {} }}", self.code, self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.detail.is_empty() {
            write!(f, "{}", self.code.message())
        } else {
            write!(f, "{} {}", self.code.message(), self.detail)
        }
    }
}

impl std::error::Error for Error {}
