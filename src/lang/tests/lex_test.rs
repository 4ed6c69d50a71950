use super::*;

#[test]
fn test_register_commands() {
    assert_eq!(lex("a"), Ok((Command::Set(Register::A), "")));
    assert_eq!(lex("D"), Ok((Command::Set(Register::D), "")));
    assert_eq!(lex("1"), Ok((Command::Clear(Register::A), "")));
    assert_eq!(lex("4"), Ok((Command::Clear(Register::D), "")));
}

#[test]
fn test_operator_commands() {
    assert_eq!(lex("+"), Ok((Command::Apply(Operator::Plus), "")));
    assert_eq!(lex("-"), Ok((Command::Apply(Operator::Minus), "")));
    assert_eq!(lex("*"), Ok((Command::Apply(Operator::Multiply), "")));
    assert_eq!(lex("/ a b"), Ok((Command::Apply(Operator::Divide), " a b")));
}

#[test]
fn test_only_first_char_matters() {
    assert_eq!(lex("  print"), Ok((Command::Print, "")));
    assert_eq!(lex("Menu please"), Ok((Command::Menu, " please")));
    assert_eq!(lex("quit"), Ok((Command::Quit, "")));
    assert_eq!(lex("apple"), Ok((Command::Set(Register::A), "")));
}

#[test]
fn test_bad_commands() {
    assert_eq!(lex("").unwrap_err().code(), ErrorCode::EmptyCommand);
    assert_eq!(lex("   ").unwrap_err().code(), ErrorCode::EmptyCommand);
    let error = lex("Xyz").unwrap_err();
    assert_eq!(error.code(), ErrorCode::UnknownCommand);
    assert_eq!(error.to_string(), "Unknown command 'x'");
    assert_eq!(lex("5").unwrap_err().code(), ErrorCode::UnknownCommand);
}

#[test]
fn test_operands() {
    assert_eq!(parse_operands("A B"), Ok((Register::A, Register::B)));
    assert_eq!(parse_operands("cd"), Ok((Register::C, Register::D)));
    assert_eq!(parse_operands("  b   a  trailing"), Ok((Register::B, Register::A)));
    assert_eq!(parse_operands("a").unwrap_err().code(), ErrorCode::InvalidInput);
    assert_eq!(parse_operands("").unwrap_err().code(), ErrorCode::InvalidInput);
    assert_eq!(parse_operands("a x").unwrap_err().code(), ErrorCode::InvalidRegister);
    assert_eq!(parse_operands("e a").unwrap_err().code(), ErrorCode::InvalidRegister);
}
