extern crate ansi_term;
extern crate linefeed;
use crate::mach::{Event, Runtime};
use ansi_term::Style;
use linefeed::{Interface, ReadResult, Signal};
use std::io;

pub const MENU_WIDTH: usize = 40;
const TITLE: &str = "ClaudiaCalc v2.0";
const COMMANDS: [(&str, &str); 9] = [
    ("+", "Add"),
    ("-", "Subtract"),
    ("*", "Multiply"),
    ("/", "Divide"),
    ("a-d", "Enter a number or string for A,B,C,D"),
    ("1-4", "Clear register A,B,C,D"),
    ("m", "Prints the menu"),
    ("p", "Prints the registers"),
    ("q", "Quits the app"),
];

#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Show the menu before the first prompt.
    pub menu: bool,
    /// No ANSI styling.
    pub plain: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            menu: true,
            plain: false,
        }
    }
}

pub fn main(options: Options) {
    if let Err(error) = main_loop(options) {
        eprintln!("{}", error);
    }
}

fn main_loop(options: Options) -> io::Result<()> {
    let mut runtime = Runtime::default();
    let command = Interface::new("ClaudiaCalc")?;
    command.set_prompt("Enter a command: ")?;
    command.set_report_signal(Signal::Interrupt, true);
    let input = Interface::new("Input")?;
    input.set_report_signal(Signal::Interrupt, true);

    if options.menu {
        command.write_fmt(format_args!("{}", menu(options.plain)))?;
    }
    loop {
        match runtime.execute() {
            Event::Stopped => match command.read_line()? {
                ReadResult::Input(string) => {
                    if runtime.enter(&string) {
                        command.add_history_unique(string);
                    }
                }
                ReadResult::Signal(_) | ReadResult::Eof => break,
            },
            Event::Input(prompt) => {
                input.set_prompt(&prompt)?;
                match input.read_line()? {
                    ReadResult::Input(string) => {
                        if runtime.enter(&string) {
                            input.add_history_unique(string);
                        }
                    }
                    ReadResult::Signal(Signal::Interrupt) => {
                        input.set_buffer("")?;
                        runtime.interrupt();
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                }
            }
            Event::Print(s) => {
                command.write_fmt(format_args!("{}", s))?;
            }
            Event::Errors(errors) => {
                for error in errors.iter() {
                    let message = format!("Error: {}", error);
                    command.write_fmt(format_args!("{}\n", bold(&message, options.plain)))?;
                }
            }
            Event::Menu => {
                command.write_fmt(format_args!("{}", menu(options.plain)))?;
            }
            Event::Quit => break,
        }
    }
    Ok(())
}

fn bold(s: &str, plain: bool) -> String {
    if plain {
        s.to_string()
    } else {
        Style::new().bold().paint(s).to_string()
    }
}

pub fn menu(plain: bool) -> String {
    let line = "-".repeat(MENU_WIDTH);
    let title = format!("{:^width$}", TITLE, width = MENU_WIDTH);
    let mut s = format!("{}\n{}\n{}\n", line, bold(&title, plain), line);
    for (keys, text) in COMMANDS.iter() {
        s.push_str(&format!("{}\t{}\n", keys, text));
    }
    s.push_str(&line);
    s.push('\n');
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_menu() {
        let menu = menu(true);
        let lines: Vec<&str> = menu.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "-".repeat(MENU_WIDTH));
        assert_eq!(lines[1].trim(), TITLE);
        assert_eq!(lines[1].len(), MENU_WIDTH);
        assert_eq!(lines[3], "+\tAdd");
        assert_eq!(lines[11], "q\tQuits the app");
        assert_eq!(lines[12], lines[0]);
    }

    #[test]
    fn test_styled_menu_keeps_text() {
        assert!(menu(false).contains(TITLE));
        assert_ne!(menu(false), menu(true));
    }
}
