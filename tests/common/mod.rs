use calc::mach::{Event, Runtime};

/// Drains events into the transcript the terminal would show, stopping
/// at the next prompt.
pub fn exec(runtime: &mut Runtime) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute() {
            Event::Stopped | Event::Quit => break,
            Event::Input(prompt) => {
                s.push_str(&prompt);
                break;
            }
            Event::Errors(errors) => {
                for error in errors.iter() {
                    s.push_str(&format!("Error: {}\n", error));
                }
            }
            Event::Print(ps) => s.push_str(&ps),
            Event::Menu => s.push_str("MENU\n"),
        }
    }
    s
}

/// Enters every line in turn and returns the whole transcript.
#[allow(dead_code)]
pub fn session(runtime: &mut Runtime, lines: &[&str]) -> String {
    let mut s = String::new();
    for line in lines {
        runtime.enter(line);
        s.push_str(&exec(runtime));
    }
    s
}
