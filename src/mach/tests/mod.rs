use crate::mach::{Event, Runtime};


fn run(runtime: &mut Runtime) -> String {
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
            Event::Menu => s.push_str("<menu>\n"),
        }
    }
    s
}
