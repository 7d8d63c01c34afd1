use super::cli_session::session_loop;
use super::cli_units::print_unit_tables;
use crate::Calculators::registry::{CalculatorKind, Category};
use crate::settings::DisplaySettings;
use std::io::{self, BufRead, Write};

/// Line-oriented terminal: reads commands from `input` and writes everything to `out`.
/// End of input ends every menu, so piping a script in works as well as typing.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    pub out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// prints `prompt` and returns the next line, `None` at end of input
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "\x1b[36m{}\x1b[0m", prompt)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// runs the menu on stdin/stdout
pub fn run_interactive_menu(settings: &DisplaySettings) -> io::Result<()> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    run_menu(&mut console, settings)
}

pub fn run_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: &DisplaySettings,
) -> io::Result<()> {
    loop {
        show_main_menu(&mut console.out)?;
        let Some(choice) = console.ask("Enter your choice: ")? else {
            break;
        };
        match choice.as_str() {
            "1" => category_menu(console, Category::Converter, settings)?,
            "2" => category_menu(console, Category::Chemistry, settings)?,
            "3" => category_menu(console, Category::Biology, settings)?,
            "4" => print_unit_tables(&mut console.out)?,
            "0" => {
                writeln!(console.out, "Goodbye!")?;
                break;
            }
            _ => writeln!(console.out, "Invalid choice. Please try again.")?,
        }
    }
    Ok(())
}
/* colors
Blue (\x1b[34m) - header
Yellow (\x1b[33m) - menu options
Cyan (\x1b[36m) - prompts
Red (\x1b[31m) - errors
*/
fn show_main_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "\x1b[34m\n LabAssist: unit converters and bench calculators for the lab\n\x1b[0m"
    )?;
    writeln!(out, "\x1b[33m1. Unit converters\x1b[0m")?;
    writeln!(out, "\x1b[33m2. Chemistry calculators\x1b[0m")?;
    writeln!(out, "\x1b[33m3. Biology calculators\x1b[0m")?;
    writeln!(out, "\x1b[33m4. Unit tables\x1b[0m")?;
    writeln!(out, "\x1b[33m0. Exit\x1b[0m")
}

fn category_title(category: Category) -> &'static str {
    match category {
        Category::Converter => "Unit converters",
        Category::Chemistry => "Chemistry calculators",
        Category::Biology => "Biology calculators",
    }
}

fn category_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    category: Category,
    settings: &DisplaySettings,
) -> io::Result<()> {
    let kinds: Vec<CalculatorKind> = CalculatorKind::ALL
        .iter()
        .copied()
        .filter(|kind| kind.category() == category)
        .collect();
    loop {
        writeln!(console.out, "\n=== {} ===", category_title(category))?;
        for (i, kind) in kinds.iter().enumerate() {
            writeln!(console.out, "{}. {}", i + 1, kind.title())?;
        }
        writeln!(console.out, "0. Back to main menu")?;
        let Some(choice) = console.ask("Enter your choice: ")? else {
            break;
        };
        if choice == "0" {
            break;
        }
        let selected = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| kinds.get(i).copied());
        match selected {
            Some(kind) => session_loop(console, kind, settings)?,
            None => writeln!(console.out, "Invalid choice. Please try again.")?,
        }
    }
    Ok(())
}
