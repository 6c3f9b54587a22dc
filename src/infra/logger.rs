use crossterm::{
    ExecutableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};
use env_logger::Builder;
use log::{Level, debug};
use std::io::{self, BufRead, Write};

pub const LOG_LEVEL_ENV: &str = "PROJECT_STRUCTURE_LOG_LEVEL";

pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    }
}

pub fn setup_logger(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let env = env_logger::Env::default().filter_or(LOG_LEVEL_ENV, level_for_verbosity(verbosity));

    Builder::from_env(env)
        .format(|buf, record| {
            let level_color = match record.level() {
                Level::Error => "31", // Red
                Level::Warn => "33",  // Yellow
                Level::Info => "32",  // Green
                Level::Debug => "36", // Cyan
                Level::Trace => "35", // Magenta
            };

            writeln!(
                buf,
                "\x1B[{}m[{}]\x1B[0m [{}] {}",
                level_color,
                record.level(),
                buf.timestamp(),
                record.args()
            )
        })
        .format_timestamp_secs()
        .try_init()
}

/// Asks the operator for the project root on `output` and reads one line from `input`.
///
/// Only the line ending is stripped. An empty answer is an error.
pub fn prompt_root_dir(mut input: impl BufRead, mut output: impl Write) -> anyhow::Result<String> {
    write!(output, "Enter your project's root directory: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim_end_matches(['\n', '\r']).to_string();

    if answer.is_empty() {
        anyhow::bail!("no project root directory was given");
    }

    debug!("Operator entered root directory: {}", answer);
    Ok(answer)
}

/// Prompts on stderr so a document written to stdout stays clean.
pub fn prompt_root_dir_interactive() -> anyhow::Result<String> {
    prompt_root_dir_colored(io::stdin().lock(), io::stderr())
}

fn prompt_root_dir_colored(input: impl BufRead, mut output: impl Write) -> anyhow::Result<String> {
    output.execute(SetForegroundColor(Color::Cyan))?;
    let answer = prompt_root_dir(input, &mut output);
    output.execute(ResetColor)?;
    answer
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::Once;

    static INIT: Once = Once::new();

    #[test]
    fn test_setup_logger() {
        INIT.call_once(|| {
            assert!(setup_logger(0).is_ok());
        });
    }

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), "error");
        assert_eq!(level_for_verbosity(1), "warn");
        assert_eq!(level_for_verbosity(2), "info");
        assert_eq!(level_for_verbosity(3), "debug");
        assert_eq!(level_for_verbosity(9), "debug");
    }

    #[test]
    fn test_prompt_root_dir() {
        let mut shown = Vec::new();
        let answer = prompt_root_dir(Cursor::new("my project/\r\n"), &mut shown).unwrap();

        assert_eq!(answer, "my project/");
        assert_eq!(
            String::from_utf8(shown).unwrap(),
            "Enter your project's root directory: "
        );
    }

    #[test]
    fn test_colored_prompt_stays_on_its_own_writer() {
        let mut shown = Vec::new();
        let answer = prompt_root_dir_colored(Cursor::new("proj\n"), &mut shown).unwrap();
        let shown = String::from_utf8(shown).unwrap();

        assert_eq!(answer, "proj");
        assert!(shown.contains("Enter your project's root directory: "));
        assert!(shown.starts_with('\u{1b}'));
        assert!(shown.ends_with("\u{1b}[0m"));
    }

    #[test]
    fn test_prompt_root_dir_empty_answer() {
        let mut shown = Vec::new();

        assert!(prompt_root_dir(Cursor::new("\n"), &mut shown).is_err());
        assert!(prompt_root_dir(Cursor::new(""), &mut shown).is_err());
    }
}
