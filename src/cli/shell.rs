use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing::error;

use crate::{session::Session, storage::KeyValueStore};

use super::{
    execute,
    render::{self, render_view, View},
    Commands,
};

#[derive(Parser, Debug)]
#[command(no_binary_name = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Commands,
}

/// Splits a line the way a POSIX shell would, so quoted paths and dates stay one argument.
/// Unbalanced quotes give `None`.
fn shell_words(line: &str) -> Option<Vec<String>> {
    shlex::split(line)
}

fn is_exit(word: &str) -> bool {
    matches!(word, "exit" | "quit")
}

/// Interactive loop accepting the same commands as the CLI. The latest notice is shown above
/// the prompt until it expires.
pub async fn run_shell<S: KeyValueStore>(session: &mut Session<S>) -> Result<()> {
    println!("{}", render_view(View::Status, session.manager()));
    println!("Type a command, `help` for the list or `exit` to leave.");

    let stdin = io::stdin();
    loop {
        if let Some(notice) = session.notice() {
            println!("{}", render::notice(notice));
        }
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let Some(words) = shell_words(&line) else {
            println!("Unbalanced quotes, nothing was run.");
            continue;
        };
        match words.first() {
            None => continue,
            Some(word) if is_exit(word) => break,
            Some(_) => {}
        }

        match ShellLine::try_parse_from(words) {
            Ok(ShellLine { command }) => {
                if let Err(e) = execute(session, command).await {
                    error!("Command failed {e:?}");
                    println!("{e}");
                }
            }
            Err(e) => e.print()?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::{is_exit, shell_words, ShellLine};
    use crate::cli::Commands;

    #[test]
    fn test_shell_lines_parse_without_binary_name() {
        let line = ShellLine::try_parse_from(["water", "4"]).unwrap();
        assert!(matches!(line.command, Commands::Water { cups: 4 }));

        let line = ShellLine::try_parse_from(["check", "diet"]).unwrap();
        assert!(matches!(line.command, Commands::Check { undo: false, .. }));

        assert!(ShellLine::try_parse_from(["dance"]).is_err());
    }

    #[test]
    fn test_exit_words() {
        assert!(is_exit("exit"));
        assert!(is_exit("quit"));
        assert!(!is_exit("status"));
    }

    #[test]
    fn test_quoted_arguments_stay_whole() {
        let words = shell_words("photo \"/tmp/my photo.jpg\"\n").unwrap();
        assert_eq!(words, ["photo", "/tmp/my photo.jpg"]);
        let line = ShellLine::try_parse_from(words).unwrap();
        assert!(matches!(
            line.command,
            Commands::Photo { ref path } if path == &PathBuf::from("/tmp/my photo.jpg")
        ));

        let words = shell_words("start --date 'last friday' -w 92.5").unwrap();
        assert_eq!(words, ["start", "--date", "last friday", "-w", "92.5"]);
        let line = ShellLine::try_parse_from(words).unwrap();
        assert!(matches!(
            line.command,
            Commands::Start { date: Some(ref date), .. } if date == "last friday"
        ));
    }

    #[test]
    fn test_unbalanced_quotes_are_refused() {
        assert_eq!(shell_words("photo \"/tmp/my photo.jpg"), None);
        assert_eq!(shell_words("   \n"), Some(vec![]));
    }
}
