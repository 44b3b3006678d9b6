use std::io::{self, Write};

use tracing::warn;

use crate::session::confirm::Confirmer;

/// Asks on the terminal. Anything other than an explicit yes counts as a no.
pub struct StdinConfirmer;

impl Confirmer for StdinConfirmer {
    fn confirm(&mut self, question: &str) -> bool {
        print!("{question} [y/N] ");
        if let Err(e) = io::stdout().flush() {
            warn!("Failed to show confirmation {e:?}");
            return false;
        }
        let mut answer = String::new();
        match io::stdin().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                warn!("Failed to read confirmation {e:?}");
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
