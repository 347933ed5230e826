//! Narration produced while a match runs.
//!
//! The match records events as it goes; callers drain and print them.
//! Names are captured as identifiers (styled name plus team) at the moment
//! the event happened.

use serde::{Deserialize, Serialize};

use crate::style::strip_ansi;

/// Why a match could not start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StallReason {
    /// Fewer than two contestants alive.
    TooFewLiving,
    /// Nobody alive may attack anybody else alive.
    AllFriendly,
}

impl std::fmt::Display for StallReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StallReason::TooFewLiving => f.write_str("Too few living contestants."),
            StallReason::AllFriendly => f.write_str("All living contestants are friendly."),
        }
    }
}

/// One line of match narration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// The match finished at initialization without a fight.
    NotStarted { reason: StallReason },
    /// One contestant attacked another.
    Attacked { attacker: String, defender: String },
    /// The defender of the preceding attack died.
    Died { name: String },
    /// The match just finished. Empty `winners` means nobody survived.
    Finished { winners: Vec<String> },
    /// A turn was requested after the match had finished.
    AlreadyOver { winners: Vec<String> },
}

impl MatchEvent {
    /// Render without ANSI styling.
    #[must_use]
    pub fn plain(&self) -> String {
        strip_ansi(&self.to_string())
    }
}

fn write_winners(f: &mut std::fmt::Formatter<'_>, winners: &[String]) -> std::fmt::Result {
    match winners {
        [] => f.write_str("No winner."),
        [only] => write!(f, "The winner is: {only}"),
        many => {
            f.write_str("The winners are:")?;
            for winner in many {
                write!(f, "\n\t{winner}")?;
            }
            Ok(())
        }
    }
}

impl std::fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchEvent::NotStarted { reason } => write!(f, "Cannot start match: {reason}"),
            MatchEvent::Attacked { attacker, defender } => {
                write!(f, "{attacker}\n-has attacked-\n{defender}\n")
            }
            MatchEvent::Died { name } => write!(f, "{name} has died.\n"),
            MatchEvent::Finished { winners } => write_winners(f, winners),
            MatchEvent::AlreadyOver { winners } => {
                f.write_str("Match is already over. ")?;
                write_winners(f, winners)
            }
        }
    }
}
