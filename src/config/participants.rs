use crate::utils::error::{RecommendError, Result};
use std::io::{BufRead, Write};

const NAMES_PROMPT: &str =
    "Please provide the names of the attendee (ex. Gregory Hill, Mathew Brown, Sophia May, etc) : ";
const MORE_PROMPT: &str = "Are there any other participants? Yes/No ";

/// Splits a comma-delimited list of names, dropping blank entries.
pub fn parse_participant_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Asks for names until the user answers "no" or input ends.
pub fn prompt_participants<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Vec<String>> {
    let mut participants = Vec::new();

    loop {
        write!(output, "{}", NAMES_PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        participants.extend(parse_participant_list(&line));

        write!(output, "{}", MORE_PROMPT)?;
        output.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 || answer.trim().eq_ignore_ascii_case("no") {
            break;
        }
    }

    Ok(participants)
}

pub fn require_participants(participants: Vec<String>) -> Result<Vec<String>> {
    if participants.is_empty() {
        return Err(RecommendError::NoParticipants);
    }
    tracing::info!(
        "Thank you for providing the names of the participants: {:?}",
        participants
    );
    Ok(participants)
}
