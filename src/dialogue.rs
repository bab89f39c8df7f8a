//! Turn-taking protocol between the product holder P and the sum holder S.
//!
//! Each utterance maps onto one engine operation; the driver only reads lines,
//! feeds them through [`Dialogue::respond`] and prints the [`Reply`].

use crate::compute::{Engine, EngineError};
use crate::store::Pair;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    /// Knows the product `a·b`. Speaks first.
    P,
    /// Knows the sum `a+b`.
    S,
}

impl Speaker {
    pub fn other(self) -> Self {
        match self {
            Speaker::P => Speaker::S,
            Speaker::S => Speaker::P,
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::P => f.write_str("P"),
            Speaker::S => f.write_str("S"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speech {
    Know,
    DontKnow,
    Stop,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognised utterance '{0}', expected \"know\", \"don't know\" or \"stop\"")]
pub struct UnknownSpeech(pub String);

impl FromStr for Speech {
    type Err = UnknownSpeech;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('’', "'");
        let phrase = normalized.strip_prefix("i ").unwrap_or(normalized.as_str()).trim_start();
        match phrase {
            "know" | "знаю" => Ok(Speech::Know),
            "don't know" | "dont know" | "do not know" | "не знаю" => Ok(Speech::DontKnow),
            "stop" | "стоп" => Ok(Speech::Stop),
            _ => Err(UnknownSpeech(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The speaker knows the pair; these are the pairs it can be.
    Pairs(Vec<Pair>),
    /// The speaker does not know; candidates were eliminated.
    Noted,
    Stopped,
}

pub struct Dialogue<'a> {
    engine: &'a Engine,
    turn: Speaker,
}

impl<'a> Dialogue<'a> {
    pub fn new(engine: &'a Engine) -> Self {
        Self { engine, turn: Speaker::P }
    }

    /// Whose turn it is to speak.
    pub fn turn(&self) -> Speaker { self.turn }

    pub fn respond(&mut self, speech: Speech) -> Result<Reply, EngineError> {
        let reply = match (speech, self.turn) {
            (Speech::Stop, _) => return Ok(Reply::Stopped),
            (Speech::Know, Speaker::P) => Reply::Pairs(self.engine.pairs_by_prods()?),
            (Speech::Know, Speaker::S) => Reply::Pairs(self.engine.pairs_by_sums()?),
            (Speech::DontKnow, Speaker::P) => {
                self.engine.filter_non_trivial_prods()?;
                Reply::Noted
            }
            (Speech::DontKnow, Speaker::S) => {
                self.engine.filter_non_trivial_sums()?;
                Reply::Noted
            }
        };
        self.turn = self.turn.other();
        Ok(reply)
    }
}

/// Formats resolved pairs for the terminal, as `[(a, b), ...]` or a JSON array.
pub fn render_pairs(pairs: &[Pair], json: bool) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string(pairs);
    }
    let items: Vec<String> = pairs.iter().map(Pair::to_string).collect();
    Ok(format!("[{}]", items.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("know", Speech::Know)]
    #[case("  I know\n", Speech::Know)]
    #[case("Знаю", Speech::Know)]
    #[case("don't know", Speech::DontKnow)]
    #[case("I don’t know", Speech::DontKnow)]
    #[case("dont know", Speech::DontKnow)]
    #[case("не знаю", Speech::DontKnow)]
    #[case("STOP", Speech::Stop)]
    #[case("стоп", Speech::Stop)]
    fn test_utterances_are_recognised(#[case] input: &str, #[case] expected: Speech) {
        assert_eq!(input.parse::<Speech>(), Ok(expected));
    }

    #[rstest]
    #[case("maybe")]
    #[case("")]
    #[case("know it")]
    fn test_unknown_utterances_are_rejected(#[case] input: &str) {
        let err = input.parse::<Speech>().unwrap_err();
        assert_eq!(err, UnknownSpeech(input.to_string()));
        assert!(err.to_string().contains("expected"));
    }

    #[test]
    fn test_turns_alternate_and_route_to_engine() {
        let engine = Engine::new(4).unwrap();
        let mut dialogue = Dialogue::new(&engine);

        assert_eq!(dialogue.turn(), Speaker::P);
        assert_eq!(dialogue.respond(Speech::DontKnow).unwrap(), Reply::Noted);
        assert_eq!(dialogue.turn(), Speaker::S);

        let reply = dialogue.respond(Speech::Know).unwrap();
        assert_eq!(reply, Reply::Pairs(vec![Pair::new(2, 2), Pair::new(1, 4)]));
        assert_eq!(dialogue.turn(), Speaker::P);
    }

    #[test]
    fn test_stop_keeps_the_turn() {
        let engine = Engine::new(3).unwrap();
        let mut dialogue = Dialogue::new(&engine);
        assert_eq!(dialogue.respond(Speech::Stop).unwrap(), Reply::Stopped);
        assert_eq!(dialogue.turn(), Speaker::P);
        assert_eq!(engine.eliminated_count().unwrap(), 0);
    }

    #[test]
    fn test_render_pairs() {
        let pairs = [Pair::new(2, 2), Pair::new(1, 4)];
        assert_eq!(render_pairs(&pairs, false).unwrap(), "[(2, 2), (1, 4)]");
        assert_eq!(render_pairs(&[], false).unwrap(), "[]");
        assert_eq!(
            render_pairs(&pairs, true).unwrap(),
            r#"[{"a":2,"b":2},{"a":1,"b":4}]"#
        );
    }
}
