use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    ExactTerm,
    WordInTerm,
}

pub fn match_tier(truth: &str, output: &ClassifierOutput) -> Option<MatchTier> {
    if output.terms().any(|term| term == truth) {
        return Some(MatchTier::ExactTerm);
    }

    output
        .terms()
        .any(|term| term.split(' ').any(|word| word == truth))
        .then_some(MatchTier::WordInTerm)
}
