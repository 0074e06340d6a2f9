//! Ordered intent matchers.
//!
//! Each matcher is a predicate over the tokenized message plus the match
//! context. The classifier runs them by ascending priority and the first one
//! to return an intent wins.

use std::iter;

use facilitator_types::{ClassifierThresholds, ConversationState, Intent};

use super::Utterance;
use crate::lexicon::{Lexicon, ListKind};

/// Everything a matcher may consult besides the message itself.
#[derive(Debug, Clone)]
pub struct MatchContext<'a> {
    pub state: ConversationState,
    pub thresholds: ClassifierThresholds,
    lexicons: Vec<&'a Lexicon>,
}

impl<'a> MatchContext<'a> {
    #[must_use]
    pub fn new(
        state: ConversationState,
        thresholds: ClassifierThresholds,
        lexicons: Vec<&'a Lexicon>,
    ) -> Self {
        Self {
            state,
            thresholds,
            lexicons,
        }
    }

    /// Longest phrase of `kind` matching at `at`, across all bundles.
    #[must_use]
    pub fn longest(&self, kind: ListKind, tokens: &[String], at: usize) -> Option<usize> {
        self.lexicons
            .iter()
            .filter_map(|lexicon| lexicon.list(kind).match_at(tokens, at))
            .max()
    }

    /// Longest phrase of any of `kinds` matching at `at`.
    #[must_use]
    pub fn longest_of(&self, kinds: &[ListKind], tokens: &[String], at: usize) -> Option<usize> {
        kinds
            .iter()
            .filter_map(|&kind| self.longest(kind, tokens, at))
            .max()
    }

    /// Every phrase length of `kind` matching at `at`, across all bundles.
    #[must_use]
    pub fn lengths(&self, kind: ListKind, tokens: &[String], at: usize) -> Vec<usize> {
        let mut lengths: Vec<usize> = self
            .lexicons
            .iter()
            .flat_map(|lexicon| lexicon.list(kind).matches_at(tokens, at))
            .collect();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        lengths.dedup();
        lengths
    }

    #[must_use]
    pub fn matches_span(&self, kind: ListKind, tokens: &[String], start: usize, end: usize) -> bool {
        self.lexicons
            .iter()
            .any(|lexicon| lexicon.list(kind).matches_span(tokens, start, end))
    }

    /// First `(start, len)` where a phrase of `kind` occurs.
    #[must_use]
    pub fn find(&self, kind: ListKind, tokens: &[String]) -> Option<(usize, usize)> {
        (0..tokens.len()).find_map(|i| self.longest(kind, tokens, i).map(|len| (i, len)))
    }

    /// Longest uncertainty phrase at `at`. Hedges and fillers may interrupt
    /// it ("not really sure", "i honestly have no idea").
    #[must_use]
    pub fn uncertainty_at(&self, tokens: &[String], at: usize) -> Option<usize> {
        self.uncertainty_with_gaps(tokens, at, &self.gaps(tokens))
    }

    /// First uncertainty phrase as `(start, len)`, interruptions allowed.
    #[must_use]
    pub fn find_uncertainty(&self, tokens: &[String]) -> Option<(usize, usize)> {
        let gaps = self.gaps(tokens);
        (0..tokens.len())
            .find_map(|i| self.uncertainty_with_gaps(tokens, i, &gaps).map(|len| (i, len)))
    }

    fn uncertainty_with_gaps(&self, tokens: &[String], at: usize, gaps: &[bool]) -> Option<usize> {
        self.lexicons
            .iter()
            .filter_map(|lexicon| {
                lexicon
                    .list(ListKind::Uncertainty)
                    .match_at_with_gaps(tokens, at, gaps)
            })
            .max()
    }

    /// Tokens covered by a hedge or filler.
    fn gaps(&self, tokens: &[String]) -> Vec<bool> {
        let mut gaps = vec![false; tokens.len()];
        for at in 0..tokens.len() {
            if let Some(len) = self.longest_of(&[ListKind::Hedges, ListKind::Fillers], tokens, at) {
                gaps[at..at + len].fill(true);
            }
        }
        gaps
    }

    /// Whether some clause opens with a phrase of `kind`, directly or after
    /// fillers and request frames ("so, can you give me an example").
    #[must_use]
    pub fn opens_a_clause(&self, kind: ListKind, utterance: &Utterance) -> bool {
        let tokens = utterance.tokens();
        iter::once(0)
            .chain((0..tokens.len()).filter(|&i| utterance.break_after(i)).map(|i| i + 1))
            .filter(|&start| start < tokens.len())
            .any(|start| {
                let opener =
                    self.skip(&[ListKind::Fillers, ListKind::RequestFrames], tokens, start);
                (start..=opener).any(|at| self.longest(kind, tokens, at).is_some())
            })
    }

    #[must_use]
    pub fn contains(&self, kind: ListKind, tokens: &[String]) -> bool {
        self.find(kind, tokens).is_some()
    }

    /// Index of the first token at or after `at` not covered by `kinds`.
    #[must_use]
    pub fn skip(&self, kinds: &[ListKind], tokens: &[String], mut at: usize) -> usize {
        while let Some(len) = self.longest_of(kinds, tokens, at) {
            at += len;
        }
        at
    }

    /// Whether `tokens` carries at least one word that is not uncertainty,
    /// a hedge, filler, connector, question word, task reference or function
    /// word.
    #[must_use]
    pub fn has_content(&self, tokens: &[String]) -> bool {
        let mut at = 0;
        while at < tokens.len() {
            match self.longest_of(NON_CONTENT, tokens, at) {
                Some(len) => at += len,
                None => return true,
            }
        }
        false
    }
}

const NON_CONTENT: &[ListKind] = &[
    ListKind::Uncertainty,
    ListKind::Hedges,
    ListKind::Fillers,
    ListKind::Connectors,
    ListKind::Interrogatives,
    ListKind::TaskReferences,
    ListKind::FunctionWords,
];

/// One rule of the classifier.
pub trait IntentMatcher: Send + Sync {
    fn name(&self) -> &'static str;

    /// Lower runs first.
    fn priority(&self) -> u16;

    fn applies(&self, utterance: &Utterance, ctx: &MatchContext<'_>) -> Option<Intent>;
}

/// The built-in rule set, in precedence order.
#[must_use]
pub fn default_matchers() -> Vec<Box<dyn IntentMatcher>> {
    vec![
        Box::new(SkipDirective),
        Box::new(ClarificationRequest),
        Box::new(HedgedAnswer),
        Box::new(PureUncertainty),
        Box::new(BareInterrogative),
        Box::new(NegatedClarity),
        Box::new(TaskHelpRequest),
        Box::new(CompletionAnnouncement),
        Box::new(Checkin),
    ]
}

/// "skip", "let's move on", "next please", "can we skip this question?".
///
/// The directive must be the whole first clause once request frames and
/// trailing courtesy are removed, optionally followed by a conversational
/// target. "next week I have a deadline" and "move on from the stress" keep
/// their content words and are not skips.
#[derive(Debug, Clone, Copy)]
pub struct SkipDirective;

impl IntentMatcher for SkipDirective {
    fn name(&self) -> &'static str {
        "skip_directive"
    }

    fn priority(&self) -> u16 {
        10
    }

    fn applies(&self, utterance: &Utterance, ctx: &MatchContext<'_>) -> Option<Intent> {
        let clause = utterance.first_clause();
        let start = ctx.skip(&[ListKind::RequestFrames], clause, 0);

        let mut end = clause.len();
        while let Some(courtesy_start) =
            (start + 1..end).find(|&i| ctx.matches_span(ListKind::CourtesyWords, clause, i, end))
        {
            end = courtesy_start;
        }

        let head = &clause[..end];
        ctx.lengths(ListKind::SkipDirectives, head, start)
            .into_iter()
            .any(|len| {
                let rest = start + len;
                rest == end || ctx.matches_span(ListKind::SkipTargets, head, rest, end)
            })
            .then_some(Intent::Skip)
    }
}

/// Explicit asks to repeat, rephrase or explain.
#[derive(Debug, Clone, Copy)]
pub struct ClarificationRequest;

impl IntentMatcher for ClarificationRequest {
    fn name(&self) -> &'static str {
        "clarification_request"
    }

    fn priority(&self) -> u16 {
        20
    }

    fn applies(&self, utterance: &Utterance, ctx: &MatchContext<'_>) -> Option<Intent> {
        ctx.contains(ListKind::ClarificationRequests, utterance.tokens())
            .then_some(Intent::Confused)
    }
}

/// "I don't know, pressure from work": an opening uncertainty phrase followed,
/// after a break or a connector, by a substantive statement.
#[derive(Debug, Clone, Copy)]
pub struct HedgedAnswer;

impl IntentMatcher for HedgedAnswer {
    fn name(&self) -> &'static str {
        "hedged_answer"
    }

    fn priority(&self) -> u16 {
        30
    }

    fn applies(&self, utterance: &Utterance, ctx: &MatchContext<'_>) -> Option<Intent> {
        if utterance.is_question() {
            return None;
        }
        let tokens = utterance.tokens();

        // Uncertainty takes precedence over fillers so "i don't know" is not
        // split into the filler "i" and "don't know".
        let mut at = 0;
        let (uncertainty_start, uncertainty_len) = loop {
            if let Some(len) = ctx.uncertainty_at(tokens, at) {
                break (at, len);
            }
            at += ctx.longest(ListKind::Fillers, tokens, at)?;
        };
        let after = ctx.skip(
            &[ListKind::Hedges],
            tokens,
            uncertainty_start + uncertainty_len,
        );

        let broken = (uncertainty_start..after).any(|i| utterance.break_after(i));
        let connected = ctx.longest(ListKind::Connectors, tokens, after).is_some();
        if !broken && !connected {
            return None;
        }

        let rest_start = ctx.skip(&[ListKind::Connectors, ListKind::Fillers], tokens, after);
        if rest_start >= tokens.len()
            || ctx
                .longest(ListKind::Interrogatives, tokens, rest_start)
                .is_some()
        {
            return None;
        }
        ctx.has_content(&tokens[rest_start..])
            .then_some(Intent::AnswerCore)
    }
}

/// "not sure", "לא בטוחה עדיין", "i don't know, maybe": nothing but
/// uncertainty, hedges, fillers and connectors with nothing after them.
#[derive(Debug, Clone, Copy)]
pub struct PureUncertainty;

impl IntentMatcher for PureUncertainty {
    fn name(&self) -> &'static str {
        "pure_uncertainty"
    }

    fn priority(&self) -> u16 {
        40
    }

    fn applies(&self, utterance: &Utterance, ctx: &MatchContext<'_>) -> Option<Intent> {
        let tokens = utterance.tokens();
        let mut at = 0;
        let mut found = false;
        while at < tokens.len() {
            if let Some(len) = ctx.uncertainty_at(tokens, at) {
                found = true;
                at += len;
            } else {
                at += ctx.longest_of(
                    &[ListKind::Hedges, ListKind::Fillers, ListKind::Connectors],
                    tokens,
                    at,
                )?;
            }
        }
        found.then_some(Intent::Confused)
    }
}

/// "?", "what?", "מה זה?": a question with no content of its own.
#[derive(Debug, Clone, Copy)]
pub struct BareInterrogative;

impl IntentMatcher for BareInterrogative {
    fn name(&self) -> &'static str {
        "bare_interrogative"
    }

    fn priority(&self) -> u16 {
        50
    }

    fn applies(&self, utterance: &Utterance, ctx: &MatchContext<'_>) -> Option<Intent> {
        let tokens = utterance.tokens();
        if tokens.is_empty() {
            return utterance.is_question().then_some(Intent::Confused);
        }

        let only_question_words = ctx.contains(ListKind::Interrogatives, tokens)
            && ctx.skip(
                &[ListKind::Interrogatives, ListKind::Fillers],
                tokens,
                0,
            ) == tokens.len();
        let contentless_question = utterance.is_question() && !ctx.has_content(tokens);

        (only_question_words || contentless_question).then_some(Intent::Confused)
    }
}

/// "not clear what to do", "לא ברור מה לעשות": uncertainty together with a
/// question word or a reference to the task.
///
/// In states that accept task help, a message that is also a help request
/// is left to [`TaskHelpRequest`].
#[derive(Debug, Clone, Copy)]
pub struct NegatedClarity;

impl IntentMatcher for NegatedClarity {
    fn name(&self) -> &'static str {
        "negated_clarity"
    }

    fn priority(&self) -> u16 {
        60
    }

    fn applies(&self, utterance: &Utterance, ctx: &MatchContext<'_>) -> Option<Intent> {
        let tokens = utterance.tokens();
        let (start, len) = ctx.find_uncertainty(tokens)?;
        let asks = (0..tokens.len())
            .filter(|&i| i < start || i >= start + len)
            .any(|i| {
                ctx.longest_of(
                    &[ListKind::Interrogatives, ListKind::TaskReferences],
                    tokens,
                    i,
                )
                .is_some()
            });
        if !asks {
            return None;
        }
        if ctx.state.accepts_task_help() && ctx.opens_a_clause(ListKind::TaskHelp, utterance) {
            return None;
        }
        Some(Intent::Confused)
    }
}

/// Help-seeking during the task or its interpretation. The help phrase must
/// open a clause, so "for example, yesterday I ..." stays a task reply.
#[derive(Debug, Clone, Copy)]
pub struct TaskHelpRequest;

impl IntentMatcher for TaskHelpRequest {
    fn name(&self) -> &'static str {
        "task_help"
    }

    fn priority(&self) -> u16 {
        70
    }

    fn applies(&self, utterance: &Utterance, ctx: &MatchContext<'_>) -> Option<Intent> {
        (ctx.state.accepts_task_help() && ctx.opens_a_clause(ListKind::TaskHelp, utterance))
            .then_some(Intent::TaskHelp)
    }
}

/// "done", "סיימתי": an explicit completion announcement during the task.
#[derive(Debug, Clone, Copy)]
pub struct CompletionAnnouncement;

impl IntentMatcher for CompletionAnnouncement {
    fn name(&self) -> &'static str {
        "completion"
    }

    fn priority(&self) -> u16 {
        80
    }

    fn applies(&self, utterance: &Utterance, ctx: &MatchContext<'_>) -> Option<Intent> {
        if ctx.state != ConversationState::Task || utterance.is_question() {
            return None;
        }
        opens_clause_with(ListKind::Completion, utterance, ctx).then_some(Intent::Completed)
    }
}

/// Greetings and readiness before the core question.
#[derive(Debug, Clone, Copy)]
pub struct Checkin;

impl IntentMatcher for Checkin {
    fn name(&self) -> &'static str {
        "checkin"
    }

    fn priority(&self) -> u16 {
        90
    }

    fn applies(&self, utterance: &Utterance, ctx: &MatchContext<'_>) -> Option<Intent> {
        let early = matches!(
            ctx.state,
            ConversationState::Start | ConversationState::Orientation
        );
        if !early || utterance.len_graphemes() >= ctx.thresholds.emotional_min_chars() {
            return None;
        }
        opens_clause_with(ListKind::Checkin, utterance, ctx).then_some(Intent::Checkin)
    }
}

/// Whether the message opens (directly or after fillers) with a phrase of
/// `kind` that fills its whole clause.
fn opens_clause_with(kind: ListKind, utterance: &Utterance, ctx: &MatchContext<'_>) -> bool {
    let tokens = utterance.tokens();
    let after_fillers = ctx.skip(&[ListKind::Fillers], tokens, 0);
    [0, after_fillers].into_iter().any(|start| {
        ctx.lengths(kind, tokens, start).into_iter().any(|len| {
            let end = start + len;
            end == tokens.len() || utterance.break_after(end - 1)
        })
    })
}

/// Rule applied when no matcher fires.
#[must_use]
pub fn state_default(utterance: &Utterance, ctx: &MatchContext<'_>) -> Intent {
    if utterance.is_empty() {
        return Intent::Other;
    }
    let length = utterance.len_graphemes();
    match ctx.state {
        ConversationState::CoreQuestion => Intent::AnswerCore,
        ConversationState::Task if length >= ctx.thresholds.task_completion_min_chars() => {
            Intent::Completed
        }
        _ if length >= ctx.thresholds.emotional_min_chars() => Intent::Emotional,
        _ => Intent::Other,
    }
}
