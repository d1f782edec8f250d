//! # Tokenizer Engine
//!
//! Applies a [`RuleTable`] to one input buffer.
//!
//! ## Algorithm
//!
//! 1. **Claim**: rules run in table order. Each rule only claims text no earlier
//!    rule has claimed, and every match it finds there becomes a claimed span.
//!    Every search is bounded to one gap: a match never runs past the end of
//!    the gap, while `\b`, `^` and `$` look at the whole buffer on both sides.
//!    A rule claiming its whole match starts at the gap start. A rule claiming
//!    group 1 starts at the end of the previous gap, so its leading context may
//!    overlap claimed text, but the group itself must lie inside the gap.
//! 2. **Assemble**: the input is walked from start to end. Unclaimed runs become
//!    [`TokenType::Text`] tokens, claimed spans become tokens of their rule's type,
//!    or the output of the rule's refinement when it has one.
//!
//! The result covers the input exactly: no gaps, no overlaps, no empty tokens.

use super::{
    error::{TokenizerError, TokenizerResult},
    rule::{Rule, RuleTable},
    token::{join_text, locate, Token, TokenSpan, TokenType},
};
use crate::config::TokenizerConfig;
use regex_automata::{util::captures::Captures as SearchCaptures, Input};

/// A byte range owned by one rule during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MatchSpan {
    start: usize,
    end: usize,
    rule: usize,
}

/// Tokenizes `input` with `rules`.
///
/// Text no rule matches is emitted as plain tokens, so this never fails.
///
/// # Examples
///
/// ```
/// # use enlighter::tokenizer::{engine::tokenize, rule::RuleTable, token::{Token, TokenType}};
/// let table = RuleTable::builder("demo")
///     .rule("keyword", r"\blet\b", TokenType::Keyword)
///     .build()
///     .unwrap();
/// let tokens = tokenize("let x", &table);
/// assert_eq!(tokens, vec![Token::new("let", TokenType::Keyword), Token::plain(" x")]);
/// ```
#[tracing::instrument(level = "debug", skip(input, rules), fields(language = rules.language(), len = input.len()))]
pub fn tokenize(input: &str, rules: &RuleTable) -> Vec<Token> {
    let spans = claim_spans(input, rules);
    assemble(input, rules, &spans, RefinementCheck::Assert).tokens
}

/// Tokenizer bound to one rule table and configuration.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    table: RuleTable,
    config: TokenizerConfig,
}

impl Tokenizer {
    pub fn new(table: RuleTable, config: TokenizerConfig) -> Self {
        Self { table, config }
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Tokenizes `input`.
    ///
    /// # Errors
    ///
    /// With `validate_refinements` enabled, returns
    /// [`TokenizerError::RefinementMismatch`] for the first refinement whose output
    /// does not reproduce the refined text. With it disabled, refinement output is
    /// used as returned.
    #[tracing::instrument(level = "debug", skip(self, input), fields(language = self.table.language(), len = input.len()))]
    pub fn tokenize(&self, input: &str) -> TokenizerResult<Vec<Token>> {
        let spans = claim_spans(input, &self.table);
        let assembly = assemble(input, &self.table, &spans, (&self.config).into());
        match assembly.mismatch {
            Some(e) => {
                tracing::error!("{}", e);
                Err(e)
            }
            None => Ok(assembly.tokens),
        }
    }

    /// Tokenizes `input` and attaches positions to each token.
    pub fn tokenize_spans(&self, input: &str) -> TokenizerResult<Vec<TokenSpan>> {
        self.tokenize(input).map(locate)
    }
}

impl From<RuleTable> for Tokenizer {
    fn from(table: RuleTable) -> Self {
        Self::new(table, TokenizerConfig::default())
    }
}

fn claim_spans(input: &str, table: &RuleTable) -> Vec<MatchSpan> {
    let mut claimed: Vec<MatchSpan> = Vec::new();

    for (index, rule) in table.rules().iter().enumerate() {
        let gaps = unclaimed_gaps(&claimed, input.len());
        if gaps.is_empty() {
            break;
        }

        let mut found = Vec::new();
        let mut captures = rule.searcher().create_captures();
        let mut context_start = 0;
        for &(gap_start, gap_end) in &gaps {
            let search_start = if rule.claims_group() {
                context_start
            } else {
                gap_start
            };
            let scan = GapScan {
                input,
                rule,
                index,
                search_start,
                gap_start,
                gap_end,
            };
            scan.run(&mut captures, &mut found);
            context_start = gap_end;
        }

        tracing::trace!(rule = rule.name(), claims = found.len(), "rule applied");
        if !found.is_empty() {
            claimed.extend(found);
            claimed.sort_unstable_by_key(|span| span.start);
        }
    }

    claimed
}

/// One rule searching one gap.
struct GapScan<'a> {
    input: &'a str,
    rule: &'a Rule,
    index: usize,
    search_start: usize,
    gap_start: usize,
    gap_end: usize,
}

impl GapScan<'_> {
    fn run(&self, captures: &mut SearchCaptures, found: &mut Vec<MatchSpan>) {
        let mut search = Input::new(self.input).span(self.search_start..self.gap_end);
        let mut position = self.search_start;

        while position < self.gap_end {
            search.set_start(position);
            self.rule.searcher().search_captures(&search, captures);
            let Some(whole) = captures.get_match() else {
                break;
            };

            match self.rule.claim_search(captures) {
                Some((start, end)) if end > start && start >= self.gap_start => {
                    found.push(MatchSpan {
                        start,
                        end,
                        rule: self.index,
                    });
                    position = end;
                }
                // empty claim or a group inside claimed text, step over one
                // character so the scan always advances
                _ => position = next_boundary(self.input, whole.start()),
            }
        }
    }
}

/// Offset of the character following the one at `offset`.
fn next_boundary(input: &str, offset: usize) -> usize {
    input[offset..]
        .chars()
        .next()
        .map_or(input.len(), |c| offset + c.len_utf8())
}

fn unclaimed_gaps(claimed: &[MatchSpan], len: usize) -> Vec<(usize, usize)> {
    let mut gaps = Vec::with_capacity(claimed.len() + 1);
    let mut cursor = 0;
    for span in claimed {
        if span.start > cursor {
            gaps.push((cursor, span.start));
        }
        cursor = span.end;
    }
    if cursor < len {
        gaps.push((cursor, len));
    }
    gaps
}

/// How refinement output is checked against the refined token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RefinementCheck {
    /// `debug_assert!` only, used by the free [`tokenize`].
    Assert,
    /// Report the first mismatch as an error.
    Report,
    Off,
}

impl From<&TokenizerConfig> for RefinementCheck {
    fn from(config: &TokenizerConfig) -> Self {
        if config.validate_refinements {
            RefinementCheck::Report
        } else {
            RefinementCheck::Off
        }
    }
}

struct Assembly {
    tokens: Vec<Token>,
    mismatch: Option<TokenizerError>,
}

fn assemble(
    input: &str,
    table: &RuleTable,
    spans: &[MatchSpan],
    check: RefinementCheck,
) -> Assembly {
    let mut tokens = Vec::with_capacity(spans.len() * 2 + 1);
    let mut mismatch = None;
    let mut cursor = 0;

    for span in spans {
        if span.start > cursor {
            tokens.push(Token::plain(&input[cursor..span.start]));
        }

        let rule = &table.rules()[span.rule];
        let token = Token::new(&input[span.start..span.end], rule.kind());

        match rule.refinement() {
            None => tokens.push(token),
            Some(refinement) => {
                let parts = refinement.apply(&token);
                match check {
                    RefinementCheck::Report if mismatch.is_none() => {
                        mismatch = check_refinement(rule, &token, &parts).err();
                    }
                    RefinementCheck::Assert => debug_assert_eq!(
                        join_text(&parts),
                        token.text(),
                        "refinement of rule '{}' changed the token text",
                        rule.name()
                    ),
                    _ => {}
                }

                let before = tokens.len();
                tokens.extend(parts.into_iter().filter(|t| !t.is_empty()));
                if tokens.len() == before {
                    tokens.push(token);
                }
            }
        }
        cursor = span.end;
    }

    if cursor < input.len() {
        tokens.push(Token::plain(&input[cursor..]));
    }

    Assembly { tokens, mismatch }
}

fn check_refinement(rule: &Rule, token: &Token, parts: &[Token]) -> TokenizerResult<()> {
    let actual = join_text(parts);
    if actual != token.text() {
        return Err(TokenizerError::RefinementMismatch {
            rule: rule.name().to_string(),
            expected: token.text().to_string(),
            actual,
        });
    }
    Ok(())
}

/// Merges neighbouring tokens of the same type.
///
/// The engine keeps adjacent claims separate; consumers that only care about
/// styling can use this to shrink the stream.
pub fn coalesce(tokens: Vec<Token>) -> Vec<Token> {
    let mut merged: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match merged.last_mut() {
            Some(last) if last.kind() == token.kind() => {
                let (text, kind) = token.into_parts();
                let (mut head, _) = std::mem::replace(last, Token::plain("")).into_parts();
                head.push_str(&text);
                *last = Token::new(head, kind);
            }
            _ => merged.push(token),
        }
    }
    merged
}
