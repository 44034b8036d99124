//! Parse proof text into formulas.

use super::{Formula, Heading};
use std::fmt::Display;
use std::sync::Arc;
use thiserror::Error;

/// Parse one proof line into a [`Formula`]. The whole line must be consumed.
pub fn parse_formula(
    filename: Option<String>,
    line: usize,
    input: &str,
) -> Result<Formula, ParseError> {
    let (out, rest) = expr(&Context::new(filename, line, input))?;
    rest.expect_end()?;
    Ok(out)
}

/// Parse the heading line `H1,H2,...,Hn|-T`.
///
/// When the turnstile starts the line there are no hypotheses.
pub fn parse_heading(filename: Option<String>, input: &str) -> Result<Heading, ParseError> {
    let (out, rest) = heading(&Context::new(filename, 1, input))?;
    rest.expect_end()?;
    Ok(out)
}

/// A [`Span`] contains the source file, the line number and a pair of byte
/// offsets into that line representing the start and the end.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Span(Arc<SrcLine>, usize, usize);

impl Span {
    pub fn string(&self) -> &str {
        &self.0.contents[self.1..self.2]
    }

    pub fn line(&self) -> usize {
        self.0.line
    }
}

#[derive(Debug, PartialEq, Eq, Hash)]
pub struct SrcLine {
    name: Option<String>,
    line: usize,
    contents: String,
}

impl SrcLine {
    fn column(&self, offset: usize) -> usize {
        self.contents[..offset].chars().count() + 1
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let start = self.0.column(self.1);
        let end = self.0.column(self.2);
        let line = self.0.line;
        let quote = self.string();
        match &self.0.name {
            Some(filename) => write!(f, "In {line}:{start}-{end} of {filename}: {quote}"),
            None => write!(f, "In {line}:{start}-{end}: {quote}"),
        }
    }
}

#[derive(Clone, Debug)]
struct Context {
    source: Arc<SrcLine>,
    index: usize,
}

impl Context {
    fn new(name: Option<String>, line: usize, contents: &str) -> Context {
        let mut next = Context {
            source: Arc::new(SrcLine {
                name,
                line,
                contents: contents.to_string(),
            }),
            index: 0,
        };
        next.advance_past_whitespace();
        next
    }

    fn rest(&self) -> &str {
        &self.source.contents[self.index..]
    }

    fn advance_text(&self, s: &str) -> Option<(Span, Context)> {
        if self.rest().starts_with(s) {
            let mut next = self.clone();
            next.index += s.len();
            let span = Span(self.source.clone(), self.index, next.index);
            next.advance_past_whitespace();
            Some((span, next))
        } else {
            None
        }
    }

    fn advance_past_whitespace(&mut self) {
        let skipped = self.rest().len() - self.rest().trim_start().len();
        self.index += skipped;
    }

    /// The span of the next character, or an empty span at the end of input.
    fn next_char_span(&self) -> Span {
        let len = self.rest().chars().next().map_or(0, char::len_utf8);
        Span(self.source.clone(), self.index, self.index + len)
    }

    fn is_at_end(&self) -> bool {
        self.index == self.source.contents.len()
    }

    fn expect_end(&self) -> Result<(), ParseError> {
        if self.is_at_end() {
            Ok(())
        } else {
            let span = Span(self.source.clone(), self.index, self.source.contents.len());
            Err(ParseError::TrailingInput(span))
        }
    }
}

type Res<T> = Result<(T, Context), ParseError>;

trait Parser<T>: Fn(&Context) -> Res<T> + Clone {}
impl<T, F: Fn(&Context) -> Res<T> + Clone> Parser<T> for F {}

fn text(s: &str) -> impl Parser<Span> + '_ {
    move |ctx| {
        ctx.advance_text(s)
            .ok_or_else(|| ParseError::ExpectedText(ctx.next_char_span(), s.to_string()))
    }
}

fn repeat<T>(parser: impl Parser<T>) -> impl Parser<Vec<T>> {
    move |ctx| {
        let mut vec = Vec::new();
        let mut next = ctx.clone();
        while let Ok((x, rest)) = parser(&next) {
            vec.push(x);
            next = rest;
        }
        Ok((vec, next))
    }
}

fn choice<T>(a: impl Parser<T>, b: impl Parser<T>) -> impl Parser<T> {
    move |ctx| a(ctx).or_else(|_| b(ctx))
}

macro_rules! choices {
    ( $x:expr , ) => { $x };
    ( $x:expr $( , $xs:expr )+ , ) => {
        choice( $x, choices!( $( $xs , )+ ) )
    };
}

fn map<T, U>(parser: impl Parser<T>, f: impl Fn(T) -> U + Clone) -> impl Parser<U> {
    move |ctx| {
        let (x, next) = parser(ctx)?;
        Ok((f(x), next))
    }
}

fn sequence<T, U>(a: impl Parser<T>, b: impl Parser<U>) -> impl Parser<(T, U)> {
    move |ctx| {
        let (x, next) = a(ctx)?;
        let (y, next) = b(&next)?;
        Ok(((x, y), next))
    }
}

fn sequence3<T, U, V>(
    a: impl Parser<T>,
    b: impl Parser<U>,
    c: impl Parser<V>,
) -> impl Parser<(T, U, V)> {
    move |ctx| {
        let (x, next) = a(ctx)?;
        let (y, next) = b(&next)?;
        let (z, next) = c(&next)?;
        Ok(((x, y, z), next))
    }
}

fn option<T>(parser: impl Parser<T>) -> impl Parser<Option<T>> {
    move |ctx| match parser(ctx) {
        Ok((x, next)) => Ok((Some(x), next)),
        Err(_) => Ok((None, ctx.clone())),
    }
}

fn snd<T, U>(x: Option<(T, U)>) -> Option<U> {
    x.map(|(_, x)| x)
}

/// Parses `item (sep item)*`, folding the items to the left with `f`.
fn left_assoc(
    item: impl Parser<Formula>,
    sep: &'static str,
    f: fn(Formula, Formula) -> Formula,
) -> impl Parser<Formula> {
    map(
        sequence(item.clone(), repeat(sequence(text(sep), item))),
        move |(first, rest)| rest.into_iter().fold(first, |acc, (_, x)| f(acc, x)),
    )
}

fn heading(ctx: &Context) -> Res<Heading> {
    map(
        sequence3(
            option(sequence(expr, repeat(sequence(text(","), expr)))),
            text("|-"),
            expr,
        ),
        |(hyps, _, theorem)| {
            let hypotheses = match hyps {
                Some((first, rest)) => std::iter::once(first)
                    .chain(rest.into_iter().map(|(_, x)| x))
                    .collect(),
                None => vec![],
            };
            Heading {
                hypotheses,
                theorem,
            }
        },
    )(ctx)
}

fn expr(ctx: &Context) -> Res<Formula> {
    map(
        sequence(disjunction, option(sequence(text("->"), expr))),
        |(lhs, rhs)| match snd(rhs) {
            Some(rhs) => Formula::implies(lhs, rhs),
            None => lhs,
        },
    )(ctx)
}

fn disjunction(ctx: &Context) -> Res<Formula> {
    left_assoc(conjunction, "|", Formula::or)(ctx)
}

fn conjunction(ctx: &Context) -> Res<Formula> {
    left_assoc(unary, "&", Formula::and)(ctx)
}

fn unary(ctx: &Context) -> Res<Formula> {
    choices!(
        map(sequence(text("!"), unary), |(_, f)| Formula::not(f)),
        map(sequence3(text("("), expr, text(")")), |(_, f, _)| f),
        variable,
    )(ctx)
}

fn variable(ctx: &Context) -> Res<Formula> {
    let rest = ctx.rest();
    let len = match rest.chars().next() {
        Some(c) if c.is_ascii_uppercase() => rest
            .char_indices()
            .skip(1)
            .find(|&(_, c)| !(c.is_ascii_uppercase() || c.is_ascii_digit() || c == '\''))
            .map_or(rest.len(), |(i, _)| i),
        _ => return Err(ParseError::ExpectedVariable(ctx.next_char_span())),
    };
    let mut next = ctx.clone();
    next.index += len;
    next.advance_past_whitespace();
    Ok((Formula::var(&rest[..len]), next))
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{0}\nexpected {1}, found {}", .0.string())]
    ExpectedText(Span, String),
    #[error("{0}\nexpected variable")]
    ExpectedVariable(Span),
    #[error("{0}\nunexpected text after formula")]
    TrailingInput(Span),
}

impl ParseError {
    pub fn span(&self) -> &Span {
        match self {
            ParseError::ExpectedText(span, _)
            | ParseError::ExpectedVariable(span)
            | ParseError::TrailingInput(span) => span,
        }
    }
}
