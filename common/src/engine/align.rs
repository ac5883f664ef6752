//! Anchor-based alignment of live text against template segments.
//!
//! Shared by [`super::annotate`] and [`super::refill`]. Works on byte ranges
//! of the live text; every range starts and ends on a `char` boundary because
//! the only cut points are the positions of literal matches.

use super::segments::Segment;
use crate::model::variable::VariableStore;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Region<'s> {
    /// A literal segment found verbatim in the live text.
    Literal(Range<usize>),
    /// Text claimed by one or more consecutive variable segments.
    Variables(Vec<VariableRef<'s>>, Range<usize>),
    /// Text that no segment accounts for.
    Plain(Range<usize>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VariableRef<'s> {
    pub name: &'s str,
    pub placeholder: &'s str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Alignment<'s> {
    pub regions: Vec<Region<'s>>,
    /// Set when a literal anchor could not be found; the last region is then
    /// the unaligned tail (if it is non-empty).
    pub diverged: bool,
}

pub(crate) fn align<'s>(segments: &'s [Segment], live: &str) -> Alignment<'s> {
    let mut regions = Vec::with_capacity(segments.len() + 1);
    let mut pending: Vec<VariableRef<'s>> = Vec::new();
    let mut cursor = 0;

    for segment in segments {
        match segment {
            Segment::Variable { name, placeholder } => pending.push(VariableRef { name, placeholder }),
            Segment::Literal { text } => {
                let Some(offset) = live[cursor..].find(text.as_str()) else {
                    log::debug!(
                        "anchor {:?} not found after byte {}; leaving tail unaligned",
                        text,
                        cursor
                    );
                    if cursor < live.len() {
                        regions.push(Region::Plain(cursor..live.len()));
                    }
                    return Alignment {
                        regions,
                        diverged: true,
                    };
                };
                let found = cursor + offset;
                push_gap(&mut regions, &mut pending, cursor..found);
                regions.push(Region::Literal(found..found + text.len()));
                cursor = found + text.len();
            }
        }
    }

    push_gap(&mut regions, &mut pending, cursor..live.len());
    Alignment {
        regions,
        diverged: false,
    }
}

fn push_gap<'s>(regions: &mut Vec<Region<'s>>, pending: &mut Vec<VariableRef<'s>>, gap: Range<usize>) {
    if !pending.is_empty() {
        regions.push(Region::Variables(std::mem::take(pending), gap));
    } else if !gap.is_empty() {
        regions.push(Region::Plain(gap));
    }
}

/// Divides the range shared by consecutive variables.
///
/// Each variable but the last claims its expected text (`expected` value when
/// non-empty, else its placeholder) if the remaining range starts with it;
/// the first one that does not match claims everything left. The last
/// variable takes the remainder.
pub(crate) fn split_group<'s>(
    vars: &[VariableRef<'s>],
    range: Range<usize>,
    live: &str,
    expected: &VariableStore,
) -> Vec<(VariableRef<'s>, Range<usize>)> {
    let mut out = Vec::with_capacity(vars.len());
    let mut start = range.start;

    for (i, var) in vars.iter().enumerate() {
        let end = if i + 1 == vars.len() {
            range.end
        } else {
            let want = expected.resolved(var.name).unwrap_or(var.placeholder);
            if live[start..range.end].starts_with(want) {
                start + want.len()
            } else {
                range.end
            }
        };
        out.push((*var, start..end));
        start = end;
    }
    out
}
