use regex::Regex;
use smallvec::SmallVec;

use crate::error::RouteError;

const WILDCARD: &str = "*";
const COLON: char = ':';
const SLASH: char = '/';

/// A classified pattern segment. Constraint expressions arrive here already
/// compiled, so the insertion walk cannot fail part-way down the trie.
pub(crate) enum Segment<'a> {
    Static(&'a str),
    Variable(Option<Constraint>),
    Wildcard,
}

pub(crate) struct Constraint {
    pub(crate) expr: Box<str>,
    pub(crate) regex: Regex,
}

/// Parser output: classified segments plus the variable names in
/// left-to-right order.
pub(crate) struct Pattern<'a> {
    pub(crate) segments: SmallVec<[Segment<'a>; 8]>,
    pub(crate) names: Vec<Box<str>>,
}

/// Splits an already slash-trimmed pattern and classifies every segment.
///
/// A misplaced wildcard is rejected before anything else, matching the rule
/// that the check happens before any trie mutation.
pub(crate) fn parse(pattern: &str) -> Result<Pattern<'_>, RouteError> {
    let mut out = Pattern {
        segments: SmallVec::new(),
        names: Vec::new(),
    };

    if pattern.is_empty() {
        return Ok(out);
    }

    let parts: SmallVec<[&str; 8]> = pattern.split(SLASH).collect();

    if let Some(pos) = parts.iter().position(|p| *p == WILDCARD) {
        if pos != parts.len() - 1 {
            return Err(RouteError::WildcardMisplaced);
        }
    }

    for part in parts {
        if part.is_empty() {
            return Err(RouteError::BadSyntax);
        }

        if let Some(rest) = part.strip_prefix(COLON) {
            // A constraint overrides the default "match anything"
            // expression, expressjs-style: `/user/:id([0-9]+)`.
            let (name, constraint) = match rest.find('(') {
                Some(i) => {
                    let expr = &rest[i..];
                    let regex = Regex::new(expr)?;
                    (
                        &rest[..i],
                        Some(Constraint {
                            expr: expr.into(),
                            regex,
                        }),
                    )
                }
                None => (rest, None),
            };
            out.names.push(name.into());
            out.segments.push(Segment::Variable(constraint));
        } else if part == WILDCARD {
            out.segments.push(Segment::Wildcard);
        } else {
            out.segments.push(Segment::Static(part));
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify() {
        let p = parse("people/:id([0-9]+)/tasks").unwrap();
        assert_eq!(p.names.len(), 1);
        assert_eq!(&*p.names[0], "id");
        assert!(matches!(p.segments[0], Segment::Static("people")));
        match &p.segments[1] {
            Segment::Variable(Some(c)) => assert_eq!(&*c.expr, "([0-9]+)"),
            _ => panic!("expected constrained variable"),
        }
        assert!(matches!(p.segments[2], Segment::Static("tasks")));
    }

    #[test]
    fn wildcard_must_be_last() {
        assert!(matches!(
            parse("person/*/test"),
            Err(RouteError::WildcardMisplaced)
        ));
        assert!(matches!(
            parse("person/*").unwrap().segments[1],
            Segment::Wildcard
        ));
    }

    #[test]
    fn empty_segment_rejected() {
        assert!(matches!(
            parse("customers//:test"),
            Err(RouteError::BadSyntax)
        ));
    }

    #[test]
    fn bad_expression_surfaces_engine_error() {
        assert!(matches!(
            parse("customers/:id(."),
            Err(RouteError::Regex(_))
        ));
    }
}
