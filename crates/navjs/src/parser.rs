//! A `nom`-based parser for generated navigation data files.
use crate::error::NavJsError;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{escaped_transform, is_not, tag, take_until},
    character::complete::{char, multispace1},
    combinator::{map, opt, value},
    multi::{many0, separated_list0},
    sequence::{delimited, preceded, terminated},
};
use waypost_tree::{NavChildren, NavNode, NavTarget};
use waypost_types::AnchorId;

/// The raw pieces parsed out of one navigation data file.
#[derive(Debug, Clone, PartialEq)]
pub struct NavData {
    /// The single root entry of the `NAVTREE` declaration.
    pub root: NavNode,
    /// The `NAVTREEINDEX` anchors, in declared order.
    pub index: Vec<AnchorId>,
    /// The `SYNCONMSG` prompt.
    pub sync_on: String,
    /// The `SYNCOFFMSG` prompt.
    pub sync_off: String,
}

// --- Main Public Parser ---

/// Parses a complete navigation data file. Each of the four declarations
/// must appear exactly once; their order is free.
pub fn parse_navtree_js(source: &str) -> Result<NavData, NavJsError> {
    let decls = match file(source) {
        Ok(("", decls)) => decls,
        Ok((rem, _)) => {
            return Err(NavJsError::Parse {
                snippet: snippet(rem),
                message: "parser did not consume all input".into(),
            });
        }
        Err(e) => {
            return Err(NavJsError::Parse {
                snippet: snippet(source),
                message: e.to_string(),
            });
        }
    };
    assemble(decls)
}

fn snippet(input: &str) -> String {
    let trimmed = input.trim_start();
    trimmed.chars().take(40).collect()
}

fn assemble(decls: Vec<Decl>) -> Result<NavData, NavJsError> {
    let mut tree: Option<Vec<NavNode>> = None;
    let mut index: Option<Vec<AnchorId>> = None;
    let mut sync_on: Option<String> = None;
    let mut sync_off: Option<String> = None;

    for decl in decls {
        match decl {
            Decl::Tree(roots) => set_once(&mut tree, roots, "NAVTREE")?,
            Decl::Index(anchors) => set_once(&mut index, anchors, "NAVTREEINDEX")?,
            Decl::SyncOn(msg) => set_once(&mut sync_on, msg, "SYNCONMSG")?,
            Decl::SyncOff(msg) => set_once(&mut sync_off, msg, "SYNCOFFMSG")?,
        }
    }

    let mut roots = tree.ok_or(NavJsError::MissingDeclaration("NAVTREE"))?;
    if roots.len() != 1 {
        return Err(NavJsError::RootCount(roots.len()));
    }
    Ok(NavData {
        root: roots.remove(0),
        index: index.ok_or(NavJsError::MissingDeclaration("NAVTREEINDEX"))?,
        sync_on: sync_on.ok_or(NavJsError::MissingDeclaration("SYNCONMSG"))?,
        sync_off: sync_off.ok_or(NavJsError::MissingDeclaration("SYNCOFFMSG"))?,
    })
}

fn set_once<T>(slot: &mut Option<T>, value: T, name: &'static str) -> Result<(), NavJsError> {
    if slot.is_some() {
        return Err(NavJsError::DuplicateDeclaration(name));
    }
    *slot = Some(value);
    Ok(())
}

// --- Declarations ---

#[derive(Debug)]
enum Decl {
    Tree(Vec<NavNode>),
    Index(Vec<AnchorId>),
    SyncOn(String),
    SyncOff(String),
}

fn file(input: &str) -> IResult<&str, Vec<Decl>> {
    terminated(many0(declaration), junk).parse(input)
}

fn declaration(input: &str) -> IResult<&str, Decl> {
    delimited(
        preceded(junk, tag("var")),
        preceded(
            multispace1,
            // NAVTREEINDEX shares a prefix with NAVTREE, so it is tried first.
            alt((
                map(assignment("NAVTREEINDEX", anchor_array), Decl::Index),
                map(assignment("NAVTREE", entry_list), Decl::Tree),
                map(assignment("SYNCONMSG", sq_string), Decl::SyncOn),
                map(assignment("SYNCOFFMSG", sq_string), Decl::SyncOff),
            )),
        ),
        ws(char(';')),
    )
    .parse(input)
}

fn assignment<'a, F, O>(
    name: &'static str,
    rhs: F,
) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    preceded(tag(name), preceded(ws(char('=')), rhs))
}

// --- Tree Entries ---

fn entry(input: &str) -> IResult<&str, NavNode> {
    map(
        delimited(
            ws(char('[')),
            (
                dq_string,
                preceded(ws(char(',')), entry_target),
                preceded(ws(char(',')), entry_children),
            ),
            ws(char(']')),
        ),
        |(label, target, children)| NavNode {
            label,
            target,
            children,
        },
    )
    .parse(input)
}

fn entry_target(input: &str) -> IResult<&str, NavTarget> {
    alt((
        value(NavTarget::None, tag("null")),
        map(dq_string, |url| NavTarget::Page(url.into())),
    ))
    .parse(input)
}

fn entry_children(input: &str) -> IResult<&str, NavChildren> {
    alt((
        value(NavChildren::None, tag("null")),
        map(entry_list, NavChildren::Inline),
        map(dq_string, |name| NavChildren::External(name.into())),
    ))
    .parse(input)
}

fn entry_list(input: &str) -> IResult<&str, Vec<NavNode>> {
    delimited(
        ws(char('[')),
        separated_list0(ws(char(',')), entry),
        ws(char(']')),
    )
    .parse(input)
}

fn anchor_array(input: &str) -> IResult<&str, Vec<AnchorId>> {
    delimited(
        ws(char('[')),
        separated_list0(ws(char(',')), map(dq_string, AnchorId::from)),
        ws(char(']')),
    )
    .parse(input)
}

// --- String Literals ---

/// A double-quoted string with `\"`, `\\` and `\/` escapes, as used for
/// labels, urls and anchors.
fn dq_string(input: &str) -> IResult<&str, String> {
    delimited(
        char('"'),
        map(
            opt(escaped_transform(
                is_not("\\\""),
                '\\',
                alt((
                    value("\"", char('"')),
                    value("\\", char('\\')),
                    value("/", char('/')),
                )),
            )),
            Option::unwrap_or_default,
        ),
        char('"'),
    )
    .parse(input)
}

/// A single-quoted string, as used for the toggle messages.
fn sq_string(input: &str) -> IResult<&str, String> {
    delimited(
        char('\''),
        map(opt(is_not("'")), |s: Option<&str>| {
            s.unwrap_or_default().to_string()
        }),
        char('\''),
    )
    .parse(input)
}

// --- Whitespace & Comments ---

/// Consumes whitespace and `/* ... */` banner comments.
fn junk(input: &str) -> IResult<&str, ()> {
    value(
        (),
        many0(alt((
            value((), multispace1),
            value((), delimited(tag("/*"), take_until("*/"), tag("*/"))),
        ))),
    )
    .parse(input)
}

/// A combinator that takes a parser `inner` and produces a parser that
/// consumes surrounding whitespace and comments.
fn ws<'a, F, O>(inner: F) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    delimited(junk, inner, junk)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
var NAVTREE =
[
  [ "Manual", "index.html", [
    [ "Intro", "index.html#intro", null ],
    [ "Modules", "modules.html", "modules" ],
    [ "Grouping", null, [
      [ "Nested", "a.html", null ]
    ] ]
  ] ]
];

var NAVTREEINDEX =
[
"annotated.html",
"midifile_8c.html#ad4d796b98c583d49e83adabd74a63bf6"
];

var SYNCONMSG = 'click to disable panel synchronisation';
var SYNCOFFMSG = 'click to enable panel synchronisation';
"#;

    #[test]
    fn test_parse_minimal_file() {
        let data = parse_navtree_js(MINIMAL).unwrap();
        assert_eq!(data.root.label, "Manual");
        assert_eq!(data.root.inline_children().len(), 3);
        assert_eq!(data.index.len(), 2);
        assert_eq!(data.index[0].as_str(), "annotated.html");
        assert_eq!(data.sync_on, "click to disable panel synchronisation");
        assert_eq!(data.sync_off, "click to enable panel synchronisation");

        let children = data.root.inline_children();
        assert!(children[0].is_leaf());
        assert!(children[1].has_external_index());
        assert_eq!(children[2].target, NavTarget::None);
        assert_eq!(children[2].inline_children()[0].label, "Nested");
    }

    #[test]
    fn test_parse_with_banner_comment() {
        let source = format!("/*\n  Generated. Do not edit.\n*/\n{MINIMAL}");
        let data = parse_navtree_js(&source).unwrap();
        assert_eq!(data.root.label, "Manual");
    }

    #[test]
    fn test_declaration_order_is_free() {
        let source = r#"
var SYNCOFFMSG = 'off';
var NAVTREEINDEX = [ "a.html" ];
var SYNCONMSG = 'on';
var NAVTREE = [ [ "Root", null, null ] ];
"#;
        let data = parse_navtree_js(source).unwrap();
        assert_eq!(data.root.label, "Root");
        assert_eq!(data.sync_on, "on");
        assert_eq!(data.sync_off, "off");
    }

    #[test]
    fn test_escaped_label() {
        let source = r#"
var NAVTREE = [ [ "The \"Engine\"", null, null ] ];
var NAVTREEINDEX = [ "a.html" ];
var SYNCONMSG = 'on';
var SYNCOFFMSG = 'off';
"#;
        let data = parse_navtree_js(source).unwrap();
        assert_eq!(data.root.label, "The \"Engine\"");
    }

    #[test]
    fn test_missing_declaration() {
        let source = r#"
var NAVTREE = [ [ "Root", null, null ] ];
var NAVTREEINDEX = [ "a.html" ];
var SYNCONMSG = 'on';
"#;
        let err = parse_navtree_js(source).unwrap_err();
        assert_eq!(err, NavJsError::MissingDeclaration("SYNCOFFMSG"));
    }

    #[test]
    fn test_duplicate_declaration() {
        let source = r#"
var SYNCONMSG = 'on';
var SYNCONMSG = 'again';
var SYNCOFFMSG = 'off';
var NAVTREE = [ [ "Root", null, null ] ];
var NAVTREEINDEX = [ "a.html" ];
"#;
        let err = parse_navtree_js(source).unwrap_err();
        assert_eq!(err, NavJsError::DuplicateDeclaration("SYNCONMSG"));
    }

    #[test]
    fn test_multiple_roots_rejected() {
        let source = r#"
var NAVTREE = [ [ "A", null, null ], [ "B", null, null ] ];
var NAVTREEINDEX = [ "a.html" ];
var SYNCONMSG = 'on';
var SYNCOFFMSG = 'off';
"#;
        let err = parse_navtree_js(source).unwrap_err();
        assert_eq!(err, NavJsError::RootCount(2));
    }

    #[test]
    fn test_malformed_array_rejected() {
        let source = r#"
var NAVTREE = [ [ "Root", null ] ];
var NAVTREEINDEX = [ "a.html" ];
var SYNCONMSG = 'on';
var SYNCOFFMSG = 'off';
"#;
        assert!(matches!(
            parse_navtree_js(source).unwrap_err(),
            NavJsError::Parse { .. }
        ));
    }
}
