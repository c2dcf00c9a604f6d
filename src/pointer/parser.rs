use nom::{
    IResult, Parser,
    branch::alt,
    character::complete::{char, satisfy},
    combinator::{eof, map, value},
    error::context,
    multi::{many0, separated_list1},
    sequence::preceded,
};
use nom_language::error::VerboseError;

// ""          - allowed - the whole document
// "/"         - allowed - member with the empty name
// "/foo/0"    - allowed - tokens "foo" and "0"
// "/a~1b"     - allowed - token "a/b"
// "/m~0n"     - allowed - token "m~n"
// "/foo//bar" - allowed - empty middle token
// "foo"       - not allowed - missing leading '/'
// "/a~2"      - not allowed - '~' must be followed by '0' or '1'
pub(crate) fn parse_pointer(input: &str) -> IResult<&str, Vec<String>, VerboseError<&str>> {
    context(
        "expected a pointer starting with '/' or empty input",
        alt((
            value(Vec::new(), eof),
            preceded(char('/'), separated_list1(char('/'), parse_token)),
        )),
    )
    .parse(input)
}

fn parse_token(input: &str) -> IResult<&str, String, VerboseError<&str>> {
    // '/' terminates the token, a raw '~' must start an escape
    let token_char = alt((unescape_char, satisfy(|c| c != '/' && c != '~')));
    context(
        "reference token",
        map(many0(token_char), |chars: Vec<char>| {
            chars.into_iter().collect::<String>()
        }),
    )
    .parse(input)
}

fn unescape_char(input: &str) -> IResult<&str, char, VerboseError<&str>> {
    let (rest, _) = char('~').parse(input)?;
    alt((value('~', char('0')), value('/', char('1')))).parse(rest)
}
