//! End-to-end checks of the reader through the public API.

use exprish::data::{InternPool, Interner, Seq};
use exprish::reader::{parse, tokenize, LexOptions, ReadErr, TokenKind};
use exprish::{eval::evaluate, parse_and_render};
use string_interner::DefaultStringInterner;

#[test]
fn digit_strings_are_one_integer() -> Result<(), ReadErr> {
    let mut n: u64 = 1;
    for _ in 0..19 {
        let s = n.to_string();
        let mut pool = InternPool::new();
        let tokens = tokenize(&mut pool, s.as_bytes(), LexOptions::default())
            .collect::<Result<Vec<_>, _>>()?;
        assert_eq!(tokens.len(), 2, "unexpected tokens for {s}");
        assert_eq!(tokens[0].int_value(), Some(n));
        assert_eq!(tokens[1].kind(), TokenKind::Eof);
        n = n * 7 + 3;
    }
    Ok(())
}

#[test]
fn interning_is_by_content() {
    let mut pool = InternPool::new();
    let source = "abc+abc+ab+abcd".to_owned();
    let names: Vec<_> = tokenize(&mut pool, source.as_bytes(), LexOptions::default())
        .filter_map(|t| t.unwrap().symbol())
        .collect();
    assert_eq!(names.len(), 4);
    assert_eq!(names[0], names[1]);
    assert_ne!(names[0], names[2]);
    assert_ne!(names[0], names[3]);
    assert_ne!(names[2], names[3]);

    // The same content from somewhere else entirely.
    let other = String::from("ab") + "c";
    assert_eq!(pool.intern(other.as_bytes()), names[0]);
}

#[test]
fn names_through_hashed_interner() -> Result<(), ReadErr> {
    let mut interner = DefaultStringInterner::default();
    let symbols: Vec<_> = tokenize(&mut interner, b"foo(bar)foo", LexOptions::default())
        .filter_map(|t| t.map(|t| t.symbol()).transpose())
        .collect::<Result<_, _>>()?;
    assert_eq!(symbols.len(), 3);
    assert_eq!(symbols[0], symbols[2]);
    assert_eq!(interner.resolve_name(symbols[1]), Some("bar"));
    Ok(())
}

#[test]
fn sequence_keeps_values() {
    let mut seq = Seq::new();
    for i in 0..2000u32 {
        seq.push(i * 3);
    }
    assert_eq!(seq.len(), 2000);
    assert!(seq.iter().enumerate().all(|(i, v)| *v == i as u32 * 3));
    seq.release();
    assert_eq!((seq.len(), seq.capacity()), (0, 0));
}

#[test]
fn rendering() -> Result<(), ReadErr> {
    assert_eq!(parse_and_render("1-2-3")?, "(- (- 1 2) 3)");
    assert_eq!(parse_and_render("1+2*3")?, "(+ 1 (* 2 3))");
    assert_eq!(parse_and_render("-2*3")?, "(- (* 2 3))");
    assert_eq!(parse_and_render("(1+2)*3")?, "(* (+ 1 2) 3)");
    assert_eq!(parse_and_render("~(4^5)|6")?, "(| (~ (^ 4 5)) 6)");
    Ok(())
}

#[test]
fn mismatched_paren_is_an_error() {
    let err = parse_and_render("(1+2").unwrap_err();
    assert!(err.is_incomplete());
    assert!(
        matches!(
            err,
            ReadErr::Unexpected {
                expected: TokenKind::Char(b')'),
                found: TokenKind::Eof,
                ..
            }
        ),
        "unexpected error: {err:?}"
    );
}

#[test]
fn deep_nesting_is_an_error() {
    let input = "-".repeat(5_000) + "1";
    match parse_and_render(&input) {
        Err(ReadErr::TooDeep { limit: 256, .. }) => (),
        v => panic!("unexpected parse result: {v:?}"),
    }
}

#[test]
fn strict_and_permissive() {
    let mut pool = InternPool::new();
    let strict = LexOptions {
        strict: true,
        ..Default::default()
    };
    match parse(&mut pool, "1+2#", strict) {
        Err(ReadErr::UnknownCharacter { byte: b'#', .. }) => (),
        v => panic!("unexpected parse result: {v:?}"),
    }
    match parse(&mut pool, "1+2#", LexOptions::default()) {
        Err(ReadErr::Unexpected {
            found: TokenKind::Char(b'#'),
            ..
        }) => (),
        v => panic!("unexpected parse result: {v:?}"),
    }
}

#[test]
fn parse_then_evaluate() -> Result<(), Box<dyn std::error::Error>> {
    let mut pool = InternPool::new();
    let e = parse(&mut pool, "(7+3)*(10%4)-~0", LexOptions::default())?;
    assert_eq!(e.to_string(), "(- (* (+ 7 3) (% 10 4)) (~ 0))");
    assert_eq!(evaluate(&e)?, 21);
    Ok(())
}
