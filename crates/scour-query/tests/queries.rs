//! Public-API tests for the query tokenizer.
//!
//! Exercises the documented grammar end to end and pins the serialized
//! shape of the token sequence that downstream executors consume.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use scour_query::{Query, Term, TermDefaults, Token};
use serde_json::json;

/// A bare word as it parses under the standard defaults.
fn term(text: &str) -> Term {
    Term {
        exclude: false,
        exact: false,
        sub_left: false,
        sub_right: true,
        attribute: None,
        term: text.into(),
        phrase: None,
    }
}

#[test]
fn full_grammar_walk() {
    let query = Query::new("draft OR pending subject:\"status update\" -archived tag::urgent *fix");
    let tokens = query.tokens();
    assert_eq!(tokens.len(), 5);

    match &tokens[0] {
        Token::Group(group) => {
            assert_eq!(group.terms(), &[term("draft"), term("pending")]);
        }
        Token::Term(_) => panic!("expected the OR group first"),
    }
    assert_eq!(
        tokens[1],
        Token::Term(Term {
            attribute: Some("subject".into()),
            phrase: Some(true),
            ..term("status update")
        })
    );
    assert_eq!(
        tokens[2],
        Token::Term(Term {
            exclude: true,
            ..term("archived")
        })
    );
    assert_eq!(
        tokens[3],
        Token::Term(Term {
            exact: true,
            sub_left: false,
            sub_right: false,
            attribute: Some("tag".into()),
            ..term("urgent")
        })
    );
    assert_eq!(
        tokens[4],
        Token::Term(Term {
            sub_left: true,
            sub_right: false,
            ..term("fix")
        })
    );
}

#[test]
fn wildcard_terms_walk() {
    let query = Query::new("*fix pre* *mid*");
    let tokens = query.tokens();
    assert_eq!(
        tokens,
        &[
            Token::Term(Term {
                sub_left: true,
                sub_right: false,
                ..term("fix")
            }),
            Token::Term(Term {
                sub_left: false,
                sub_right: true,
                ..term("pre")
            }),
            Token::Term(Term {
                sub_left: true,
                sub_right: false,
                ..term("mid")
            }),
        ]
    );
}

#[test]
fn defaults_override_through_the_api() {
    let defaults = TermDefaults {
        exact: true,
        sub_right: false,
        ..TermDefaults::default()
    };
    let query = Query::with_defaults("note", defaults);
    assert_eq!(query.defaults(), defaults);
    assert_eq!(
        query.tokens(),
        &[Token::Term(Term {
            exact: true,
            sub_right: false,
            ..term("note")
        })]
    );
}

#[test]
fn malformed_input_never_panics() {
    for input in [
        "",
        "   ",
        "OR",
        "OR OR OR",
        "a OR",
        "\"unterminated phrase",
        "'",
        "-",
        "body:",
        "::x",
        "*",
        "**",
    ] {
        let query = Query::new(input);
        assert_eq!(query.query(), input);
        // Tokens may be empty, but accessors must stay consistent.
        assert_eq!(query.len(), query.tokens().len());
    }
}

#[test]
fn token_sequence_serializes_tagged() {
    let query = Query::new("a OR b -body:*");
    let value = serde_json::to_value(query.tokens()).expect("tokens serialize");
    assert_eq!(
        value,
        json!([
            {
                "Group": {
                    "terms": [
                        {
                            "exclude": false,
                            "exact": false,
                            "sub_left": false,
                            "sub_right": true,
                            "attribute": null,
                            "term": "a",
                            "phrase": null
                        },
                        {
                            "exclude": false,
                            "exact": false,
                            "sub_left": false,
                            "sub_right": true,
                            "attribute": null,
                            "term": "b",
                            "phrase": null
                        }
                    ]
                }
            },
            {
                "Term": {
                    "exclude": true,
                    "exact": false,
                    "sub_left": true,
                    "sub_right": false,
                    "attribute": "body",
                    "term": "",
                    "phrase": null
                }
            }
        ])
    );
}

#[test]
fn token_sequence_round_trips_through_serde() {
    let query = Query::new("subject:\"status update\" OR -draft *fix");
    let encoded = serde_json::to_string(query.tokens()).expect("tokens serialize");
    let decoded: Vec<Token> = serde_json::from_str(&encoded).expect("tokens deserialize");
    assert_eq!(decoded.as_slice(), query.tokens());
}
