//! Escaping must round-trip through the supervisor's own parsing rules.

use unitgen::args::{
    escape_systemd_argument, escape_systemd_arguments, unescape_systemd_argument, UnescapeError,
};

fn raw_args(args: Vec<&str>) -> Vec<String> {
    args.into_iter().map(String::from).collect()
}

#[test]
fn escape_example_command() {
    let args = raw_args(vec!["echo", "hello world", "50%", "$HOME", "a\\b"]);
    assert_eq!(
        escape_systemd_arguments(&args),
        raw_args(vec!["echo", "\"hello world\"", "50%%", "$$HOME", "a\\\\b"])
    );
}

#[test]
fn escape_keeps_length() {
    let args = raw_args(vec!["", " ", "\t", "x"]);
    assert_eq!(escape_systemd_arguments(&args).len(), args.len());
}

#[test]
fn round_trip_over_metacharacter_combinations() {
    const ALPHABET: &[&str] = &["a", "$", "%", "\\", " ", "\t", "\"", "'", "$$", "%%"];

    let mut inputs = vec![String::new()];
    for a in ALPHABET {
        for b in ALPHABET {
            for c in ALPHABET {
                inputs.push(format!("{}{}{}", a, b, c));
            }
        }
    }

    for input in inputs {
        let escaped = escape_systemd_argument(&input);
        // Quote characters without whitespace stay raw and are not expected to survive.
        if !input.contains([' ', '\t']) && input.contains(['"', '\'']) {
            continue;
        }
        assert_eq!(
            unescape_systemd_argument(&escaped).as_deref(),
            Ok(input.as_str()),
            "round trip failed for {:?} (escaped {:?})",
            input,
            escaped
        );
    }
}

#[test]
fn unquoted_quote_characters_pass_through_raw() {
    assert_eq!(escape_systemd_argument("\"aa"), "\"aa");
    assert_eq!(escape_systemd_argument("it's"), "it's");
    assert_eq!(
        unescape_systemd_argument(&escape_systemd_argument("\"aa")),
        Err(UnescapeError::UnterminatedQuote)
    );
}

#[test]
fn round_trip_realistic_arguments() {
    for input in [
        "GREETING=hello world",
        "C:\\Program Files\\app",
        "--label=cost=100%",
        "sh -c 'echo ${HOME}'",
        "tab\tseparated\tvalues",
        "ünïcode with spaces",
        "\u{1b}[1m bold",
    ] {
        let escaped = escape_systemd_argument(input);
        assert_eq!(unescape_systemd_argument(&escaped).as_deref(), Ok(input));
    }
}

#[test]
fn distinct_inputs_escape_differently() {
    let inputs = ["$", "$$", "%", "%%", "\\", "\\\\", "a b", "\"a b\""];
    let escaped: Vec<_> = inputs.iter().map(|s| escape_systemd_argument(s)).collect();
    for (i, a) in escaped.iter().enumerate() {
        for b in &escaped[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
