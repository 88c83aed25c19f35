use std::fs;

use smartcalc::session::Session;
use walkdir::WalkDir;

/// One prompt input and the lines it is expected to print.
struct Exchange {
    input:    String,
    expected: Vec<String>,
}

#[test]
fn session_transcripts_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/sessions").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut session = Session::new();
        for exchange in parse_transcript(&content) {
            count += 1;
            let actual: Vec<String> = session.process_line(&exchange.input)
                                             .text()
                                             .map(|text| text.split('\n').map(str::to_string).collect())
                                             .unwrap_or_default();
            assert_eq!(actual, exchange.expected, "input {:?} in {path:?}", exchange.input);
        }
    }

    assert!(count > 0, "No transcripts found in tests/sessions");
}

/// Splits a transcript into exchanges.
///
/// Lines starting with `>` are inputs (one space after `>` is dropped); all
/// lines up to the next input are that input's expected output, blank lines
/// included.
fn parse_transcript(content: &str) -> Vec<Exchange> {
    let mut exchanges: Vec<Exchange> = Vec::new();

    for line in content.lines() {
        if let Some(input) = line.strip_prefix('>') {
            let input = input.strip_prefix(' ').unwrap_or(input);
            exchanges.push(Exchange { input:    input.to_string(),
                                      expected: Vec::new(), });
        } else if let Some(current) = exchanges.last_mut() {
            current.expected.push(line.to_string());
        }
    }

    exchanges
}
