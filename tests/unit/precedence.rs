//! Precedence tests
//!
//! The table is first-match-wins. These tests build inputs that satisfy more than one
//! entry and check that the earlier entry decides.

use crate::common::fixtures::padded;
use crate::common::matched_index;
use content_sniffer::sniff::{sniff, Rule, SIGNATURES};
use content_sniffer::types::MatchSource;

/// Build an input that satisfies `rule` on its own
fn sample_for(rule: &Rule) -> Vec<u8> {
    match rule {
        Rule::Signature(signature) => {
            let mut data = signature.pattern.to_vec();
            if signature.tag_terminated {
                data.push(b'>');
            }
            data
        }
        Rule::Mp4Box => b"\x00\x00\x00\x10ftypmp42\x00\x00\x00\x00".to_vec(),
    }
}

#[test]
fn test_every_rule_matches_its_own_sample() {
    for rule in SIGNATURES {
        assert!(rule.matches(&sample_for(rule)), "{}", rule.name());
    }
}

#[test]
fn test_earliest_matching_rule_wins() {
    for (position, rule) in SIGNATURES.iter().enumerate() {
        let sample = sample_for(rule);
        let winner = matched_index(&sample)
            .unwrap_or_else(|| panic!("{} sample fell through to a fallback", rule.name()));

        assert!(
            winner <= position,
            "{} sample decided by later entry {}",
            rule.name(),
            SIGNATURES[winner].name()
        );
        assert!(
            SIGNATURES[..winner].iter().all(|r| !r.matches(&sample)),
            "{} sample matched an entry ahead of the winner",
            rule.name()
        );
    }
}

#[test]
fn test_most_samples_are_decided_by_their_own_rule() {
    // Only entries sharing a result type with an earlier, broader entry may be shadowed
    for (position, rule) in SIGNATURES.iter().enumerate() {
        let winner = matched_index(&sample_for(rule)).unwrap();
        if winner != position {
            assert_eq!(
                SIGNATURES[winner].mime_type(),
                rule.mime_type(),
                "{} shadowed by {}",
                rule.name(),
                SIGNATURES[winner].name()
            );
        }
    }
}

#[test]
fn test_fontobject_precedes_truetype() {
    // A TrueType header that also carries "LP" at offset 34
    let mut data = padded(b"\x00\x01\x00\x00", 0x00, 34);
    data.extend_from_slice(b"LP");
    assert_eq!(sniff(&data).mime_type, "application/vnd.ms-fontobject");
}

#[test]
fn test_icon_precedes_fontobject() {
    let mut data = padded(b"\x00\x00\x01\x00", 0x00, 34);
    data.extend_from_slice(b"LP");
    assert_eq!(sniff(&data).mime_type, "image/x-icon");
}

#[test]
fn test_signatures_precede_binary_fallback() {
    // 0x1A and control bytes would otherwise classify these as binary
    assert_eq!(sniff(b"\x1A\x45\xDF\xA3\x9F\x42\x86\x81").mime_type, "video/webm");
    assert_eq!(
        sniff(b"\xFE\xFF\x00\x01\x00\x02\x00\x03").mime_type,
        "text/plain; charset=utf-16be"
    );
    assert_eq!(sniff(b"\x00\x00\x01\x00\x01\x00\x10\x10").mime_type, "image/x-icon");
}

#[test]
fn test_html_precedes_xml_and_text() {
    let detection = sniff(b"<!-- <?xml version=\"1.0\"?> -->");
    assert_eq!(detection.mime_type, "text/html; charset=utf-8");
    assert!(matches!(
        detection.source,
        MatchSource::Signature {
            name: "HTML comment",
            ..
        }
    ));
}

#[test]
fn test_short_tag_requires_terminator() {
    // "<B" needs a terminator, so "<BODY>" falls through to the <body> entry
    let body = sniff(b"<BODY>");
    assert!(matches!(
        body.source,
        MatchSource::Signature {
            name: "HTML <body>",
            ..
        }
    ));
    let bold = sniff(b"<b>bold</b>");
    assert!(matches!(
        bold.source,
        MatchSource::Signature {
            name: "HTML <b>",
            ..
        }
    ));
}

#[test]
fn test_riff_variants_resolve_by_form_type() {
    assert_eq!(sniff(b"RIFF\x24\x08\x00\x00WEBPVP8 ").mime_type, "image/webp");
    assert_eq!(sniff(b"RIFF\x24\x08\x00\x00AVI LIST").mime_type, "video/avi");
    assert_eq!(sniff(b"RIFF\x24\x08\x00\x00WAVEfmt ").mime_type, "audio/wave");
    // Unknown form type with no control bytes falls through to text
    assert_eq!(
        sniff(b"RIFF\x24\x21\x21\x21CDXAfmt ").mime_type,
        "text/plain; charset=utf-8"
    );
}
