//! Serializations of a finished message.
//!
//! Every export works from the flattened subject and body; annotations never
//! leave the editor.

use crate::model::template::Language;
use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Flattened subject and body of a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub subject: String,
    pub body: String,
}

/// Which part of the message a copy action takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyTarget {
    Subject,
    Body,
    #[default]
    All,
}

/// Template id and language carried by a shared link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeepLink {
    pub id: Option<String>,
    pub language: Option<Language>,
}

/// Text placed on the clipboard: subject, body, or both separated by a
/// blank line.
pub fn copy_text(target: CopyTarget, message: &Message) -> String {
    match target {
        CopyTarget::Subject => message.subject.clone(),
        CopyTarget::Body => message.body.clone(),
        CopyTarget::All => format!("{}\n\n{}", message.subject, message.body),
    }
}

/// `mailto:` URL that opens the default mail client with the message
/// prefilled. Line breaks in the body are sent as CRLF.
pub fn mailto_url(message: &Message) -> String {
    format!(
        "mailto:?subject={}&body={}",
        urlencoding::encode(&message.subject),
        urlencoding::encode(&to_crlf(&message.body))
    )
}

/// Unsent RFC 5322 message (`.eml`) that mail clients open as a draft.
pub fn to_eml(message: &Message, language: Language, now: DateTime<Utc>) -> String {
    let mut eml = String::new();
    push_header(&mut eml, "Date", &now.to_rfc2822());
    push_header(&mut eml, "Subject", &encode_header(&message.subject));
    push_header(
        &mut eml,
        "Message-ID",
        &format!("<{}@courriel.local>", uuid::Uuid::new_v4().simple()),
    );
    push_header(&mut eml, "MIME-Version", "1.0");
    push_header(&mut eml, "X-Unsent", "1");
    push_header(&mut eml, "Content-Language", language.code());
    push_header(&mut eml, "Content-Type", "text/plain; charset=UTF-8");
    push_header(&mut eml, "Content-Transfer-Encoding", "base64");
    eml.push_str("\r\n");

    let encoded = general_purpose::STANDARD.encode(to_crlf(&message.body));
    for line in encoded.as_bytes().chunks(76) {
        // base64 output is ASCII
        eml.push_str(&String::from_utf8_lossy(line));
        eml.push_str("\r\n");
    }
    eml
}

/// Minimal standalone HTML document. Blank lines separate paragraphs and
/// single newlines become `<br>`.
pub fn to_html(message: &Message, language: Language) -> String {
    let paragraphs: String = normalize_newlines(&message.body)
        .split("\n\n")
        .filter(|p| !p.trim().is_empty())
        .map(|p| format!("<p>{}</p>\n", escape_html(p).replace('\n', "<br>\n")))
        .collect();

    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n{paragraphs}</body>\n</html>\n",
        lang = language.code(),
        title = escape_html(&message.subject),
    )
}

/// Link that reopens `template_id` in `language`.
pub fn deep_link(base: &str, template_id: &str, language: Language) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!(
        "{base}{separator}id={}&lang={}",
        urlencoding::encode(template_id),
        language.code()
    )
}

/// Reads `id` and `lang` from a URL or a bare query string. Unknown
/// languages are ignored.
pub fn parse_deep_link(url: &str) -> DeepLink {
    let query = url.split_once('?').map_or(url, |(_, q)| q);
    let query = query.split_once('#').map_or(query, |(q, _)| q);

    let mut link = DeepLink::default();
    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let value = value.replace('+', " ");
        let Ok(value) = urlencoding::decode(&value) else {
            continue;
        };
        match key {
            "id" if !value.is_empty() => link.id = Some(value.into_owned()),
            "lang" => link.language = value.parse().ok(),
            _ => {}
        }
    }
    link
}

/// Escapes special HTML characters.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn push_header(out: &mut String, name: &str, value: &str) {
    out.push_str(name);
    out.push_str(": ");
    out.push_str(value);
    out.push_str("\r\n");
}

/// Longest RFC 2047 encoded-word.
const MAX_ENCODED_WORD: usize = 75;

/// Header value safe to place on one logical header line. Line breaks become
/// spaces; non-ASCII values become RFC 2047 encoded-words folded onto
/// continuation lines.
fn encode_header(value: &str) -> String {
    let value: String = value
        .chars()
        .map(|c| if c == '\r' || c == '\n' { ' ' } else { c })
        .collect();
    if value.is_ascii() {
        return value;
    }

    // `=?UTF-8?B?` + `?=` around the payload; base64 turns 3 bytes into 4.
    let max_bytes = (MAX_ENCODED_WORD - 12) / 4 * 3;
    let mut words = Vec::new();
    let mut chunk = String::new();
    for c in value.chars() {
        if chunk.len() + c.len_utf8() > max_bytes {
            words.push(encoded_word(&chunk));
            chunk.clear();
        }
        chunk.push(c);
    }
    if !chunk.is_empty() {
        words.push(encoded_word(&chunk));
    }
    words.join("\r\n ")
}

fn encoded_word(text: &str) -> String {
    format!("=?UTF-8?B?{}?=", general_purpose::STANDARD.encode(text))
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn to_crlf(text: &str) -> String {
    normalize_newlines(text).replace('\n', "\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn message() -> Message {
        Message {
            subject: "Devis n° 12".into(),
            body: "Bonjour,\nvoici le devis.\n\nMerci & à bientôt".into(),
        }
    }

    #[test]
    fn copy_all_joins_with_blank_line() {
        let msg = Message {
            subject: "S".into(),
            body: "B".into(),
        };
        assert_eq!(copy_text(CopyTarget::All, &msg), "S\n\nB");
        assert_eq!(copy_text(CopyTarget::Subject, &msg), "S");
        assert_eq!(copy_text(CopyTarget::Body, &msg), "B");
    }

    #[test]
    fn mailto_encodes_components_and_crlf() {
        let msg = Message {
            subject: "Hi there".into(),
            body: "a\nb&c".into(),
        };
        assert_eq!(mailto_url(&msg), "mailto:?subject=Hi%20there&body=a%0D%0Ab%26c");
    }

    #[test]
    fn eml_has_encoded_subject_and_base64_body() {
        let now = Utc.with_ymd_and_hms(2025, 10, 15, 7, 40, 0).unwrap();
        let eml = to_eml(&message(), Language::Fr, now);
        assert!(eml.starts_with("Date: Wed, 15 Oct 2025 07:40:00 +0000\r\n"));
        assert!(eml.contains(&format!(
            "Subject: =?UTF-8?B?{}?=\r\n",
            general_purpose::STANDARD.encode("Devis n° 12")
        )));
        assert!(eml.contains("X-Unsent: 1\r\n"));

        let (_, body) = eml.split_once("\r\n\r\n").unwrap();
        let decoded = general_purpose::STANDARD
            .decode(body.replace("\r\n", ""))
            .unwrap();
        assert_eq!(
            String::from_utf8(decoded).unwrap(),
            "Bonjour,\r\nvoici le devis.\r\n\r\nMerci & à bientôt"
        );
        assert!(body.lines().all(|line| line.len() <= 76));
    }

    #[test]
    fn eml_subject_line_breaks_stay_in_one_header() {
        let msg = Message {
            subject: "Hello\r\nBcc: victim@example.com".into(),
            body: "x".into(),
        };
        let eml = to_eml(&msg, Language::En, Utc::now());
        assert!(eml.contains("Subject: Hello  Bcc: victim@example.com\r\n"));
        assert!(!eml.contains("\r\nBcc:"));
    }

    #[test]
    fn long_non_ascii_subject_is_folded_into_short_words() {
        let subject = "Relance concernant la facture impayée du trimestre précédent é";
        let header = encode_header(subject);
        let words: Vec<&str> = header.split("\r\n ").collect();
        assert!(words.len() > 1);
        for word in &words {
            assert!(word.len() <= MAX_ENCODED_WORD, "{} is too long", word);
            assert!(word.starts_with("=?UTF-8?B?") && word.ends_with("?="));
        }
        let decoded: String = words
            .iter()
            .map(|w| {
                let payload = &w["=?UTF-8?B?".len()..w.len() - 2];
                String::from_utf8(general_purpose::STANDARD.decode(payload).unwrap()).unwrap()
            })
            .collect();
        assert_eq!(decoded, subject);
    }

    #[test]
    fn html_escapes_and_splits_paragraphs() {
        let html = to_html(&message(), Language::Fr);
        assert!(html.contains("<html lang=\"fr\">"));
        assert!(html.contains("<title>Devis n° 12</title>"));
        assert!(html.contains("<p>Bonjour,<br>\nvoici le devis.</p>\n<p>Merci &amp; à bientôt</p>\n"));
    }

    #[test]
    fn deep_link_round_trip() {
        let link = deep_link("https://example.org/app/", "quote follow-up", Language::En);
        assert_eq!(link, "https://example.org/app/?id=quote%20follow-up&lang=en");
        assert_eq!(
            parse_deep_link(&link),
            DeepLink {
                id: Some("quote follow-up".into()),
                language: Some(Language::En),
            }
        );
        assert_eq!(
            deep_link("https://x.org/?debug=1", "a", Language::Fr),
            "https://x.org/?debug=1&id=a&lang=fr"
        );
    }

    #[test]
    fn deep_link_ignores_unknown_language_and_fragments() {
        assert_eq!(
            parse_deep_link("?lang=de&id=abc#top"),
            DeepLink {
                id: Some("abc".into()),
                language: None,
            }
        );
        assert_eq!(parse_deep_link("https://x.org/"), DeepLink::default());
    }

    #[test]
    fn deep_link_decodes_plus_and_percent_spaces() {
        assert_eq!(
            parse_deep_link("https://x.org/?id=quote+follow%20up&lang=fr"),
            DeepLink {
                id: Some("quote follow up".into()),
                language: Some(Language::Fr),
            }
        );
    }
}
