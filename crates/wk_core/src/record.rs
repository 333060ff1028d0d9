//! Fixed-width record protocol for handing article batches to a client.
//!
//! Each article is four left-justified, space-padded fields with no
//! separators and no record terminator; the receiver slices by the agreed
//! widths and learns the article count out of band. Over-width values are
//! truncated before padding, and a truncated summary keeps a literal
//! `...` marker as its last three characters. All widths count `char`s,
//! not bytes.

use crate::types::Article;
use crate::{Error, Result};

/// Widths of the `title`, `title_url_safe`, `pdf_url` and `summary` fields.
pub const FIELD_WIDTHS: [usize; 4] = [100, 100, 100, 300];

/// Total chars one encoded article occupies.
pub const RECORD_WIDTH: usize = 600;

const ELLIPSIS: &str = "...";

pub fn encode(articles: &[Article]) -> String {
    let mut out = String::with_capacity(articles.len() * RECORD_WIDTH);
    for article in articles {
        push_field(&mut out, &article.title, FIELD_WIDTHS[0]);
        push_field(&mut out, &article.title_url_safe, FIELD_WIDTHS[1]);
        push_field(&mut out, &article.pdf_url, FIELD_WIDTHS[2]);
        push_summary(&mut out, &article.summary, FIELD_WIDTHS[3]);
    }
    out
}

/// Split a stream produced by [`encode`] back into per-record fields,
/// trimming the trailing padding. Lossy by construction: content beyond a
/// field width, and meaningful trailing spaces, do not survive.
pub fn decode(stream: &str, widths: &[usize]) -> Result<Vec<Vec<String>>> {
    let record_width: usize = widths.iter().sum();
    let chars: Vec<char> = stream.chars().collect();

    if record_width == 0 || chars.len() % record_width != 0 {
        return Err(Error::MalformedInput(format!(
            "stream of {} chars does not divide into {}-char records",
            chars.len(),
            record_width
        )));
    }

    let mut records = Vec::with_capacity(chars.len() / record_width);
    for record in chars.chunks(record_width) {
        let mut fields = Vec::with_capacity(widths.len());
        let mut offset = 0;
        for &width in widths {
            let field: String = record[offset..offset + width].iter().collect();
            fields.push(field.trim_end_matches(' ').to_string());
            offset += width;
        }
        records.push(fields);
    }

    Ok(records)
}

fn push_field(out: &mut String, value: &str, width: usize) {
    let mut taken = 0;
    for c in value.chars().take(width) {
        out.push(c);
        taken += 1;
    }
    for _ in taken..width {
        out.push(' ');
    }
}

fn push_summary(out: &mut String, value: &str, width: usize) {
    if value.chars().count() > width {
        for c in value.chars().take(width - ELLIPSIS.len()) {
            out.push(c);
        }
        out.push_str(ELLIPSIS);
    } else {
        push_field(out, value, width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, summary: &str) -> Article {
        Article::from_title(title, summary.to_string(), vec![]).unwrap()
    }

    #[test]
    fn encoded_length_is_exactly_record_width_per_article() {
        let articles = vec![
            article("Short", "tiny"),
            article(&"T".repeat(250), &"s".repeat(1000)),
            article("Średnia", "multibyte summary ążś"),
        ];

        let encoded = encode(&articles);
        assert_eq!(encoded.chars().count(), articles.len() * RECORD_WIDTH);
    }

    #[test]
    fn over_width_summary_ends_in_ellipsis() {
        let encoded = encode(&[article("A", &"x".repeat(500))]);

        let summary_field: String = encoded
            .chars()
            .skip(FIELD_WIDTHS[0] + FIELD_WIDTHS[1] + FIELD_WIDTHS[2])
            .collect();
        assert_eq!(summary_field.chars().count(), 300);
        assert!(summary_field.ends_with("..."));
        assert!(summary_field.starts_with(&"x".repeat(297)));
    }

    #[test]
    fn exact_width_summary_is_not_marked() {
        let encoded = encode(&[article("A", &"y".repeat(300))]);
        let summary_field: String = encoded.chars().skip(300).collect();
        assert_eq!(summary_field, "y".repeat(300));
    }

    #[test]
    fn decode_reproduces_fields_truncated_to_their_widths() {
        let long_title = "L".repeat(150);
        let articles = vec![article(&long_title, &"s".repeat(400)), article("B", "short")];

        let decoded = decode(&encode(&articles), &FIELD_WIDTHS).unwrap();

        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0][0], "L".repeat(100));
        assert_eq!(decoded[0][1], articles[0].title_url_safe.chars().take(100).collect::<String>());
        assert_eq!(decoded[0][3], format!("{}...", "s".repeat(297)));
        assert_eq!(decoded[1][0], "B");
        assert_eq!(decoded[1][2], articles[1].pdf_url);
        assert_eq!(decoded[1][3], "short");
    }

    #[test]
    fn decode_rejects_partial_records() {
        let mut encoded = encode(&[article("A", "s")]);
        encoded.pop();

        let err = decode(&encoded, &FIELD_WIDTHS).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }

    #[test]
    fn decode_trims_only_trailing_padding() {
        let decoded = decode(&encode(&[article("A", "  leading and inner  kept")]), &FIELD_WIDTHS).unwrap();
        assert_eq!(decoded[0][3], "  leading and inner  kept");
    }
}
