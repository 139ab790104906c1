//! Minimal CSV codec for the table file and the export
//!
//! RFC 4180 subset: fields containing commas, double quotes, or line breaks
//! are quoted, quotes are doubled, records end with `\n`. The parser accepts
//! both `\n` and `\r\n` record endings and lets quoted fields span lines.

/// Append one record (with its trailing newline) to `out`.
pub fn push_record(out: &mut String, fields: &[String]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push('\n');
}

/// Format one record as a standalone string.
pub fn format_record(fields: &[String]) -> String {
    let mut out = String::new();
    push_record(&mut out, fields);
    out
}

fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\n', '\r']) {
        out.push('"');
        for c in field.chars() {
            if c == '"' {
                out.push('"');
            }
            out.push(c);
        }
        out.push('"');
    } else {
        out.push_str(field);
    }
}

/// Parse a whole document into records of fields.
///
/// An unterminated quoted field runs to the end of input rather than
/// failing; the table is only ever written by this codec, so that case
/// means an external edit and the salvaged cells are still usable.
pub fn parse(input: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut pending = false; // current record has consumed input

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            '"' => {
                in_quotes = true;
                pending = true;
            }
            ',' => {
                record.push(std::mem::take(&mut field));
                pending = true;
            }
            '\r' => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
                pending = false;
            }
            _ => {
                field.push(c);
                pending = true;
            }
        }
    }

    if pending || !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    records
}
