use crate::core::DuplicateSet;
use std::io::{self, Write};

pub const NO_DUPLICATES_MESSAGE: &str = "No duplicate names found.";
pub const DUPLICATES_HEADER: &str = "Duplicate names found:";

/// Report lines for a duplicate set, without trailing newlines.
pub fn report_lines(duplicates: &DuplicateSet) -> Vec<String> {
    if duplicates.is_empty() {
        return vec![NO_DUPLICATES_MESSAGE.to_string()];
    }

    let mut lines = Vec::with_capacity(duplicates.len() + 1);
    lines.push(DUPLICATES_HEADER.to_string());
    for (name, count) in duplicates.iter() {
        lines.push(format!("{}: {} occurrences", name, count));
    }
    lines
}

pub fn render_report(duplicates: &DuplicateSet) -> String {
    let mut out = String::new();
    for line in report_lines(duplicates) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

pub fn write_report<W: Write>(writer: &mut W, duplicates: &DuplicateSet) -> io::Result<()> {
    writer.write_all(render_report(duplicates).as_bytes())?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NameTally;

    fn duplicates_of(names: &[&str]) -> DuplicateSet {
        let tally: NameTally = names.iter().copied().collect();
        DuplicateSet::from_tally(&tally)
    }

    #[test]
    fn test_empty_set_prints_fixed_message() {
        assert_eq!(
            render_report(&DuplicateSet::default()),
            "No duplicate names found.\n"
        );
    }

    #[test]
    fn test_header_then_one_line_per_duplicate() {
        let report = render_report(&duplicates_of(&["a", "b", "a", "c", "c", "c"]));
        assert_eq!(
            report,
            "Duplicate names found:\na: 2 occurrences\nc: 3 occurrences\n"
        );
    }

    #[test]
    fn test_write_report_to_buffer() {
        let mut buffer = Vec::new();
        write_report(&mut buffer, &duplicates_of(&["🙂", "🙂"])).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Duplicate names found:\n🙂: 2 occurrences\n"
        );
    }
}
