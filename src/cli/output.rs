//! Output formatting utilities

use crate::domain::{Entry, Journal};

fn journal_name(journal: Option<i64>, journals: &[Journal]) -> Option<&str> {
    let id = journal?;
    journals
        .iter()
        .find(|j| j.id == id)
        .map(|j| j.name.as_str())
}

/// Format one entry as a single line
pub fn format_entry(entry: &Entry, journals: &[Journal]) -> String {
    match journal_name(entry.journal, journals) {
        Some(name) => format!(
            "{:>4}  {}  [{}]  {}",
            entry.id, entry.time, name, entry.content
        ),
        None => format!("{:>4}  {}  {}", entry.id, entry.time, entry.content),
    }
}

/// Format a list of entries for display
pub fn format_entry_list(entries: &[Entry], journals: &[Journal]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format_entry(entry, journals));
        output.push('\n');
    }
    output
}

/// Format a list of journals for display
pub fn format_journal_list(journals: &[Journal]) -> String {
    if journals.is_empty() {
        return "No journals found".to_string();
    }

    let mut output = String::new();
    for journal in journals {
        output.push_str(&format!("{:>4}  {}\n", journal.id, journal.name));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, content: &str, journal: Option<i64>) -> Entry {
        Entry {
            id,
            time: "2021-04-10T15:00:00Z".to_string(),
            content: content.to_string(),
            journal,
        }
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_entry_list(&[], &[]), "No entries found");
    }

    #[test]
    fn test_format_entry_list() {
        let journals = vec![Journal {
            id: 1,
            name: "Work".to_string(),
        }];
        let entries = vec![entry(1, "Smash!", Some(1)), entry(2, "Smash 2!", None)];

        let output = format_entry_list(&entries, &journals);
        assert_eq!(
            output,
            "   1  2021-04-10T15:00:00Z  [Work]  Smash!\n   2  2021-04-10T15:00:00Z  Smash 2!\n"
        );
    }

    #[test]
    fn test_format_entry_with_unknown_journal() {
        let output = format_entry(&entry(3, "orphan", Some(99)), &[]);
        assert_eq!(output, "   3  2021-04-10T15:00:00Z  orphan");
    }

    #[test]
    fn test_format_journal_list() {
        assert_eq!(format_journal_list(&[]), "No journals found");

        let journals = vec![Journal {
            id: 2,
            name: "Home".to_string(),
        }];
        assert_eq!(format_journal_list(&journals), "   2  Home\n");
    }
}
