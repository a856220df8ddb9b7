//! CSV export of logged history

use crate::domain::ProgressionRecord;

/// Escape one CSV field: quote when it contains a comma, quote, or
/// newline, doubling embedded quotes.
fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render the history of one or more profiles as CSV, header included.
/// The single-profile export is just this over a one-element slice.
pub fn history_csv(records: &[ProgressionRecord]) -> String {
    let mut out = String::from("profile,date,title,category,points,timestamp\n");
    for record in records {
        for entry in &record.history {
            out.push_str(&format!(
                "{},{},{},{},{},{}\n",
                csv_escape(&record.name),
                entry.date,
                csv_escape(&entry.title),
                csv_escape(&entry.category),
                entry.points,
                entry.timestamp,
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ActionEntry;

    #[test]
    fn test_csv_escape() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_history_csv_rows() {
        let mut record = ProgressionRecord::new("alice", "2025-W10");
        record.history.push(ActionEntry {
            id: "e1".to_string(),
            date: "2025-03-03".to_string(),
            quest_id: None,
            title: "Read, write, think".to_string(),
            category: "Learning".to_string(),
            points: 30,
            icon: None,
            timestamp: 1_741_000_000_000,
        });

        let csv = history_csv(&[record]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "profile,date,title,category,points,timestamp");
        assert_eq!(
            lines[1],
            "alice,2025-03-03,\"Read, write, think\",Learning,30,1741000000000"
        );
    }
}
