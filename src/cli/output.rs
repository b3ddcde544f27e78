//! Console notifications and output formatting

use crate::application::Notifier;
use crate::domain::{FileEntry, HelpTopic};
use crate::error::ClialgoError;
use std::io::{self, Write};
use std::path::Path;

const DIVIDER: &str = "======================================================";

/// Format entries for display, one per line
pub fn format_entry_list(entries: &[FileEntry]) -> String {
    if entries.is_empty() {
        return "No notes found".to_string();
    }

    let mut output = String::new();
    for (idx, entry) in entries.iter().enumerate() {
        output.push_str(&format!(
            "{}. [{}] {} ({}, importance {})\n",
            idx + 1,
            entry.topic,
            entry.name,
            entry.kind,
            entry.importance
        ));
    }
    output
}

fn help_lines(topic: Option<HelpTopic>) -> &'static [&'static str] {
    match topic {
        None => &[
            "The available COMMAND_TYPE(s) are:",
            "[add]: add note",
            "[remove]: remove note",
            "[list]: displays all notes",
            "[filter]: filters notes by topic or importance",
            "[export]: exports the last listed or filtered notes",
            "[exit]: close the application",
            "For more help on a specific command, type `help c/COMMAND_TYPE`",
        ],
        Some(HelpTopic::Add) => &[
            "This function adds a note and tags it to a topic.",
            "The syntax for the 'add' command is: add n/NAME t/TOPIC [i/IMPORTANCE]. ",
            "NAME refers to the notes' file name.",
            "TOPIC refers to the topic that NAME will be tagged to.",
            "IMPORTANCE is optional, from 1 to 10 (default 5).",
            "Case sensitive. NAME and TOPIC fields must be non-empty.",
            "Invalid NAME or TOPIC will cause an error.",
        ],
        Some(HelpTopic::Remove) => &[
            "This function removes a note from the tagged topic.",
            "The syntax for the 'remove' command is: remove n/NAME.",
            "NAME refers to the notes' file name.",
            "'n/' must be included else NAME will not be read.",
            "Invalid NAME will cause an error.",
        ],
        Some(HelpTopic::List) => &[
            "This function lists all stored notes.",
            "The syntax for the 'list' command is: list.",
            "Command should only contain one word (i.e. no extensions).",
        ],
        Some(HelpTopic::Filter) => &[
            "This function filters by topic/importance and topic name.",
            "The syntax for the 'filter' command is: filter k/KEYWORD t/TOPIC_NAME",
            "KEYWORD has to be either 'topic' or 'importance'.",
            "TOPIC_NAME can be any (one) of the pre-defined topics in CS2040C.",
            "With k/importance, t/TOPIC_NAME is optional and i/MIN keeps notes of at least MIN importance.",
            "Case sensitive. KEYWORD and TOPIC_NAME fields must be non-empty.",
            "Invalid KEYWORD and/or TOPIC_NAME will cause an error.",
        ],
        Some(HelpTopic::Export) => &[
            "This function copies the notes from the last 'list' or 'filter' into the export folder.",
            "The syntax for the 'export' command is: export.",
            "Command should only contain one word (i.e. no extensions).",
        ],
        Some(HelpTopic::Exit) => &[
            "This function exits the application.",
            "The syntax for the 'exit' command is: exit.",
            "Command should only contain one word (i.e. no extensions).",
        ],
    }
}

/// Notifier that prints framed messages to a writer
pub struct ConsoleUi<W: Write> {
    out: W,
}

impl ConsoleUi<io::Stdout> {
    pub fn stdout() -> Self {
        ConsoleUi::new(io::stdout())
    }
}

impl<W: Write> ConsoleUi<W> {
    pub fn new(out: W) -> Self {
        ConsoleUi { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_block<S: AsRef<str>>(&mut self, lines: &[S]) {
        let mut text = String::new();
        text.push_str(DIVIDER);
        text.push('\n');
        for line in lines {
            text.push_str(line.as_ref());
            text.push('\n');
        }
        text.push_str(DIVIDER);
        text.push('\n');

        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "Failed to write to console");
        }
    }

    fn print_entries(&mut self, header: &str, entries: &[FileEntry]) {
        let listing = format_entry_list(entries);
        let mut lines = vec![header.to_string()];
        lines.extend(listing.lines().map(str::to_string));
        self.print_block(&lines);
    }
}

impl<W: Write> Notifier for ConsoleUi<W> {
    fn welcome(&mut self) {
        self.print_block(&["Hello! Welcome to CLIAlgo Notes!"]);
    }

    fn exit(&mut self) {
        self.print_block(&["Thank you for using CLIAlgo! Study hard!"]);
    }

    fn add_success(&mut self, name: &str, topic: &str) {
        self.print_block(&[format!("Successfully added {} into {}.", name, topic)]);
    }

    fn add_file_missing(&mut self, name: &str) {
        self.print_block(&[
            format!("Unsuccessful! {}.txt or {}.cpp does not exist.", name, name),
            "Make sure the file is in the root directory.".to_string(),
        ]);
    }

    fn add_invalid_topic(&mut self, topic: &str) {
        self.print_block(&[
            format!("Unsuccessful! {} is not a topic in CS2040C.", topic),
            "Type 'help c/add' for assistance.".to_string(),
        ]);
    }

    fn add_duplicate(&mut self, name: &str) {
        self.print_block(&[
            format!("Unsuccessful! A note named {} already exists.", name),
            "Use a different NAME or remove the old note first.".to_string(),
        ]);
    }

    fn remove_success(&mut self, name: &str) {
        self.print_block(&[format!("Successfully removed {}.", name)]);
    }

    fn remove_fail(&mut self, _name: &str) {
        self.print_block(&["Unsuccessful!", "Type 'help c/remove' for assistance."]);
    }

    fn list_success(&mut self, entries: &[FileEntry]) {
        self.print_entries("Here are all your notes:", entries);
    }

    fn list_fail(&mut self) {
        self.print_block(&["You have no notes!", "Type 'help c/list' for assistance."]);
    }

    fn filter_success(&mut self, entries: &[FileEntry]) {
        self.print_entries("Here are the filtered notes:", entries);
    }

    fn filter_fail(&mut self) {
        self.print_block(&["Unsuccessful!", "Type 'help c/filter' for assistance."]);
    }

    fn export_success(&mut self, written: usize, dir: &Path) {
        self.print_block(&[format!(
            "Exported {} file(s) to {}.",
            written,
            dir.display()
        )]);
    }

    fn export_empty(&mut self) {
        self.print_block(&["There is nothing to export.", "Use 'list' or 'filter' first."]);
    }

    fn export_folder_missing(&mut self) {
        self.print_block(&[
            "The export folder seems to be missing.",
            "The export folder has been recreated.",
            "Try the `export` command again.",
        ]);
    }

    fn export_file_missing(&mut self, entry: &FileEntry) {
        self.print_block(&[format!("File missing from root directory: {}", entry.path)]);
    }

    fn export_entry_failed(&mut self, entry: &FileEntry, reason: &str) {
        self.print_block(&[format!("Could not export {}: {}", entry.path, reason)]);
    }

    fn help(&mut self, topic: Option<HelpTopic>) {
        self.print_block(help_lines(topic));
    }

    fn invalid_command(&mut self, reason: &str) {
        self.print_block(&[
            format!("Invalid command! {}.", reason),
            "Type 'help' for a list of commands.".to_string(),
        ]);
    }

    fn operation_failed(&mut self, error: &ClialgoError) {
        self.print_block(&[format!("Unsuccessful! {}", error)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FileKind;

    fn captured<F: FnOnce(&mut ConsoleUi<Vec<u8>>)>(f: F) -> String {
        let mut ui = ConsoleUi::new(Vec::new());
        f(&mut ui);
        String::from_utf8(ui.into_inner()).unwrap()
    }

    fn framed(lines: &[&str]) -> String {
        let mut expected = format!("{}\n", DIVIDER);
        for line in lines {
            expected.push_str(line);
            expected.push('\n');
        }
        expected.push_str(DIVIDER);
        expected.push('\n');
        expected
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_entry_list(&[]), "No notes found");
    }

    #[test]
    fn test_format_entry_list() {
        let entries = vec![
            FileEntry::new("queue", "LINKED_LIST", 5, FileKind::Note),
            FileEntry::new("prim", "MINIMUM_SPANNING_TREE", 9, FileKind::Code),
        ];
        assert_eq!(
            format_entry_list(&entries),
            "1. [LINKED_LIST] queue (note, importance 5)\n\
             2. [MINIMUM_SPANNING_TREE] prim (code, importance 9)\n"
        );
    }

    #[test]
    fn test_welcome_message() {
        let out = captured(|ui| ui.welcome());
        assert_eq!(out, framed(&["Hello! Welcome to CLIAlgo Notes!"]));
    }

    #[test]
    fn test_exit_message() {
        let out = captured(|ui| ui.exit());
        assert_eq!(out, framed(&["Thank you for using CLIAlgo! Study hard!"]));
    }

    #[test]
    fn test_add_success_message() {
        let out = captured(|ui| ui.add_success("queue", "LINKED_LIST"));
        assert_eq!(out, framed(&["Successfully added queue into LINKED_LIST."]));
    }

    #[test]
    fn test_add_invalid_topic_message() {
        let out = captured(|ui| ui.add_invalid_topic("FENWICK_TREE"));
        assert_eq!(
            out,
            framed(&[
                "Unsuccessful! FENWICK_TREE is not a topic in CS2040C.",
                "Type 'help c/add' for assistance.",
            ])
        );
    }

    #[test]
    fn test_list_fail_message() {
        let out = captured(|ui| ui.list_fail());
        assert_eq!(
            out,
            framed(&["You have no notes!", "Type 'help c/list' for assistance."])
        );
    }

    #[test]
    fn test_list_success_includes_entries() {
        let entries = vec![FileEntry::new("queue", "LINKED_LIST", 5, FileKind::Note)];
        let out = captured(|ui| ui.list_success(&entries));
        assert_eq!(
            out,
            framed(&[
                "Here are all your notes:",
                "1. [LINKED_LIST] queue (note, importance 5)",
            ])
        );
    }

    #[test]
    fn test_remove_messages() {
        assert_eq!(
            captured(|ui| ui.remove_success("queue")),
            framed(&["Successfully removed queue."])
        );
        assert_eq!(
            captured(|ui| ui.remove_fail("queue")),
            framed(&["Unsuccessful!", "Type 'help c/remove' for assistance."])
        );
    }

    #[test]
    fn test_filter_fail_message() {
        let out = captured(|ui| ui.filter_fail());
        assert_eq!(
            out,
            framed(&["Unsuccessful!", "Type 'help c/filter' for assistance."])
        );
    }

    #[test]
    fn test_export_folder_missing_message() {
        let out = captured(|ui| ui.export_folder_missing());
        assert_eq!(
            out,
            framed(&[
                "The export folder seems to be missing.",
                "The export folder has been recreated.",
                "Try the `export` command again.",
            ])
        );
    }

    #[test]
    fn test_help_pages() {
        let overview = captured(|ui| ui.help(None));
        assert!(overview.contains("The available COMMAND_TYPE(s) are:"));
        assert!(overview.contains("[export]"));

        let list = captured(|ui| ui.help(Some(HelpTopic::List)));
        assert_eq!(
            list,
            framed(&[
                "This function lists all stored notes.",
                "The syntax for the 'list' command is: list.",
                "Command should only contain one word (i.e. no extensions).",
            ])
        );

        let filter = captured(|ui| ui.help(Some(HelpTopic::Filter)));
        assert!(filter.contains("filter k/KEYWORD t/TOPIC_NAME"));
    }

    #[test]
    fn test_invalid_command_includes_reason() {
        let out = captured(|ui| ui.invalid_command("Unknown command 'fly'"));
        assert!(out.contains("Invalid command! Unknown command 'fly'."));
        assert!(out.contains("Type 'help'"));
    }
}
