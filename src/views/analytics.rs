use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileStatus {
    Processed,
    Transmuted,
    Verified,
    Pending,
}

impl FileStatus {
    pub fn label(self) -> &'static str {
        match self {
            FileStatus::Processed => "Processed",
            FileStatus::Transmuted => "Transmuted",
            FileStatus::Verified => "Verified",
            FileStatus::Pending => "Pending",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            FileStatus::Processed => "processed",
            FileStatus::Transmuted => "transmuted",
            FileStatus::Verified => "verified",
            FileStatus::Pending => "pending",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileRecord {
    pub id: u32,
    pub name: &'static str,
    pub size: &'static str,
    pub kind: &'static str,
    pub status: FileStatus,
}

pub static FILE_RECORDS: [FileRecord; 5] = [
    FileRecord {
        id: 1,
        name: "core_engine.py",
        size: "45 KB",
        kind: "Python",
        status: FileStatus::Processed,
    },
    FileRecord {
        id: 2,
        name: "user_metrics.json",
        size: "1.2 MB",
        kind: "JSON",
        status: FileStatus::Transmuted,
    },
    FileRecord {
        id: 3,
        name: "alchemy_config.yaml",
        size: "12 KB",
        kind: "YAML",
        status: FileStatus::Verified,
    },
    FileRecord {
        id: 4,
        name: "raw_database_dump.sql",
        size: "15.4 MB",
        kind: "SQL",
        status: FileStatus::Pending,
    },
    FileRecord {
        id: 5,
        name: "style_guide.css",
        size: "8 KB",
        kind: "CSS",
        status: FileStatus::Processed,
    },
];

/// Case-insensitive substring match on the file name, in manifest order.
pub fn filter_files(search: &str) -> Vec<&'static FileRecord> {
    let needle = search.to_lowercase();
    FILE_RECORDS
        .iter()
        .filter(|file| file.name.to_lowercase().contains(&needle))
        .collect()
}

#[component]
pub fn Analytics() -> Element {
    let mut search = use_signal(String::new);
    let matches = filter_files(&search());

    rsx! {
        div { class: "analytics-page",
            div { class: "analytics-container",
                div { class: "analytics-header",
                    h1 { "Analytics Vault" }
                    input {
                        r#type: "text",
                        class: "search-input",
                        placeholder: "Search manifest...",
                        value: "{search}",
                        oninput: move |ev| search.set(ev.value()),
                    }
                }
                div { class: "file-list-wrapper",
                    div { class: "list-header",
                        span { "File Name" }
                        span { "Type" }
                        span { "Size" }
                        span { "Status" }
                    }
                    div { class: "scrollable-list",
                        for file in matches.iter() {
                            div { key: "{file.id}", class: "file-row",
                                span { class: "file-name", "{file.name}" }
                                span { class: "file-type", "{file.kind}" }
                                span { class: "file-size", "{file.size}" }
                                span {
                                    class: format_args!("file-status {}", file.status.css_class()),
                                    "{file.status.label()}"
                                }
                            }
                        }
                        if matches.is_empty() {
                            p { class: "no-results", "No matches found in the vault." }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_is_case_insensitive() {
        let names: Vec<_> = filter_files("CORE").iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["core_engine.py"]);
    }

    #[test]
    fn partial_match_keeps_order() {
        let names: Vec<_> = filter_files("_").iter().map(|f| f.id).collect();
        assert_eq!(names, vec![1, 2, 3, 4, 5]);

        let names: Vec<_> = filter_files("a").iter().map(|f| f.id).collect();
        assert_eq!(names, vec![3, 4]);
    }

    #[test]
    fn status_classes_are_lowercase_labels() {
        for file in FILE_RECORDS.iter() {
            assert_eq!(file.status.css_class(), file.status.label().to_lowercase());
        }
    }
}
