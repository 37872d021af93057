use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
    pub attr: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            attr: mode.attr(),
        },
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            attr: mode.attr(),
        },
    }
}

/// Script that mirrors the active mode onto `<body data-theme>`.
pub fn apply_theme_script(mode: ThemeMode) -> String {
    format!(
        "document.body.setAttribute('data-theme', '{}');",
        theme_definition(mode).attr
    )
}

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #f7f3ea;
    --color-bg-secondary: #ffffff;
    --color-text-primary: #1b1a17;
    --color-text-muted: #5d5a52;
    --color-border: #d8d0bd;
    --color-accent: #b8860b;
    --color-surface-muted: #efe8d8;
    --color-chat-user-bg: #1b1a17;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #ffffff;
    --color-chat-assistant-text: #1b1a17;
    --color-edge-updates: #3a7bd5;
    --color-edge-relates: #7a7a7a;
    --color-edge-contradicts: #d64545;
}
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #0d0c0a;
    --color-bg-secondary: #16140f;
    --color-text-primary: #f2ede1;
    --color-text-muted: #a8a294;
    --color-border: #3a352a;
    --color-accent: #e0b341;
    --color-surface-muted: #1f1c15;
    --color-chat-user-bg: #e0b341;
    --color-chat-user-text: #0d0c0a;
    --color-chat-assistant-bg: #1f1c15;
    --color-chat-assistant-text: #f2ede1;
    --color-edge-updates: #6fa8ff;
    --color-edge-relates: #8d8d8d;
    --color-edge-contradicts: #ff6b6b;
}
"#;
