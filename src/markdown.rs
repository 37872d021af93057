use comrak::{ComrakOptions, markdown_to_html as render};
use once_cell::sync::Lazy;

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.tasklist = true;
    options.extension.autolink = true;
    options
});

pub fn markdown_to_html(md: &str) -> String {
    render(md, &MARKDOWN_OPTIONS)
}
