// Help text embedded at build time from docs/HELP.md.
include!(concat!(env!("OUT_DIR"), "/help_text.rs"));

pub fn get_help_content() -> &'static str {
    HELP_TEXT
}
