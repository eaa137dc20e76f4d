use indicatif::ProgressStyle;

const ONLY_MESSAGE_TEMPLATE: &str = "{spinner} {wide_msg}";
const TEAM_STAGE_TEMPLATE: &str = "{spinner} {prefix:24} {wide_msg}";

pub struct ProgressStyleTemplate;

impl ProgressStyleTemplate {
    pub fn only_message() -> ProgressStyle {
        ProgressStyle::with_template(ONLY_MESSAGE_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn team_stage() -> ProgressStyle {
        ProgressStyle::with_template(TEAM_STAGE_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}
