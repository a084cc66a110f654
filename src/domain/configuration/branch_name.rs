use rand::Rng;
use rand::distributions::Alphanumeric;

/// Placeholder in the default PR branch replaced once per run.
pub const RANDOM_PLACEHOLDER: &str = "<random>";
pub const DEFAULT_PR_BRANCH: &str = "bpr-<random>";

const SUFFIX_LEN: usize = 8;

/// Expand `<random>` in `template` with a lowercase alphanumeric suffix.
///
/// Templates without the placeholder are returned unchanged.
pub fn expand_branch_name(template: &str) -> String {
    if !template.contains(RANDOM_PLACEHOLDER) {
        return template.to_string();
    }
    template.replace(RANDOM_PLACEHOLDER, &random_suffix())
}

fn random_suffix() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect()
}
