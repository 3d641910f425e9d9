use super::CiProvider;

/// GitHub Actions, detected by `GITHUB_ACTIONS=true`.
pub const GITHUB_ACTIONS: CiProvider = CiProvider {
    name: "github_action",
    display_name: "GitHub Actions",
    sentinel: "GITHUB_ACTIONS",
    metadata_keys: &[
        "GITHUB_JOB",
        "GITHUB_REF",
        "GITHUB_REF_NAME",
        "GITHUB_REF_TYPE",
        "GITHUB_REPOSITORY",
        "GITHUB_RUN_ID",
        "GITHUB_SHA",
        "GITHUB_RUN_ATTEMPT",
        "RUNNER_ARCH",
        "RUNNER_OS",
        "RUNNER_TEMP",
    ],
};
