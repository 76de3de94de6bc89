//! Fixed, non-configurable values used by the fetcher, loader and CLI
//!
//! Only the API base URL can be overridden (see `ApiPolicy::with_base_url`);
//! everything else here is policy.

/// Public GitHub REST endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Media type pinning the REST API version.
pub const GITHUB_API_VERSION: &str = "application/vnd.github.v3+json";

pub const STATUS_OK: u16 = 200;
pub const STATUS_NOT_FOUND: u16 = 404;

/// Error bodies are cut to this many characters.
pub const RESPONSE_TRUNCATE_CHARS: usize = 100;

/// Blob ids are shown with this many characters.
pub const SHA_DISPLAY_CHARS: usize = 8;

/// Value of the `encoding` field that marks base64 payloads.
pub const BASE64_ENCODING: &str = "base64";

pub const DEFAULT_ENV_FILE: &str = ".env";
pub const DEFAULT_CONFIG_FILE: &str = "answer_config.yaml";

pub const TOKEN_VAR: &str = "MCP_GITHUB_TOKEN";
pub const ORG_VAR: &str = "GITHUB_EVAL_ORG";
pub const API_URL_VAR: &str = "GHVERIFY_API_URL";

/// Width of the `=` banner framing a run.
pub const SEPARATOR_WIDTH: usize = 60;

/// Required keys of the expectation file
pub mod fields {
    pub const TARGET_REPO: &str = "target_repo";
    pub const TARGET_BRANCH: &str = "target_branch";
    pub const ANSWER_FILE_PATH: &str = "answer_file_path";
    pub const EXPECTED_CONTENT: &str = "expected_content";

    pub const ALL: [&str; 4] = [
        TARGET_REPO,
        TARGET_BRANCH,
        ANSWER_FILE_PATH,
        EXPECTED_CONTENT,
    ];
}
