use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse grouping of an upstream tool, derived from its name.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Issue,
    Pr,
    Branch,
    Commit,
    Release,
    Gist,
    Repo,
    User,
    Org,
    File,
    Label,
    Milestone,
    Comment,
    Review,
    Actions,
    Other,
}

/// Keyword table in match priority order. The first row with a keyword contained in the
/// lowercased tool name wins.
const KEYWORDS: &[(&[&str], Category)] = &[
    (&["issue"], Category::Issue),
    (&["pull", "pr"], Category::Pr),
    (&["branch"], Category::Branch),
    (&["commit"], Category::Commit),
    (&["release"], Category::Release),
    (&["gist"], Category::Gist),
    (&["repo"], Category::Repo),
    (&["user"], Category::User),
    (&["org"], Category::Org),
    (&["file", "content"], Category::File),
    (&["label"], Category::Label),
    (&["milestone"], Category::Milestone),
    (&["comment"], Category::Comment),
    (&["review"], Category::Review),
    (&["workflow", "action"], Category::Actions),
];

impl Category {
    /// Order used when advertising the category enum in the `list_blocked_tools` schema.
    pub const SCHEMA_ORDER: [Category; 16] = [
        Category::Issue,
        Category::Pr,
        Category::Repo,
        Category::Branch,
        Category::Commit,
        Category::Release,
        Category::Gist,
        Category::User,
        Category::Org,
        Category::File,
        Category::Label,
        Category::Milestone,
        Category::Comment,
        Category::Review,
        Category::Actions,
        Category::Other,
    ];

    /// Classify a tool by keyword match against its lowercased name.
    pub fn infer(tool_name: &str) -> Self {
        let name = tool_name.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|kw| name.contains(kw)))
            .map(|(_, category)| *category)
            .unwrap_or(Category::Other)
    }

    /// Exact, case-sensitive lookup of a wire name (`"issue"`, `"pr"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::SCHEMA_ORDER
            .iter()
            .copied()
            .find(|category| category.as_str() == name)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Issue => "issue",
            Category::Pr => "pr",
            Category::Branch => "branch",
            Category::Commit => "commit",
            Category::Release => "release",
            Category::Gist => "gist",
            Category::Repo => "repo",
            Category::User => "user",
            Category::Org => "org",
            Category::File => "file",
            Category::Label => "label",
            Category::Milestone => "milestone",
            Category::Comment => "comment",
            Category::Review => "review",
            Category::Actions => "actions",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_uses_first_matching_keyword() {
        assert_eq!(Category::infer("create_issue"), Category::Issue);
        assert_eq!(Category::infer("add_issue_comment"), Category::Issue);
        assert_eq!(Category::infer("merge_pull_request"), Category::Pr);
        assert_eq!(Category::infer("create_branch"), Category::Branch);
        assert_eq!(Category::infer("list_commits"), Category::Commit);
        assert_eq!(Category::infer("get_latest_release"), Category::Release);
        assert_eq!(Category::infer("create_gist"), Category::Gist);
        assert_eq!(Category::infer("fork_repository"), Category::Repo);
        assert_eq!(Category::infer("get_me_user"), Category::User);
        assert_eq!(Category::infer("list_org_teams"), Category::Org);
        assert_eq!(Category::infer("get_file_contents"), Category::File);
        assert_eq!(Category::infer("list_labels"), Category::Label);
        assert_eq!(Category::infer("list_milestones"), Category::Milestone);
        assert_eq!(Category::infer("list_workflow_runs"), Category::Actions);
        assert_eq!(Category::infer("get_me"), Category::Other);
    }

    #[test]
    fn infer_is_case_insensitive() {
        assert_eq!(Category::infer("Create_ISSUE"), Category::Issue);
    }

    #[test]
    fn pr_keyword_is_a_plain_substring() {
        // "projects" contains "pr", which outranks everything below it in the table.
        assert_eq!(Category::infer("list_projects"), Category::Pr);
        assert_eq!(Category::infer("search_repositories"), Category::Repo);
    }

    #[test]
    fn from_name_is_exact() {
        assert_eq!(Category::from_name("issue"), Some(Category::Issue));
        assert_eq!(Category::from_name("actions"), Some(Category::Actions));
        assert_eq!(Category::from_name("Issue"), None);
        assert_eq!(Category::from_name("bogus"), None);
    }

    #[test]
    fn serializes_as_wire_name() {
        for category in Category::SCHEMA_ORDER {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, serde_json::Value::String(category.to_string()));
        }
    }
}
