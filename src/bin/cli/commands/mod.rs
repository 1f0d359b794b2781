pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod next;
pub mod prefs;
pub mod show;
pub mod topic;
pub mod watch;
