//! Operation kinds measured by the SPEC SFS 2014 client.
//!
//! The set is closed: anything the client prints that is not listed here is
//! treated as noise by the detail-block parser.

use serde::Serialize;

/// One of the whitelisted benchmark operations.
///
/// Declaration order is the order operations appear in a report.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum OpKind {
    Write,
    WriteFile,
    MmapWrite,
    MmapRead,
    Read,
    ReadFile,
    Mkdir,
    Rmdir,
    Unlink,
    Unlink2,
    Create,
    Stat,
    Append,
    Lock,
    Access,
    Chmod,
    Readdir,
    RandomWrite,
    RandomRead,
    ReadModifyWrite,
    #[strum(to_string = "open file")]
    #[serde(rename = "open file")]
    OpenFile,
    #[strum(to_string = "close file")]
    #[serde(rename = "close file")]
    CloseFile,
    Copyfile,
    Rename,
    Statfs,
    Pathconf,
    Custom1,
    Custom2,
}

impl OpKind {
    /// Look up an operation by the name the client prints, ignoring case.
    pub fn from_log_name(name: &str) -> Option<Self> {
        name.trim().parse().ok()
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn whitelist_has_all_operations() {
        assert_eq!(OpKind::iter().count(), 28);
    }

    #[test]
    fn names_round_trip_through_display() {
        for op in OpKind::iter() {
            assert_eq!(OpKind::from_log_name(&op.to_string()), Some(op));
        }
    }

    #[test]
    fn lookup_ignores_case_and_keeps_spaced_names() {
        assert_eq!(OpKind::from_log_name("WRITE"), Some(OpKind::Write));
        assert_eq!(OpKind::from_log_name("Open File"), Some(OpKind::OpenFile));
        assert_eq!(OpKind::from_log_name("read_modify_write"), Some(OpKind::ReadModifyWrite));
        assert_eq!(OpKind::CloseFile.as_str(), "close file");
        assert_eq!(OpKind::Unlink2.as_str(), "unlink2");
        assert_eq!(OpKind::from_log_name("truncate"), None);
    }
}
