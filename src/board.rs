use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("No group at index {0}")]
    GroupOutOfRange(usize),

    #[error("\"{name}\" is not in group {group}")]
    MemberNotFound { name: String, group: usize },
}

/// One drawn group: its members plus an optional custom label.
#[derive(Debug, Clone, Serialize)]
pub struct Group {
    pub label: Option<String>,
    pub members: Vec<String>,
}

/// A draw result as the user sees it: labeled groups that can still be
/// rearranged by hand after the random assignment.
#[derive(Debug, Clone, Serialize)]
pub struct GroupBoard {
    groups: Vec<Group>,
}

impl GroupBoard {
    pub fn from_partition(groups: Vec<Vec<String>>) -> Self {
        Self {
            groups: groups
                .into_iter()
                .map(|members| Group {
                    label: None,
                    members,
                })
                .collect(),
        }
    }

    /// Attach a custom label to a group. Blank labels fall back to the
    /// default display name.
    pub fn set_label(&mut self, index: usize, label: impl Into<String>) -> Result<(), BoardError> {
        let group = self
            .groups
            .get_mut(index)
            .ok_or(BoardError::GroupOutOfRange(index))?;
        group.label = Some(label.into());
        Ok(())
    }

    /// Custom label if present and non-blank, otherwise "Group N" (1-based).
    pub fn display_name(&self, index: usize) -> String {
        self.groups
            .get(index)
            .and_then(|group| group.label.as_deref())
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Group {}", index + 1))
    }

    /// Move the first occurrence of `name` from one group to another.
    ///
    /// A missing member or an out-of-range index is an error; the board is
    /// left untouched in that case.
    pub fn move_member(&mut self, name: &str, from: usize, to: usize) -> Result<(), BoardError> {
        if to >= self.groups.len() {
            return Err(BoardError::GroupOutOfRange(to));
        }
        let source = self
            .groups
            .get_mut(from)
            .ok_or(BoardError::GroupOutOfRange(from))?;
        let position = source
            .members
            .iter()
            .position(|member| member == name)
            .ok_or_else(|| BoardError::MemberNotFound {
                name: name.to_string(),
                group: from,
            })?;

        let member = source.members.remove(position);
        self.groups[to].members.push(member);
        Ok(())
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> GroupBoard {
        GroupBoard::from_partition(vec![
            vec!["Ana".to_string(), "Budi".to_string()],
            vec!["Citra".to_string()],
        ])
    }

    #[test]
    fn test_from_partition() {
        let board = sample_board();
        assert_eq!(board.len(), 2);
        assert_eq!(board.groups()[0].members, vec!["Ana", "Budi"]);
        assert_eq!(board.groups()[1].members, vec!["Citra"]);
    }

    #[test]
    fn test_display_name_default() {
        let board = sample_board();
        assert_eq!(board.display_name(0), "Group 1");
        assert_eq!(board.display_name(1), "Group 2");
    }

    #[test]
    fn test_display_name_custom_label() {
        let mut board = sample_board();
        board.set_label(0, "Red Team").unwrap();
        assert_eq!(board.display_name(0), "Red Team");
        assert_eq!(board.display_name(1), "Group 2");
    }

    #[test]
    fn test_display_name_blank_label_falls_back() {
        let mut board = sample_board();
        board.set_label(0, "   ").unwrap();
        assert_eq!(board.display_name(0), "Group 1");
    }

    #[test]
    fn test_set_label_out_of_range() {
        let mut board = sample_board();
        assert_eq!(
            board.set_label(5, "Nope"),
            Err(BoardError::GroupOutOfRange(5))
        );
    }

    #[test]
    fn test_move_member() {
        let mut board = sample_board();
        board.move_member("Budi", 0, 1).unwrap();

        assert_eq!(board.groups()[0].members, vec!["Ana"]);
        assert_eq!(board.groups()[1].members, vec!["Citra", "Budi"]);
    }

    #[test]
    fn test_move_member_not_found() {
        let mut board = sample_board();
        let err = board.move_member("Dewi", 0, 1).unwrap_err();
        assert_eq!(
            err,
            BoardError::MemberNotFound {
                name: "Dewi".to_string(),
                group: 0
            }
        );
        // Board unchanged, in particular nothing was pushed to the target.
        assert_eq!(board.groups()[1].members, vec!["Citra"]);
    }

    #[test]
    fn test_move_member_bad_indices() {
        let mut board = sample_board();
        assert_eq!(
            board.move_member("Ana", 7, 1),
            Err(BoardError::GroupOutOfRange(7))
        );
        assert_eq!(
            board.move_member("Ana", 0, 7),
            Err(BoardError::GroupOutOfRange(7))
        );
    }

    #[test]
    fn test_move_member_same_group() {
        let mut board = sample_board();
        board.move_member("Ana", 0, 0).unwrap();
        assert_eq!(board.groups()[0].members, vec!["Budi", "Ana"]);
    }
}
