mod error;
mod parse;


pub use error::RosterError;
pub use parse::{duplicates, parse};

/// Guard the preconditions the partitioner itself does not check:
/// at least two names, at least one group, never more groups than names.
pub fn validate(names: &[String], group_count: usize) -> Result<(), RosterError> {
    if names.len() < 2 {
        return Err(RosterError::TooFewNames(names.len()));
    }
    if group_count == 0 {
        return Err(RosterError::ZeroGroups);
    }
    if group_count > names.len() {
        return Err(RosterError::TooManyGroups {
            groups: group_count,
            names: names.len(),
        });
    }
    Ok(())
}
