use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RosterError {
    #[error("At least 2 names are required (got {0})")]
    TooFewNames(usize),

    #[error("Group count must be at least 1")]
    ZeroGroups,

    #[error("Group count ({groups}) cannot exceed the number of names ({names})")]
    TooManyGroups { groups: usize, names: usize },
}
