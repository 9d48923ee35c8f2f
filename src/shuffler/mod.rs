mod fisher_yates;
mod round_robin;


pub use fisher_yates::{shuffle, shuffle_with};
pub use round_robin::{partition, partition_with};
