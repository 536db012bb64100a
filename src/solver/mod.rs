pub mod constraint;
pub mod csp;
pub mod stats;
pub mod value;
pub mod work_list;

mod propagation;
mod search;
