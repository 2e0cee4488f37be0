pub mod aggregator;

pub use aggregator::{
    aggregate, apply_bonuses, compare_after_bonuses, compare_standings, is_auto_approved,
};
