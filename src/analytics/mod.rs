//! Analytics module for name trend and adoption analysis

pub mod adoption_trends;
pub mod name_trends;

pub use adoption_trends::{
    late_adopters, late_adopters_in_period, trend_setters, trend_setters_in_period,
    ADOPTION_WINDOW,
};
pub use name_trends::{
    emergent_names, new_names, popular_names, rank_names, states_with_name, NameShare,
    TrendError, TrendResult, EMERGENCE_HORIZON, NOVELTY_WINDOW, TOP_DECILE,
};
