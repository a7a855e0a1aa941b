pub mod calculator;

pub use calculator::{
    calculate_all_fees, calculate_fee_amount, calculate_fee_percentage, CalculatedFee,
    CalculatedFees,
};
