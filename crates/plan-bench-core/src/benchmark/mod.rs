pub mod dataset;
pub mod resolver;

pub use dataset::{BenchmarkDataset, BenchmarkRow};
pub use resolver::{
    find_benchmark_percentiles, get_benchmark_comparison, BenchmarkComparison,
    BenchmarkPercentiles,
};
