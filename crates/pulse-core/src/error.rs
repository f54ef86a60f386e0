use thiserror::Error;

/// Validation errors for caller-supplied chart data.
///
/// Charts degrade to a placeholder render rather than failing, but the
/// conditions below are reported instead of silently producing NaN
/// geometry.
#[derive(Error, Debug)]
pub enum ChartDataError {
    #[error("series '{series}' has {actual} values but {expected} categories")]
    SeriesLengthMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },

    #[error("radar data has no categories")]
    EmptyCategories,

    #[error("invalid ISO date: {date}")]
    InvalidDate {
        date: String,
        #[source]
        source: chrono::ParseError,
    },
}
