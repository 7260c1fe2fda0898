// Forecast table builder - flattens the nested payload into records
use crate::domain::forecast::{ForecastResponse, ForecastTable, PayloadError};

/// Build one record per sample, keeping the order of the response.
///
/// Pure: no I/O, and the same response always yields the same table. The
/// first sample with a missing field aborts the whole build.
pub fn build_table(response: &ForecastResponse) -> Result<ForecastTable, PayloadError> {
    response
        .list
        .iter()
        .enumerate()
        .map(|(index, sample)| sample.to_record(index))
        .collect::<Result<Vec<_>, _>>()
        .map(ForecastTable::new)
}
