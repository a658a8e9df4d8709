//! Run many independent projections in parallel

use super::{project, YearlyDataPoint};
use crate::plan::ProjectionInput;
use rayon::prelude::*;

/// Project every input on the rayon pool. Output order matches input order.
pub fn project_batch(inputs: &[ProjectionInput]) -> Vec<Vec<YearlyDataPoint>> {
    log::debug!("Running {} projections", inputs.len());
    inputs.par_iter().map(project).collect()
}
