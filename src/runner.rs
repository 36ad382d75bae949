// src/runner.rs
// One model run, start to finish: build payload → submit → scrape → cache.

use crate::data::DataSet;
use crate::error::Error;
use crate::{net, params, scrape, store};

/// Execute a model run and return the echoed inputs plus the parsed dataset.
///
/// With a case name the pair is also cached under `<case_name>.msr`. Any
/// stage's failure aborts the remaining stages and surfaces unchanged, so
/// the cache never sees a half-parsed run.
pub fn run(
    overrides: &[(&str, &str)],
    case_name: Option<&str>,
) -> Result<(String, DataSet), Error> {
    let params = params::build(overrides);
    logf!("submitting run ({} form fields)", params.pairs().len());

    let body = net::submit(&params).inspect_err(|e| loge!("{e}"))?;
    let (echo, data) = scrape::extract(&body).inspect_err(|e| loge!("{e}"))?;
    logf!("scraped {} rows x {} columns", data.len(), data.width());

    if let Some(case) = case_name {
        store::save_run(case, &echo, &data).inspect_err(|e| loge!("{e}"))?;
        logf!("cached run at {:?}", store::record_path(case));
    }

    Ok((echo, data))
}
