// src/store.rs
//
// One binary record per cached case: `<case_name>.msr` holding the echoed
// inputs and the parsed dataset. Overwrite semantics, no version field.
// A record the current reader cannot decode is a storage error; the
// caller re-fetches from the service.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::consts::STORE_EXT;
use crate::data::DataSet;
use crate::error::Error;

#[derive(Serialize, Deserialize)]
struct CacheRecord {
    run_echo: String,
    rundata: DataSet,
}

/// Storage path for a case name: the name verbatim plus the fixed extension.
/// No sanitization; the caller owns the legality of the name.
pub fn record_path(case_name: &str) -> PathBuf {
    PathBuf::from(join!(case_name, ".", STORE_EXT))
}

/// Create or overwrite the cached record for `case_name`.
pub fn save_run(case_name: &str, run_echo: &str, rundata: &DataSet) -> Result<(), Error> {
    let path = record_path(case_name);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(storage)?;
        }
    }

    let record = CacheRecord {
        run_echo: s!(run_echo),
        rundata: rundata.clone(),
    };

    let file = File::create(&path).map_err(storage)?;
    let mut out = BufWriter::new(file);
    bincode::serialize_into(&mut out, &record).map_err(storage)?;
    out.flush().map_err(storage)?;
    Ok(())
}

/// Load the cached record for `case_name`.
///
/// A missing record is `Error::NotFound`; an unreadable or truncated one is
/// `Error::Storage`. No partial recovery is attempted.
pub fn load_run(case_name: &str) -> Result<(String, DataSet), Error> {
    let path = record_path(case_name);

    let file = match File::open(&path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::NotFound(s!(case_name)));
        }
        Err(e) => return Err(storage(e)),
    };

    let record: CacheRecord =
        bincode::deserialize_from(BufReader::new(file)).map_err(storage)?;
    Ok((record.run_echo, record.rundata))
}

fn storage(e: impl std::fmt::Display) -> Error {
    Error::Storage(e.to_string())
}
