// src/config/consts.rs

// Net config
pub const ENDPOINT: &str =
    "https://ccmc.gsfc.nasa.gov/cgi-bin/modelweb/models/vitmo_model.cgi";
pub const USER_AGENT: &str = "msise_scrape/0.3";
pub const TIMEOUT_SECS: u64 = 30; // the instant-run backend is slow

// Local cache
pub const STORE_EXT: &str = "msr";
