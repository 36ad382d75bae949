// src/config/defaults.rs

/// Default form payload for the ModelWeb MSISE00 instant-run page.
///
/// Field names are the remote form's own; values mirror the form's rendered
/// defaults. The remote form is the authority on validity; nothing here is
/// validated locally. `vars` repeats, one entry per selected output variable.
pub const DEFAULT_FORM: &[(&str, &str)] = &[
    ("model", "msis"),
    ("year", "2000"),
    ("month", "1"),
    ("day", "1"),
    ("time_flag", "0"),
    ("hour", "1.5"),
    ("geo_flag", "0."),
    ("latitude", "55."),
    ("longitude", "45."),
    ("height", "100."),
    ("profile", "1"),
    ("start", "0."),
    ("stop", "1000."),
    ("step", "50."),
    // Blank geophysical indices make the service look them up by date
    ("f10_7", ""),
    ("f10_7_3", ""),
    ("ap", ""),
    ("format", "0"),
    // Output variables: height, O, N2, O2, mass density,
    // neutral and exospheric temperature
    ("vars", "05"),
    ("vars", "08"),
    ("vars", "09"),
    ("vars", "10"),
    ("vars", "11"),
    ("vars", "12"),
    ("vars", "13"),
];
