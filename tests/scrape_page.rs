// tests/scrape_page.rs
//
// End-to-end scrape of a page shaped like the ModelWeb instant-run output:
// an echoed-inputs <pre> block followed by the bordered data table.

use msise_scrape::error::Error;
use msise_scrape::scrape::extract;

const RESULT_PAGE: &str = r##"<html>
<head><title>Model output</title></head>
<body bgcolor="#ffffff">
<pre>
Input parameters:
year= 2000, month= 1, day= 1, hour= 1.50,
Time_type = Universal
Coordinate_type = Geographic
latitude=   55.00, longitude=   45.00, height=  100.00
Selected output parameters:
</pre>
<hr>
<table border="1" cellpadding="2">
<tr><th>Height, km</th><th>O, cm-3</th><th>N2, cm-3</th><th>Temperature_neutral, K</th></tr>
<tr><td>100.0</td><td>4.6E+11</td><td>9.4E+12</td><td>192.2</td></tr>
<tr><td>150.0</td><td>1.8E+10</td><td>3.2E+10</td><td>634.3</td></tr>
<tr><td>200.0</td><td>4.1E+09</td><td>2.9E+09</td><td>854.9</td></tr>
</table>
</body>
</html>"##;

#[test]
fn echo_carries_the_restated_inputs() {
    let (echo, _) = extract(RESULT_PAGE).unwrap();
    assert!(echo.starts_with("Input parameters:"));
    assert!(echo.contains("latitude=   55.00"));
    assert!(echo.ends_with("Selected output parameters:"));
}

#[test]
fn table_scrapes_to_numeric_columns() {
    let (_, data) = extract(RESULT_PAGE).unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(
        data.headers(),
        ["Height, km", "O, cm-3", "N2, cm-3", "Temperature_neutral, K"]
    );
    assert_eq!(data.numbers("Height, km"), Some(vec![100.0, 150.0, 200.0]));
    assert_eq!(data.numbers("O, cm-3"), Some(vec![4.6e11, 1.8e10, 4.1e9]));
    assert_eq!(
        data.numbers("Temperature_neutral, K"),
        Some(vec![192.2, 634.3, 854.9])
    );
}

#[test]
fn service_error_page_is_a_scrape_error() {
    let page = r#"<html><body>
<h2>ERROR</h2>
<pre>Invalid value for start height</pre>
</body></html>"#;

    match extract(page) {
        Err(Error::Scrape(msg)) => assert!(msg.contains("no table found")),
        other => panic!("expected Scrape error, got {:?}", other.map(|_| ())),
    }
}
