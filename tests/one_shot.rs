use dew_point_explorer::{
    app::{run_once, AppError, OneShot},
    config::Config,
    i18n::Translator,
    input::InputHint,
};

fn request(t: Option<&str>, td: Option<&str>, rh: Option<f64>) -> OneShot {
    OneShot {
        temperature: t.map(str::to_string),
        dew_point: td.map(str::to_string),
        rh,
    }
}

#[test]
fn empty_request_is_interactive() {
    assert!(OneShot::default().is_empty());
    assert!(!request(Some("20"), None, None).is_empty());
}

#[test]
fn temperature_and_dew_point_report() {
    let tr = Translator::new("en");
    let out = run_once(&request(Some("20"), Some("10"), None), &Config::default(), &tr)
        .expect("valid input");
    assert!(out.contains("Relative humidity (actual / maximum): 54.4 %"), "{out}");
    assert!(out.contains("Relative humidity (Magnus formula): 52.6 %"), "{out}");
    assert!(out.contains("RH = 9.4 / 17.2 × 100 = 54.4%"), "{out}");
    assert!(out.contains("Saturation"), "{out}");
    assert!(!out.contains('{'), "{out}");
}

#[test]
fn rh_request_prints_filled_dew_point_line() {
    let tr = Translator::new("en");
    let out = run_once(&request(Some("20"), None, Some(50.0)), &Config::default(), &tr)
        .expect("valid input");
    assert!(out.starts_with("Dew point at 20 °C and 50% RH: 9.26 °C\n"), "{out}");
    assert!(out.contains("Relative humidity (Magnus formula): 50.0 %"), "{out}");
    assert!(!out.contains('{'), "{out}");
}

#[test]
fn danish_output_uses_comma() {
    let tr = Translator::new("da");
    let out = run_once(&request(Some("20"), None, Some(50.0)), &Config::default(), &tr)
        .expect("valid input");
    assert!(out.contains("9,26 °C"), "{out}");
}

#[test]
fn out_of_range_temperature_is_an_error() {
    let tr = Translator::new("en");
    let err = run_once(&request(Some("61"), Some("10"), None), &Config::default(), &tr)
        .expect_err("rejected");
    assert!(matches!(
        err,
        AppError::InvalidInput {
            field: "temperature",
            hint: InputHint::OutOfRange,
            ..
        }
    ));
}

#[test]
fn dew_point_above_temperature_is_an_error() {
    let tr = Translator::new("en");
    let err = run_once(&request(Some("10"), Some("15"), None), &Config::default(), &tr)
        .expect_err("rejected");
    assert!(matches!(
        err,
        AppError::InvalidInput {
            hint: InputHint::DewPointAboveTemperature,
            ..
        }
    ));
}

#[test]
fn rh_without_temperature_or_zero_is_an_error() {
    let tr = Translator::new("en");
    assert!(run_once(&request(None, None, Some(50.0)), &Config::default(), &tr).is_err());
    assert!(run_once(&request(Some("20"), None, Some(0.0)), &Config::default(), &tr).is_err());
}
