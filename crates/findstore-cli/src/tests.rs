use super::*;

#[test]
fn parses_address_with_defaults() {
    let cli = Cli::try_parse_from(["find-store", "--address", "5537 W Broadway Ave"])
        .expect("expected valid cli args");

    assert_eq!(cli.address.as_deref(), Some("5537 W Broadway Ave"));
    assert!(cli.zip.is_none());
    assert_eq!(cli.units, Units::Mi);
    assert_eq!(cli.output, OutputFormat::Text);
}

#[test]
fn parses_zip_with_units_and_output() {
    let cli = Cli::try_parse_from([
        "find-store",
        "--zip",
        "94107",
        "--units",
        "km",
        "--output",
        "json",
    ])
    .expect("expected valid cli args");

    assert_eq!(cli.zip.as_deref(), Some("94107"));
    assert!(cli.address.is_none());
    assert_eq!(cli.units, Units::Km);
    assert_eq!(cli.output, OutputFormat::Json);
}

#[test]
fn rejects_address_and_zip_together() {
    let result = Cli::try_parse_from(["find-store", "--address", "Crystal, MN", "--zip", "55428"]);
    assert!(result.is_err());
}

#[test]
fn neither_location_is_left_to_the_pipeline() {
    let cli = Cli::try_parse_from(["find-store"]).expect("expected valid cli args");
    assert!(cli.address.is_none());
    assert!(cli.zip.is_none());
}

#[test]
fn rejects_unknown_units() {
    let result = Cli::try_parse_from(["find-store", "--zip", "94107", "--units", "furlongs"]);
    assert!(result.is_err());
}

#[test]
fn rejects_unknown_output() {
    let result = Cli::try_parse_from(["find-store", "--zip", "94107", "--output", "xml"]);
    assert!(result.is_err());
}

#[test]
fn units_map_to_distance_units() {
    assert_eq!(DistanceUnit::from(Units::Mi), DistanceUnit::Miles);
    assert_eq!(DistanceUnit::from(Units::Km), DistanceUnit::Kilometers);
}
