use crate::config::AreaRange;
use crate::domain::model::{FormValues, FurnishingStatus, PredictionRequest, YesNo};
use crate::utils::error::{FormError, Result};
use crate::utils::validation::{require_field, require_number};

/// Number input value. Anything a number input would report as empty
/// (blank, unparseable, `NaN`, infinite) is a missing field.
fn number_field(field: &str, raw: &str) -> Result<f64> {
    let value: f64 = require_number(field, raw)?;
    if !value.is_finite() {
        return Err(FormError::MissingField {
            field: field.to_string(),
        });
    }
    Ok(value)
}

/// Map the current field values into a request payload.
///
/// Empty or unparseable numeric fields and a missing furnishing status are
/// reported as [`FormError::MissingField`], checked in form order.
pub fn build_payload(values: &FormValues) -> Result<PredictionRequest> {
    let area = number_field("area", &values.area)?;
    let bedrooms = number_field("bedrooms", &values.bedrooms)?;
    let bathrooms = number_field("bathrooms", &values.bathrooms)?;
    let stories = number_field("stories", &values.stories)?;
    let parking = number_field("parking", &values.parking)?;
    let furnishingstatus: FurnishingStatus =
        require_field("furnishingstatus", &values.furnishingstatus)?.parse()?;

    Ok(PredictionRequest {
        area,
        bedrooms,
        bathrooms,
        stories,
        parking,
        mainroad: YesNo::from(values.mainroad),
        guestroom: YesNo::from(values.guestroom),
        basement: YesNo::from(values.basement),
        hotwaterheating: YesNo::from(values.hotwaterheating),
        airconditioning: YesNo::from(values.airconditioning),
        prefarea: YesNo::from(values.prefarea),
        furnishingstatus,
    })
}

pub fn check_area(area: f64, range: AreaRange) -> Result<()> {
    if !range.contains(area) {
        return Err(FormError::AreaOutOfRange {
            value: area,
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}

/// Required fields first, then the area range.
pub fn validate(values: &FormValues, range: AreaRange) -> Result<PredictionRequest> {
    let request = build_payload(values)?;
    check_area(request.area, range)?;
    Ok(request)
}

/// Live check for the area input. Only a value that parses as a number and
/// falls outside the range is rejected; empty or partial input is left alone.
pub fn check_live_area(raw: &str, range: AreaRange) -> Result<()> {
    match raw.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => check_area(value, range),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormValues {
        FormValues {
            area: "7420".to_string(),
            bedrooms: "4".to_string(),
            bathrooms: "2".to_string(),
            stories: "3".to_string(),
            parking: "2".to_string(),
            mainroad: true,
            guestroom: false,
            basement: false,
            hotwaterheating: false,
            airconditioning: true,
            prefarea: true,
            furnishingstatus: "furnished".to_string(),
        }
    }

    #[test]
    fn test_valid_form_builds_payload() {
        let request = validate(&filled(), AreaRange::default()).unwrap();

        assert_eq!(request.area, 7420.0);
        assert_eq!(request.bedrooms, 4.0);
        assert_eq!(request.mainroad, YesNo::Yes);
        assert_eq!(request.guestroom, YesNo::No);
        assert_eq!(request.furnishingstatus, FurnishingStatus::Furnished);
    }

    #[test]
    fn test_zero_parking_is_valid() {
        let mut values = filled();
        values.parking = "0".to_string();

        let request = validate(&values, AreaRange::default()).unwrap();
        assert_eq!(request.parking, 0.0);
    }

    #[test]
    fn test_each_required_field_is_checked() {
        let names = [
            "area",
            "bedrooms",
            "bathrooms",
            "stories",
            "parking",
            "furnishingstatus",
        ];

        for name in names {
            let mut values = filled();
            match name {
                "area" => values.area.clear(),
                "bedrooms" => values.bedrooms.clear(),
                "bathrooms" => values.bathrooms.clear(),
                "stories" => values.stories.clear(),
                "parking" => values.parking.clear(),
                _ => values.furnishingstatus.clear(),
            }
            match validate(&values, AreaRange::default()) {
                Err(FormError::MissingField { field }) => assert_eq!(field, name),
                other => panic!("expected missing {}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_missing_field_wins_over_range() {
        let mut values = filled();
        values.area = "10".to_string();
        values.bedrooms.clear();

        assert!(matches!(
            validate(&values, AreaRange::default()),
            Err(FormError::MissingField { .. })
        ));
    }

    #[test]
    fn test_area_bounds() {
        for (area, ok) in [
            ("1649", false),
            ("1650", true),
            ("16200", true),
            ("16200.01", false),
            ("-5", false),
        ] {
            let mut values = filled();
            values.area = area.to_string();
            assert_eq!(
                validate(&values, AreaRange::default()).is_ok(),
                ok,
                "area {}",
                area
            );
        }
    }

    #[test]
    fn test_non_numeric_area_counts_as_missing() {
        for raw in ["abc", "NaN", "inf"] {
            let mut values = filled();
            values.area = raw.to_string();
            assert!(matches!(
                validate(&values, AreaRange::default()),
                Err(FormError::MissingField { .. })
            ));
        }
    }

    #[test]
    fn test_filled_counts_are_not_missing() {
        for (raw, expected) in [("2.5", 2.5), ("3.0", 3.0), ("-1", -1.0), (" 3 ", 3.0)] {
            let mut values = filled();
            values.bedrooms = raw.to_string();
            let request = validate(&values, AreaRange::default()).unwrap();
            assert_eq!(request.bedrooms, expected, "bedrooms {:?}", raw);
        }
    }

    #[test]
    fn test_non_numeric_count_counts_as_missing() {
        for raw in ["two", "NaN", "-inf"] {
            let mut values = filled();
            values.parking = raw.to_string();
            match validate(&values, AreaRange::default()) {
                Err(FormError::MissingField { field }) => assert_eq!(field, "parking"),
                other => panic!("expected missing parking for {:?}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_unknown_furnishing_status() {
        let mut values = filled();
        values.furnishingstatus = "luxury".to_string();
        assert!(matches!(
            validate(&values, AreaRange::default()),
            Err(FormError::InvalidChoice { .. })
        ));
    }

    #[test]
    fn test_live_area_check() {
        let range = AreaRange::default();
        assert!(matches!(
            check_live_area("1000", range),
            Err(FormError::AreaOutOfRange { .. })
        ));
        assert!(check_live_area("20000", range).is_err());
        assert!(check_live_area("5000", range).is_ok());
        assert!(check_live_area("", range).is_ok());
        assert!(check_live_area("12a", range).is_ok());
    }
}
