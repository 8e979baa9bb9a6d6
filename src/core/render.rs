use crate::domain::model::FeaturesUsed;

pub const FEATURE_MARK: &str = "✓ ";
pub const NO_FEATURES_PLACEHOLDER: &str = "No special features selected";

/// Rendered content of the results container.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub price: String,
    pub area: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub stories: String,
    pub parking: String,
    pub furnishing: String,
    /// Tags for the true boolean features; empty when none are set.
    pub features: Vec<String>,
}

pub fn render_results(formatted_price: &str, features: &FeaturesUsed) -> ResultsView {
    ResultsView {
        price: formatted_price.to_string(),
        area: format!("{} sq ft", features.area),
        bedrooms: count_label(features.bedrooms, "bedroom", "bedrooms"),
        bathrooms: count_label(features.bathrooms, "bathroom", "bathrooms"),
        stories: count_label(features.stories, "story", "stories"),
        parking: count_label(features.parking, "space", "spaces"),
        furnishing: capitalize_words(&features.furnishingstatus),
        features: special_features(features)
            .into_iter()
            .map(|name| format!("{}{}", FEATURE_MARK, name))
            .collect(),
    }
}

/// Plural only above one, so zero reads "0 space".
pub fn count_label(count: f64, singular: &str, plural: &str) -> String {
    let unit = if count > 1.0 { plural } else { singular };
    format!("{} {}", count, unit)
}

/// `semi-furnished` -> `Semi Furnished`
pub fn capitalize_words(value: &str) -> String {
    value
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn special_features(features: &FeaturesUsed) -> Vec<&'static str> {
    [
        (features.mainroad, "Main Road Access"),
        (features.guestroom, "Guest Room"),
        (features.basement, "Basement"),
        (features.hotwaterheating, "Hot Water Heating"),
        (features.airconditioning, "Air Conditioning"),
        (features.prefarea, "Preferred Area"),
    ]
    .into_iter()
    .filter_map(|(set, name)| set.then_some(name))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features() -> FeaturesUsed {
        FeaturesUsed {
            area: 5000.0,
            bedrooms: 1.0,
            bathrooms: 2.0,
            stories: 1.0,
            parking: 0.0,
            mainroad: true,
            guestroom: false,
            basement: true,
            hotwaterheating: false,
            airconditioning: false,
            prefarea: true,
            furnishingstatus: "semi-furnished".to_string(),
        }
    }

    #[test]
    fn test_render_results() {
        let view = render_results("$500,000", &features());

        assert_eq!(view.price, "$500,000");
        assert_eq!(view.area, "5000 sq ft");
        assert_eq!(view.bedrooms, "1 bedroom");
        assert_eq!(view.bathrooms, "2 bathrooms");
        assert_eq!(view.stories, "1 story");
        assert_eq!(view.parking, "0 space");
        assert_eq!(view.furnishing, "Semi Furnished");
        assert_eq!(
            view.features,
            vec!["✓ Main Road Access", "✓ Basement", "✓ Preferred Area"]
        );
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(1.0, "bedroom", "bedrooms"), "1 bedroom");
        assert_eq!(count_label(2.0, "bedroom", "bedrooms"), "2 bedrooms");
        assert_eq!(count_label(3.0, "story", "stories"), "3 stories");
    }

    #[test]
    fn test_fractional_area_keeps_decimals() {
        let mut f = features();
        f.area = 7420.5;
        assert_eq!(render_results("x", &f).area, "7420.5 sq ft");
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("furnished"), "Furnished");
        assert_eq!(capitalize_words("semi-furnished"), "Semi Furnished");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn test_no_special_features() {
        let mut f = features();
        f.mainroad = false;
        f.basement = false;
        f.prefarea = false;
        assert!(special_features(&f).is_empty());
        assert!(render_results("x", &f).features.is_empty());
    }
}
