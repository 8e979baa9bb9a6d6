use crate::core::render::NO_FEATURES_PLACEHOLDER;
use crate::core::view::ViewState;
use crate::domain::model::FormValues;
use crate::domain::ports::Page;

/// Element ids of the host page.
pub mod ids {
    pub const AREA: &str = "area";
    pub const BEDROOMS: &str = "bedrooms";
    pub const BATHROOMS: &str = "bathrooms";
    pub const STORIES: &str = "stories";
    pub const PARKING: &str = "parking";
    pub const MAINROAD: &str = "mainroad";
    pub const GUESTROOM: &str = "guestroom";
    pub const BASEMENT: &str = "basement";
    pub const HOTWATERHEATING: &str = "hotwaterheating";
    pub const AIRCONDITIONING: &str = "airconditioning";
    pub const PREFAREA: &str = "prefarea";
    pub const FURNISHINGSTATUS: &str = "furnishingstatus";

    pub const LOADING: &str = "loading";
    pub const ERROR: &str = "error";
    pub const RESULTS_CONTAINER: &str = "resultsContainer";
    pub const INFO_SECTION: &str = "infoSection";

    pub const PREDICTED_PRICE: &str = "predictedPrice";
    pub const DETAIL_AREA: &str = "detailArea";
    pub const DETAIL_BEDROOMS: &str = "detailBedrooms";
    pub const DETAIL_BATHROOMS: &str = "detailBathrooms";
    pub const DETAIL_STORIES: &str = "detailStories";
    pub const DETAIL_PARKING: &str = "detailParking";
    pub const DETAIL_FURNISHING: &str = "detailFurnishing";
    pub const FEATURES_LIST: &str = "featuresList";

    pub const TEXT_INPUTS: [&str; 6] = [
        AREA,
        BEDROOMS,
        BATHROOMS,
        STORIES,
        PARKING,
        FURNISHINGSTATUS,
    ];
    pub const CHECKBOXES: [&str; 6] = [
        MAINROAD,
        GUESTROOM,
        BASEMENT,
        HOTWATERHEATING,
        AIRCONDITIONING,
        PREFAREA,
    ];
}

pub fn read_form<P: Page + ?Sized>(page: &P) -> FormValues {
    let text = |id: &str| page.value(id).unwrap_or_default();

    FormValues {
        area: text(ids::AREA),
        bedrooms: text(ids::BEDROOMS),
        bathrooms: text(ids::BATHROOMS),
        stories: text(ids::STORIES),
        parking: text(ids::PARKING),
        mainroad: page.is_checked(ids::MAINROAD),
        guestroom: page.is_checked(ids::GUESTROOM),
        basement: page.is_checked(ids::BASEMENT),
        hotwaterheating: page.is_checked(ids::HOTWATERHEATING),
        airconditioning: page.is_checked(ids::AIRCONDITIONING),
        prefarea: page.is_checked(ids::PREFAREA),
        furnishingstatus: text(ids::FURNISHINGSTATUS),
    }
}

/// Write the whole view state to the page.
pub fn apply<P: Page + ?Sized>(page: &mut P, view: &ViewState) {
    page.set_hidden(ids::LOADING, !view.loading_visible);
    page.set_hidden(ids::INFO_SECTION, !view.info_visible);

    page.set_text(ids::ERROR, view.error_text().unwrap_or(""));
    page.set_hidden(ids::ERROR, view.error.is_none());

    // 隱藏時保留上一次的結果內容
    if let Some(results) = &view.results {
        page.set_text(ids::PREDICTED_PRICE, &results.price);
        page.set_text(ids::DETAIL_AREA, &results.area);
        page.set_text(ids::DETAIL_BEDROOMS, &results.bedrooms);
        page.set_text(ids::DETAIL_BATHROOMS, &results.bathrooms);
        page.set_text(ids::DETAIL_STORIES, &results.stories);
        page.set_text(ids::DETAIL_PARKING, &results.parking);
        page.set_text(ids::DETAIL_FURNISHING, &results.furnishing);

        if results.features.is_empty() {
            page.set_items(ids::FEATURES_LIST, &[NO_FEATURES_PLACEHOLDER.to_string()]);
        } else {
            page.set_items(ids::FEATURES_LIST, &results.features);
        }
    }
    page.set_hidden(ids::RESULTS_CONTAINER, !view.results_visible);
}
