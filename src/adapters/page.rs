use crate::core::page::ids;
use crate::domain::model::FormValues;
use crate::domain::ports::Page;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq)]
struct Element {
    value: String,
    default_value: String,
    checked: bool,
    default_checked: bool,
    text: String,
    hidden: bool,
    items: Vec<String>,
}

/// In-memory stand-in for the host document.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    elements: BTreeMap<String, Element>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page with every element the prediction form expects.
    pub fn house_form() -> Self {
        let mut page = Self::new();
        for id in ids::TEXT_INPUTS.iter().chain(ids::CHECKBOXES.iter()) {
            page.elements.insert(id.to_string(), Element::default());
        }
        for id in [
            ids::LOADING,
            ids::ERROR,
            ids::RESULTS_CONTAINER,
            ids::INFO_SECTION,
            ids::PREDICTED_PRICE,
            ids::DETAIL_AREA,
            ids::DETAIL_BEDROOMS,
            ids::DETAIL_BATHROOMS,
            ids::DETAIL_STORIES,
            ids::DETAIL_PARKING,
            ids::DETAIL_FURNISHING,
            ids::FEATURES_LIST,
        ] {
            page.elements.insert(id.to_string(), Element::default());
        }
        page
    }

    pub fn text(&self, id: &str) -> &str {
        self.elements.get(id).map(|e| e.text.as_str()).unwrap_or("")
    }

    /// Missing elements count as hidden.
    pub fn is_hidden(&self, id: &str) -> bool {
        self.elements.get(id).map(|e| e.hidden).unwrap_or(true)
    }

    pub fn items(&self, id: &str) -> &[String] {
        self.elements
            .get(id)
            .map(|e| e.items.as_slice())
            .unwrap_or(&[])
    }

    pub fn set_checked(&mut self, id: &str, checked: bool) {
        self.entry(id).checked = checked;
    }

    /// Type the given values into the form inputs.
    pub fn fill(&mut self, values: &FormValues) {
        self.set_value(ids::AREA, &values.area);
        self.set_value(ids::BEDROOMS, &values.bedrooms);
        self.set_value(ids::BATHROOMS, &values.bathrooms);
        self.set_value(ids::STORIES, &values.stories);
        self.set_value(ids::PARKING, &values.parking);
        self.set_value(ids::FURNISHINGSTATUS, &values.furnishingstatus);
        self.set_checked(ids::MAINROAD, values.mainroad);
        self.set_checked(ids::GUESTROOM, values.guestroom);
        self.set_checked(ids::BASEMENT, values.basement);
        self.set_checked(ids::HOTWATERHEATING, values.hotwaterheating);
        self.set_checked(ids::AIRCONDITIONING, values.airconditioning);
        self.set_checked(ids::PREFAREA, values.prefarea);
    }

    fn entry(&mut self, id: &str) -> &mut Element {
        self.elements.entry(id.to_string()).or_default()
    }
}

impl Page for MemoryPage {
    fn value(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(|e| e.value.clone())
    }

    fn set_value(&mut self, id: &str, value: &str) {
        self.entry(id).value = value.to_string();
    }

    fn is_checked(&self, id: &str) -> bool {
        self.elements.get(id).map(|e| e.checked).unwrap_or(false)
    }

    fn set_text(&mut self, id: &str, text: &str) {
        self.entry(id).text = text.to_string();
    }

    fn set_hidden(&mut self, id: &str, hidden: bool) {
        self.entry(id).hidden = hidden;
    }

    fn set_items(&mut self, id: &str, items: &[String]) {
        self.entry(id).items = items.to_vec();
    }

    fn reset_inputs(&mut self) {
        for element in self.elements.values_mut() {
            element.value = element.default_value.clone();
            element.checked = element.default_checked;
        }
    }
}

/// Plain-text dump of the visible regions.
impl fmt::Display for MemoryPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_hidden(ids::LOADING) {
            writeln!(f, "Estimating price...")?;
        }
        if !self.is_hidden(ids::ERROR) {
            writeln!(f, "{}", self.text(ids::ERROR))?;
        }
        if !self.is_hidden(ids::RESULTS_CONTAINER) {
            writeln!(f, "Estimated price: {}", self.text(ids::PREDICTED_PRICE))?;
            for (label, id) in [
                ("Area", ids::DETAIL_AREA),
                ("Bedrooms", ids::DETAIL_BEDROOMS),
                ("Bathrooms", ids::DETAIL_BATHROOMS),
                ("Stories", ids::DETAIL_STORIES),
                ("Parking", ids::DETAIL_PARKING),
                ("Furnishing", ids::DETAIL_FURNISHING),
            ] {
                writeln!(f, "  {:<11}{}", format!("{}:", label), self.text(id))?;
            }
            writeln!(f, "Special features:")?;
            for item in self.items(ids::FEATURES_LIST) {
                writeln!(f, "  {}", item)?;
            }
        }
        Ok(())
    }
}
