use crate::domain::model::{Availability, Venue};
use crate::utils::error::Result;

pub const EMPTY_STATE_MESSAGE: &str = "No venues found matching your criteria.";

pub fn availability_label(status: Availability) -> &'static str {
    match status {
        Availability::Available => "Available",
        Availability::Busy => "Limited availability",
        Availability::Booked => "Fully booked",
        Availability::Unknown => "Check availability",
    }
}

/// Presentation layer for a result list.
pub trait Renderer {
    fn render(&self, venues: &[Venue]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn card(&self, venue: &Venue) -> String {
        let mut lines = vec![
            format!("[{}] {}", venue.id, venue.name),
            format!("    📍 {}", venue.location),
        ];
        if !venue.features.is_empty() {
            lines.push(format!("    {}", venue.features.join(" · ")));
        }
        lines.push(format!("    {}", venue.price));
        lines.push(format!("    ● {}", availability_label(venue.availability)));
        lines.push(format!(
            "    ⭐ {}   👥 Up to {} guests",
            venue.rating, venue.capacity
        ));
        lines.join("\n")
    }

    pub fn details(&self, venue: &Venue) -> String {
        let mut out = self.card(venue);
        out.push_str(&format!("\n    Type: {}", venue.venue_type));
        if let (Some(lat), Some(lon)) = (venue.lat, venue.lon) {
            out.push_str(&format!("\n    Coordinates: {:.5}, {:.5}", lat, lon));
        }
        if !venue.booked_dates.is_empty() {
            let dates: Vec<String> = venue.booked_dates.iter().map(|d| d.to_string()).collect();
            out.push_str(&format!("\n    Booked on: {}", dates.join(", ")));
        }
        out
    }
}

impl Renderer for TextRenderer {
    fn render(&self, venues: &[Venue]) -> Result<String> {
        if venues.is_empty() {
            return Ok(EMPTY_STATE_MESSAGE.to_string());
        }

        Ok(venues
            .iter()
            .map(|venue| self.card(venue))
            .collect::<Vec<_>>()
            .join("\n\n"))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl Renderer for JsonRenderer {
    fn render(&self, venues: &[Venue]) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(venues)?
        } else {
            serde_json::to_string(venues)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::VenueCatalog;

    #[test]
    fn test_availability_labels() {
        assert_eq!(availability_label(Availability::Available), "Available");
        assert_eq!(availability_label(Availability::Busy), "Limited availability");
        assert_eq!(availability_label(Availability::Booked), "Fully booked");
        assert_eq!(availability_label(Availability::Unknown), "Check availability");
    }

    #[test]
    fn test_empty_list_renders_empty_state_only() {
        let output = TextRenderer.render(&[]).unwrap();
        assert_eq!(output, EMPTY_STATE_MESSAGE);
        assert!(!output.contains("guests"));
    }

    #[test]
    fn test_renders_one_card_per_venue() {
        let catalog = VenueCatalog::sample();
        let output = TextRenderer.render(catalog.all()).unwrap();

        assert_eq!(output.matches("Up to").count(), 4);
        assert!(output.contains("[2] Serena Hotel"));
        assert!(output.contains("Limited availability"));
        assert!(output.contains("Up to 500 guests"));
        assert!(output.contains("Garden · Parking · Catering · Photography"));
        assert!(!output.contains(EMPTY_STATE_MESSAGE));
    }

    #[test]
    fn test_card_layout() {
        let mut venue = VenueCatalog::sample().get(1).cloned().unwrap();
        let card = TextRenderer.card(&venue);
        assert_eq!(card.lines().count(), 6);
        assert!(card.starts_with("[1] Kigali Convention Centre\n"));
        assert!(card.ends_with("⭐ 4.8   👥 Up to 500 guests"));

        venue.features.clear();
        assert_eq!(TextRenderer.card(&venue).lines().count(), 5);
    }

    #[test]
    fn test_details_include_type() {
        let catalog = VenueCatalog::sample();
        let venue = catalog.get(4).unwrap();
        let output = TextRenderer.details(venue);
        assert!(output.contains("Type: cultural"));
        assert!(output.contains("Fully booked"));
    }

    #[test]
    fn test_json_renderer_emits_array() {
        let catalog = VenueCatalog::sample();
        let output = JsonRenderer { pretty: false }.render(catalog.all()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value.as_array().map(|a| a.len()), Some(4));
        assert_eq!(value[2]["type"], "hall");

        let empty = JsonRenderer::default().render(&[]).unwrap();
        assert_eq!(empty, "[]");
    }
}
